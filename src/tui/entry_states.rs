use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

use super::app::{FormContext, ScreenState, Transition};
use crate::validation::{Field, validate};

const PANEL_WIDTH: u16 = 44;

pub(crate) struct EntryForm;

impl EntryForm {
    fn render_list(context: &FormContext, frame: &mut Frame, area: Rect) {
        let header = Row::new(vec!["#", "Name", "Brand", "Price", "Quantity"])
            .style(Style::default().fg(Color::DarkGray))
            .bottom_margin(1);

        let rows: Vec<Row> = context
            .list
            .lines
            .iter()
            .map(|line| {
                Row::new(vec![
                    line.label(),
                    line.product_name.clone(),
                    line.product_brand.clone(),
                    line.formatted_price(),
                    line.product_quantity.to_string(),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Length(16),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Shopping list"));

        frame.render_widget(table, area);
    }

    fn render_input(context: &FormContext, field: Field, frame: &mut Frame, area: Rect) {
        let label = match field {
            Field::Name => "Name",
            Field::Brand => "Brand",
            Field::Quantity => "Quantity",
            Field::Price => "Price (BRL)",
        };
        let focused = context.focus == field;
        let value = context.form.value(field);

        let (title, border_style) = match context.errors.get(field) {
            Some(error) => (format!("{label} - {error}"), Style::default().fg(Color::Red)),
            None if focused => (label.to_string(), Style::default().fg(Color::White)),
            None => (label.to_string(), Style::default().fg(Color::DarkGray)),
        };

        let text = if value.is_empty() && !focused {
            Line::from(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ))
        } else if focused {
            Line::from(vec![
                Span::raw(value),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ])
        } else {
            Line::from(value)
        };

        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
        frame.render_widget(input, area);
    }
}

impl ScreenState for EntryForm {
    fn render(&self, context: &FormContext, frame: &mut Frame) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(PANEL_WIDTH)])
            .split(frame.area());

        Self::render_list(context, frame, columns[0]);

        let panel = Block::default().borders(Borders::ALL).title("Add");
        let inner = panel.inner(columns[1]);
        frame.render_widget(panel, columns[1]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name
                Constraint::Length(3), // Brand
                Constraint::Length(3), // Quantity
                Constraint::Length(3), // Price
                Constraint::Length(3), // Total
                Constraint::Min(1),    // Help
            ])
            .split(inner);

        for (field, area) in Field::ALL.into_iter().zip(rows.iter()) {
            Self::render_input(context, field, frame, *area);
        }

        let total = Paragraph::new(context.list.formatted_total())
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::TOP).title("Total"));
        frame.render_widget(total, rows[4]);

        let help = Paragraph::new("Tab/Shift-Tab move - Enter add item to cart - Esc quit")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(help, rows[5]);
    }

    fn handle_key(&mut self, key: KeyCode, context: &mut FormContext) -> Transition {
        match key {
            KeyCode::Char(c) => {
                context.form.value_mut(context.focus).push(c);
                context.errors.remove(context.focus); // Clear error when user types
                Transition::Stay
            }
            KeyCode::Backspace => {
                context.form.value_mut(context.focus).pop();
                context.errors.remove(context.focus);
                Transition::Stay
            }
            KeyCode::Tab | KeyCode::Down => {
                context.focus = context.focus.next();
                Transition::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                context.focus = context.focus.previous();
                Transition::Stay
            }
            KeyCode::Enter => match validate(&context.form) {
                Ok(item) => {
                    context.errors = Default::default();
                    Transition::Submit(item)
                }
                Err(errors) => {
                    if let Some((field, _)) = errors.iter().next() {
                        context.focus = field;
                    }
                    context.errors = errors;
                    Transition::Stay
                }
            },
            _ => Transition::Stay,
        }
    }
}

pub(crate) struct StorageFailure {
    message: String,
}

impl StorageFailure {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

impl ScreenState for StorageFailure {
    fn render(&self, _context: &FormContext, frame: &mut Frame) {
        let message = format!(
            "The item could not be saved.\n\n{}\n\nPress any key to go back to the form.",
            self.message
        );

        let block = Paragraph::new(message)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title("Storage error"),
            );
        frame.render_widget(block, frame.area());
    }

    fn handle_key(&mut self, _key: KeyCode, _context: &mut FormContext) -> Transition {
        Transition::Switch(Box::new(EntryForm))
    }
}
