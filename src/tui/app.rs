use crossterm::event::KeyCode;
use ratatui::Frame;

use super::entry_states::{EntryForm, StorageFailure};
use crate::models::Item;
use crate::models::api::ShoppingList;
use crate::validation::{Field, FieldErrors, ItemForm};

pub enum AppAction {
    Continue,     // Keep running
    Submit(Item), // Form validated - persist this item
    Exit,         // Esc pressed
}

pub struct ShoppingApp {
    state: Box<dyn ScreenState>,
    context: FormContext,
}

pub struct FormContext {
    pub list: ShoppingList,
    pub form: ItemForm,
    pub focus: Field,
    pub errors: FieldErrors,
}

impl FormContext {
    pub fn new(list: ShoppingList) -> Self {
        Self {
            list,
            form: ItemForm::default(),
            focus: Field::Name,
            errors: FieldErrors::default(),
        }
    }

    fn reset_form(&mut self) {
        self.form.clear();
        self.errors = FieldErrors::default();
        self.focus = Field::Name;
    }
}

pub(crate) enum Transition {
    Stay,
    Switch(Box<dyn ScreenState>),
    Submit(Item),
}

pub(crate) trait ScreenState {
    fn render(&self, context: &FormContext, frame: &mut Frame);
    fn handle_key(&mut self, key: KeyCode, context: &mut FormContext) -> Transition;
}

impl ShoppingApp {
    pub fn new(list: ShoppingList) -> Self {
        Self {
            state: Box::new(EntryForm),
            context: FormContext::new(list),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        self.state.render(&self.context, frame);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        // global exit behavior
        if key == KeyCode::Esc {
            return AppAction::Exit;
        }

        match self.state.handle_key(key, &mut self.context) {
            Transition::Stay => AppAction::Continue,
            Transition::Switch(next_state) => {
                self.state = next_state;
                AppAction::Continue
            }
            Transition::Submit(item) => AppAction::Submit(item),
        }
    }

    /// The submitted item was stored: show the new list and clear the form
    pub fn item_saved(&mut self, list: ShoppingList) {
        self.context.list = list;
        self.context.reset_form();
    }

    /// The submitted item could not be stored; the form keeps its contents
    pub fn storage_failed(&mut self, message: impl Into<String>) {
        self.state = Box::new(StorageFailure::new(message.into()));
    }

    pub fn context(&self) -> &FormContext {
        &self.context
    }
}
