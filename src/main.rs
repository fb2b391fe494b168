use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use shoplist::{
    config::get_configuration,
    controllers::{add_item, load_shopping_list},
    store::SqliteItemRepository,
    telemetry::init_tracing,
    tui::app::{AppAction, ShoppingApp},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = get_configuration().context("Failed to read configuration")?;
    init_tracing(&settings).context("Failed to open log file")?;

    // Database setup
    let pool = shoplist::connect(&settings.database_url)
        .await
        .context("Failed to open database")?;
    let repo = SqliteItemRepository::new(pool, settings.storage_key.clone());

    // Load before touching the terminal so a bad collection is reported plainly
    let list = load_shopping_list(&repo)
        .await
        .with_context(|| format!("Failed to read stored list '{}'", repo.key()))?;
    let mut app = ShoppingApp::new(list);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result: anyhow::Result<()> = async {
        loop {
            // Draw UI
            terminal.draw(|f| app.render(f))?;

            // Handle input
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_key(key.code) {
                    AppAction::Continue => {}
                    AppAction::Submit(item) => match add_item(&repo, item).await {
                        Ok(list) => app.item_saved(list),
                        Err(err) => {
                            error!(error = %err, "Failed to save item");
                            app.storage_failed(err.to_string());
                        }
                    },
                    AppAction::Exit => break Ok(()),
                }
            }
        }
    }
    .await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    info!("Exiting");
    result
}
