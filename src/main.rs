use std::io::{self, stdout};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::{error, info};

use genericdev_hub::app::App;
use genericdev_hub::cli::{Args, VERSION};
use genericdev_hub::logging::init_logging;
use genericdev_hub::store::SupabaseClient;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env is fine; flags and the real environment still apply
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("genericdev-hub: {}", err);
            return Ok(ExitCode::from(2));
        }
    };

    let client = match SupabaseClient::new(&config.supabase_url, &config.anon_key) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("genericdev-hub: {}", err);
            return Ok(ExitCode::from(2));
        }
    };

    let _log_guard = init_logging(&config.log)?;
    info!(version = VERSION, tab = config.initial_tab.id(), "starting");

    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let mut app = App::new(Arc::new(client), config.initial_tab);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "terminal loop failed");
    }
    info!("exiting");

    result.map(|()| ExitCode::SUCCESS).map_err(Into::into)
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        // Handle input
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Leave raw mode before the default hook prints, so the message is readable
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        error!(%panic_info, "panic");
        default_hook(panic_info);
    }));
}
