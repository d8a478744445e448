use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use notifyme_console::api::{ApiClient, ApiHandle, worker::WORKER_THREAD_NAME};
use notifyme_console::config::{self, ConfigResult};
use notifyme_console::{App, Screen};

/// Terminal admin console for the NotifyMe notification service
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Backend base URL, overrides [server] base_url
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// API key sent in the X-API-Key header
    #[arg(long, env = "NOTIFYME_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Dashboard refresh interval in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    refresh_interval: Option<u64>,

    /// Screen shown on start-up
    #[arg(long, value_enum, default_value_t = Screen::Dashboard)]
    screen: Screen,

    /// Config file (defaults to ~/.config/notifyme/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/notifyme-console-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/notifyme-console-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== NOTIFYME CONSOLE DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let ConfigResult { config, warning } = config_result;
    let config = config.with_overrides(args.base_url, args.api_key, args.refresh_interval);

    // Fail on a bad URL or key before touching the terminal
    let client = ApiClient::new(&config.server).wrap_err("Cannot start the console")?;
    log::debug!("Backend: {}", client.base_url());
    let api = ApiHandle::connect(client).wrap_err("Cannot start the API worker")?;

    let terminal = init_terminal()?;

    let mut app = App::new(api, &config, args.screen);
    if let Some(warning) = warning {
        app.toast.show_warning(warning);
    }

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== NOTIFYME CONSOLE DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // The worker catches its own panics; keep the UI intact
        if std::thread::current().name() == Some(WORKER_THREAD_NAME) {
            log::error!("API worker panicked: {}", info);
            return;
        }
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
