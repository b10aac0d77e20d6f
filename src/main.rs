use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use maptip::config::{self, ConfigResult};
use maptip::{App, MaptipError};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;

/// Tile map viewer with dwell-triggered hover tooltips
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Tile map viewer with dwell-triggered hover tooltips"
)]
struct Args {
    /// Frame interval in milliseconds (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=1000))]
    frame_ms: Option<u64>,

    /// Show tooltips in the bottom toolbar instead of near the pointer
    #[arg(long)]
    toolbar: bool,

    /// Config file to use instead of ~/.config/maptip/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/maptip-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/maptip-debug.log")
            .expect("Failed to open /tmp/maptip-debug.log");

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

        log::debug!("=== MAPTIP DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let mut config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    apply_overrides(&mut config_result, &args);

    validate_terminal_size()?;

    let terminal = init_terminal()?;

    let app = App::new(&config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== MAPTIP DEBUG SESSION ENDED ===");

    Ok(())
}

/// Command line flags win over the config file
fn apply_overrides(config_result: &mut ConfigResult, args: &Args) {
    if let Some(frame_ms) = args.frame_ms {
        config_result.config.demo.frame_ms = frame_ms;
    }
    if args.toolbar {
        config_result.config.display.full_bottom_toolbar = true;
    }
}

/// The overlay needs room to appear below the pointer
fn validate_terminal_size() -> Result<(), MaptipError> {
    let (width, height) = terminal::size().map_err(|_| MaptipError::TerminalTooSmall {
        width: 0,
        height: 0,
        min_width: MIN_WIDTH,
        min_height: MIN_HEIGHT,
    })?;

    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(MaptipError::TerminalTooSmall {
            width,
            height,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        });
    }
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
