use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::DefaultTerminal;
use std::io::stdout;
use std::path::{Path, PathBuf};

mod app;
mod clipboard;
mod config;
mod editor;
mod error;
mod mirror;
mod notification;

use app::App;
use error::CopyselError;

/// Copy-on-select text editor
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Minimal text editor that mirrors selections into the X11 PRIMARY selection"
)]
struct Args {
    /// File to open (starts with an empty buffer if not provided)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/copysel-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/copysel-debug.log")
            .expect("Failed to open /tmp/copysel-debug.log");

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

        log::debug!("=== COPYSEL DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    // Read the file before touching the terminal so errors print cleanly
    let initial_text = match args.input {
        Some(ref path) => Some(read_input_file(path)?),
        None => None,
    };

    let terminal = init_terminal()?;

    let mut app = App::new(initial_text, &config_result.config);
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }
    if let Some(ref path) = args.input {
        app.notification.show(&format!("Opened {}", path.display()));
    }

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== COPYSEL DEBUG SESSION ENDED ===");

    Ok(())
}

/// Read the file to edit
fn read_input_file(path: &Path) -> Result<String, CopyselError> {
    std::fs::read_to_string(path).map_err(|source| CopyselError::InputFile {
        path: path.display().to_string(),
        source,
    })
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
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
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    // Frees the mirrored text; PRIMARY ownership lapses with the process
    app.mirror.shutdown();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello\nworld").unwrap();

        let text = read_input_file(file.path()).unwrap();
        assert_eq!(text, "hello\nworld");
    }

    #[test]
    fn test_read_missing_file_names_the_path() {
        let err = read_input_file(Path::new("/nonexistent/copysel-test")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/nonexistent/copysel-test"));
    }
}
