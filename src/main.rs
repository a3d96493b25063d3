use std::error::Error;
use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use human_panic::setup_panic;
use log::info;
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use protparam::{
    config::Interface,
    logging::{init_logging, log_critical_error, log_shutdown, log_system_info},
    shell,
    ui::render_ui,
    App, Settings,
};

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic!();

    let settings = Settings::from_env();
    if let Err(e) = init_logging(&settings) {
        eprintln!("Logging disabled: {e}");
    }
    log_system_info(&settings);

    let result: Result<usize, Box<dyn Error>> = match settings.interface {
        Interface::Line => {
            let stdin = io::stdin();
            shell::run(stdin.lock(), io::stdout(), settings.residue_policy).map_err(Into::into)
        }
        Interface::Tui => run_tui(&settings),
    };

    match result {
        Ok(sequences) => {
            log_shutdown(sequences);
            Ok(())
        }
        Err(e) => {
            log_critical_error(&e.to_string(), Some("main loop"));
            Err(e)
        }
    }
}

fn run_tui(settings: &Settings) -> Result<usize, Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings.residue_policy);
    info!("Terminal UI started");

    let outcome = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    outcome.map(|_| app.updates)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char(c) if !c.is_whitespace() => app.on_key(c),
                KeyCode::Backspace => app.on_backspace(),
                KeyCode::Delete => app.on_clear(),
                _ => {}
            }
        }
    }
    Ok(())
}
