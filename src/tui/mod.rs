// terminal ui

mod app;
mod ascii;
mod event;
mod theme;
mod ui;

pub use app::App;
pub use theme::ThemeKind;

use crossterm::{
    cursor::SetCursorStyle,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};
use std::time::Duration;

use crate::cli::ExportOptions;
use crate::{Error, Session};
use app::{Author, LogLevel, Mode};
use event::{Action, handle_event, poll_event};

// pause so the typing status is visible
const TYPING_DELAY: Duration = Duration::from_millis(600);

pub async fn run(
    mut session: Session,
    theme: Option<ThemeKind>,
    export: ExportOptions,
) -> Result<(), Error> {
    // setup terminal
    enable_raw_mode().map_err(|e| Error::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| Error::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| Error::Terminal(e.to_string()))?;

    let result = run_app(&mut terminal, &mut session, theme, &export).await;

    // restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        SetCursorStyle::DefaultUserShape,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    result?;

    // export after the screen is restored so the path is visible
    if export.enabled && !session.transcript().is_empty() {
        let path = session.export(export.path.as_deref(), export.format)?;
        println!("conversation saved to {}", path.display());
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
    theme: Option<ThemeKind>,
    export: &ExportOptions,
) -> Result<(), Error> {
    let greeting = session.greeting();
    let mut app = App::new(session.bot_name().to_string(), greeting, theme);

    let mut last_mode = None;

    loop {
        if last_mode != Some(app.mode) {
            let cursor_style = match app.mode {
                Mode::Insert => SetCursorStyle::BlinkingBar,
                Mode::Normal => SetCursorStyle::BlinkingBlock,
            };
            execute!(terminal.backend_mut(), cursor_style).ok();
            last_mode = Some(app.mode);
        }

        terminal
            .draw(|frame| ui::render(frame, &mut app))
            .map_err(|e| Error::Terminal(e.to_string()))?;

        if let Some(event) =
            poll_event(Duration::from_millis(100)).map_err(|e| Error::Terminal(e.to_string()))?
        {
            match handle_event(&mut app, event) {
                Action::Quit => break,
                Action::Submit(message) => {
                    // show the user's line and the typing status first
                    terminal
                        .draw(|frame| ui::render(frame, &mut app))
                        .map_err(|e| Error::Terminal(e.to_string()))?;
                    tokio::time::sleep(TYPING_DELAY).await;

                    let reply = session.respond(&message);
                    app.apply_reply(&reply, session.user_name(), session.crisis_detected());

                    if !reply.is_farewell()
                        && let Some(reminder) = session.crisis_reminder()
                    {
                        for line in reminder {
                            app.push_chat(Author::Notice, line.to_string());
                        }
                    }
                }
                Action::Export => {
                    match session.export(export.path.as_deref(), export.format) {
                        Ok(path) => app.log(LogLevel::Ok, format!("saved to {}", path.display())),
                        Err(e) => app.log(LogLevel::Error, e.to_string()),
                    }
                }
                Action::None => {}
            }
        }
    }

    Ok(())
}
