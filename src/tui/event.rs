// event handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::tui::app::{App, Mode, Popup};

pub enum Action {
    None,
    Quit,
    Submit(String),
    Export,
}

pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(app: &mut App, event: Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => Action::None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    // global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.popup {
        Popup::Themes => return handle_theme_popup(app, key),
        Popup::Resources => {
            // any key dismisses
            app.close_popup();
            return Action::None;
        }
        Popup::None => {}
    }

    // after the farewell the only thing left is leaving
    if app.ended {
        return Action::Quit;
    }

    match app.mode {
        Mode::Normal => handle_normal_key(app, key),
        Mode::Insert => handle_insert_key(app, key),
    }
}

fn handle_theme_popup(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_popup();
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_scroll_down();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_scroll_up();
            Action::None
        }
        KeyCode::Enter => {
            app.select_theme();
            Action::None
        }
        _ => Action::None,
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,

        KeyCode::Char('i') => {
            app.enter_insert();
            Action::None
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.move_cursor_end();
            app.enter_insert();
            Action::None
        }
        KeyCode::Char('I') => {
            app.move_cursor_start();
            app.enter_insert();
            Action::None
        }

        KeyCode::Tab => {
            app.cycle_panel();
            Action::None
        }

        KeyCode::Char('t') => {
            app.open_theme_popup();
            Action::None
        }

        KeyCode::Char('r') => {
            app.open_resources_popup();
            Action::None
        }

        KeyCode::Char('x') => Action::Export,

        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
            Action::None
        }

        KeyCode::Enter => submit(app),

        _ => Action::None,
    }
}

fn handle_insert_key(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('a') => {
                app.move_cursor_start();
                Action::None
            }
            KeyCode::Char('e') => {
                app.move_cursor_end();
                Action::None
            }
            KeyCode::Char('u') => {
                app.clear_prompt();
                Action::None
            }
            KeyCode::Char('p') => {
                app.history_up();
                Action::None
            }
            KeyCode::Char('n') => {
                app.history_down();
                Action::None
            }
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => {
            app.exit_insert();
            Action::None
        }

        // stay in insert mode, chatting is the common case
        KeyCode::Enter => submit(app),

        KeyCode::Char(c) => {
            app.insert_char(c);
            Action::None
        }
        KeyCode::Backspace => {
            app.delete_char();
            Action::None
        }
        KeyCode::Delete => {
            app.delete_char_forward();
            Action::None
        }

        KeyCode::Left => {
            app.move_cursor_left();
            Action::None
        }
        KeyCode::Right => {
            app.move_cursor_right();
            Action::None
        }
        KeyCode::Home => {
            app.move_cursor_start();
            Action::None
        }
        KeyCode::End => {
            app.move_cursor_end();
            Action::None
        }

        KeyCode::Up => {
            app.history_up();
            Action::None
        }
        KeyCode::Down => {
            app.history_down();
            Action::None
        }

        _ => Action::None,
    }
}

fn submit(app: &mut App) -> Action {
    match app.submit() {
        Some(message) => Action::Submit(message),
        None => Action::None,
    }
}
