// app state for the tui

use crate::tui::theme::{Theme, ThemeKind, detect_theme};
use crate::{Concern, Reply, ReplyKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Chat,
    Insights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Themes,
    Resources,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Ok,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

// who a line in the chat panel belongs to. notices are shown but never
// written to the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
    Notice,
}

#[derive(Debug, Clone)]
pub struct ChatLine {
    pub author: Author,
    pub text: String,
}

pub struct App {
    pub mode: Mode,
    pub panel: Panel,
    pub popup: Popup,
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    // session info mirrored for rendering
    pub bot_name: String,
    pub user_name: Option<String>,
    pub crisis: bool,
    pub ended: bool,

    // conversation
    pub chat: Vec<ChatLine>,
    pub turns: usize,
    pub last_concerns: Vec<Concern>,
    // (concern, times seen) in first seen order
    pub concern_counts: Vec<(Concern, usize)>,

    // prompt input, single line
    pub prompt: String,
    pub prompt_cursor: usize,

    // logs
    pub logs: Vec<LogEntry>,

    // state
    pub typing: bool,

    // scroll
    pub chat_scroll: usize,
    pub follow_chat: bool,
    pub log_scroll: usize,
    pub theme_scroll: usize,

    // history
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl App {
    pub fn new(bot_name: String, greeting: String, theme: Option<ThemeKind>) -> Self {
        let theme_kind = theme.unwrap_or_else(detect_theme);

        let mut app = Self {
            mode: Mode::Insert,
            panel: Panel::Chat,
            popup: Popup::None,
            theme_kind,
            theme: Theme::from_kind(theme_kind),
            bot_name,
            user_name: None,
            crisis: false,
            ended: false,
            chat: Vec::new(),
            turns: 0,
            last_concerns: Vec::new(),
            concern_counts: Vec::new(),
            prompt: String::new(),
            prompt_cursor: 0,
            logs: Vec::new(),
            typing: false,
            chat_scroll: 0,
            follow_chat: true,
            log_scroll: 0,
            theme_scroll: theme_kind.index(),
            history: Vec::new(),
            history_index: None,
        };

        app.push_chat(Author::Bot, greeting);
        app.log(LogLevel::Ok, "session started".to_string());
        app.log(LogLevel::Info, format!("theme: {}", theme_kind.name()));

        app
    }

    pub fn log(&mut self, level: LogLevel, message: String) {
        self.logs.push(LogEntry { level, message });
        // auto-scroll to bottom
        if self.logs.len() > 1 {
            self.log_scroll = self.logs.len().saturating_sub(10);
        }
    }

    pub fn push_chat(&mut self, author: Author, text: String) {
        self.chat.push(ChatLine { author, text });
        self.follow_chat = true;
    }

    /// Record a finished turn. `crisis` and `user_name` are the session's
    /// state after the reply was produced.
    pub fn apply_reply(&mut self, reply: &Reply, user_name: Option<&str>, crisis: bool) {
        self.typing = false;
        self.turns += 1;
        self.push_chat(Author::Bot, reply.text.clone());

        match reply.kind {
            ReplyKind::Farewell => {
                self.ended = true;
                self.mode = Mode::Normal;
                self.log(LogLevel::Info, "conversation ended".to_string());
                self.push_chat(
                    Author::Notice,
                    "conversation ended, press any key to leave".to_string(),
                );
            }
            ReplyKind::NameAck => {
                if let Some(name) = user_name {
                    self.log(LogLevel::Ok, format!("user name: {name}"));
                }
            }
            ReplyKind::Support => {
                self.last_concerns = reply.concerns.clone();
                for concern in &reply.concerns {
                    match self.concern_counts.iter().position(|(c, _)| c == concern) {
                        Some(i) => self.concern_counts[i].1 += 1,
                        None => self.concern_counts.push((*concern, 1)),
                    }
                }
                let names: Vec<&str> = reply.concerns.iter().map(|c| c.name()).collect();
                self.log(LogLevel::Info, format!("concerns: {}", names.join(", ")));
            }
        }

        self.user_name = user_name.map(str::to_string);

        if crisis && !self.crisis {
            self.log(LogLevel::Warn, "crisis keywords detected".to_string());
            self.popup = Popup::Resources;
        }
        self.crisis = crisis;
    }

    pub fn set_theme(&mut self, kind: ThemeKind) {
        self.theme_kind = kind;
        self.theme = Theme::from_kind(kind);
        self.theme_scroll = kind.index();
    }

    pub fn open_theme_popup(&mut self) {
        self.popup = Popup::Themes;
        self.theme_scroll = self.theme_kind.index();
    }

    pub fn open_resources_popup(&mut self) {
        self.popup = Popup::Resources;
    }

    pub fn close_popup(&mut self) {
        self.popup = Popup::None;
    }

    pub fn theme_scroll_up(&mut self) {
        if self.theme_scroll > 0 {
            self.theme_scroll -= 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn theme_scroll_down(&mut self) {
        if self.theme_scroll < ThemeKind::ALL.len() - 1 {
            self.theme_scroll += 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn select_theme(&mut self) {
        self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        self.close_popup();
    }

    pub fn cycle_panel(&mut self) {
        self.panel = match self.panel {
            Panel::Chat => Panel::Insights,
            Panel::Insights => Panel::Chat,
        };
    }

    pub fn enter_insert(&mut self) {
        if !self.ended {
            self.mode = Mode::Insert;
        }
    }

    pub fn exit_insert(&mut self) {
        self.mode = Mode::Normal;
    }

    // prompt editing, cursor counts chars not bytes
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.prompt_cursor);
        self.prompt.insert(at, c);
        self.prompt_cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.prompt_cursor > 0 {
            self.prompt_cursor -= 1;
            let at = self.byte_index(self.prompt_cursor);
            self.prompt.remove(at);
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.prompt_cursor < self.prompt.chars().count() {
            let at = self.byte_index(self.prompt_cursor);
            self.prompt.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.prompt_cursor = self.prompt_cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.prompt_cursor < self.prompt.chars().count() {
            self.prompt_cursor += 1;
        }
    }

    pub fn move_cursor_start(&mut self) {
        self.prompt_cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.prompt_cursor = self.prompt.chars().count();
    }

    pub fn clear_prompt(&mut self) {
        self.prompt.clear();
        self.prompt_cursor = 0;
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.prompt
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.prompt.len())
    }

    // history navigation
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_index {
            None => {
                self.history_index = Some(self.history.len() - 1);
            }
            Some(i) if i > 0 => {
                self.history_index = Some(i - 1);
            }
            _ => {}
        }
        if let Some(i) = self.history_index {
            self.prompt = self.history[i].clone();
            self.move_cursor_end();
        }
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i < self.history.len() - 1 => {
                self.history_index = Some(i + 1);
                self.prompt = self.history[i + 1].clone();
                self.move_cursor_end();
            }
            Some(_) => {
                self.history_index = None;
                self.clear_prompt();
            }
            None => {}
        }
    }

    /// Take the prompt as the next user message, untrimmed. Blank input and
    /// input after the farewell are ignored.
    pub fn submit(&mut self) -> Option<String> {
        if self.ended || self.prompt.trim().is_empty() {
            return None;
        }
        let message = self.prompt.clone();
        self.history.push(message.clone());
        self.history_index = None;
        self.clear_prompt();
        self.push_chat(Author::User, message.clone());
        self.typing = true;
        Some(message)
    }

    // paragraph scroll is u16, saturate instead of wrapping on long sessions
    pub fn chat_offset(&self) -> u16 {
        u16::try_from(self.chat_scroll).unwrap_or(u16::MAX)
    }

    pub fn log_offset(&self) -> u16 {
        u16::try_from(self.log_scroll).unwrap_or(u16::MAX)
    }

    pub fn scroll_up(&mut self) {
        match self.panel {
            Panel::Chat => {
                self.follow_chat = false;
                self.chat_scroll = self.chat_scroll.saturating_sub(1);
            }
            Panel::Insights => self.log_scroll = self.log_scroll.saturating_sub(1),
        }
    }

    pub fn scroll_down(&mut self) {
        match self.panel {
            Panel::Chat => self.chat_scroll += 1,
            Panel::Insights => self.log_scroll += 1,
        }
    }
}
