// ui rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::app::{App, Author, LogLevel, Mode, Panel, Popup};
use crate::tui::ascii::LOGO;
use crate::tui::theme::ThemeKind;
use crate::{CRISIS, CRISIS_OPENING, CRISIS_REMINDER};

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;

    // clear with bg color
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    // header + conversation + prompt + footer
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, main[0]);
    render_content(frame, app, main[1]);
    render_prompt(frame, app, main[2]);
    render_footer(frame, app, main[3]);

    match app.popup {
        Popup::Themes => render_theme_popup(frame, app),
        Popup::Resources => render_resources_popup(frame, app),
        Popup::None => {}
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.base());

    frame.render_widget(block, area);

    // logo on the left, session info on the right
    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(20)])
        .margin(1)
        .split(area);

    let logo_lines: Vec<Line> = LOGO
        .iter()
        .map(|&line| Line::styled(line, theme.accent()))
        .collect();
    frame.render_widget(Paragraph::new(logo_lines).style(theme.base()), inner[0]);

    let mode_str = match app.mode {
        Mode::Normal => "normal",
        Mode::Insert => "insert",
    };

    let user = app.user_name.as_deref().unwrap_or("-");

    let status = if app.ended {
        Span::styled("ended", theme.muted())
    } else if app.typing {
        Span::styled(format!("{} is typing...", app.bot_name), theme.accent())
    } else {
        Span::styled("listening", theme.success())
    };

    let mut info_lines = vec![
        Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled(&app.bot_name, theme.bot()),
            Span::styled("  ", theme.muted()),
            status,
        ]),
        Line::from(vec![
            Span::styled("| You: ", theme.muted()),
            Span::styled(user, theme.base()),
            Span::styled("  | Turns: ", theme.muted()),
            Span::styled(app.turns.to_string(), theme.accent()),
            Span::styled("  | Mode: ", theme.muted()),
            Span::styled(mode_str, theme.accent()),
        ]),
    ];

    if app.crisis {
        info_lines.push(Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled("crisis support available ", theme.crisis()),
            Span::styled("[r]", theme.accent()),
            Span::styled(" resources", theme.muted()),
        ]));
    } else {
        info_lines.push(Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled("[Tab]", theme.accent()),
            Span::styled(" Panels  ", theme.muted()),
            Span::styled("[t]", theme.accent()),
            Span::styled(" Themes  ", theme.muted()),
            Span::styled("[q]", theme.accent()),
            Span::styled(" Quit", theme.muted()),
        ]));
    }

    frame.render_widget(Paragraph::new(info_lines).style(theme.base()), inner[1]);
}

fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(cols[1]);

    render_chat(frame, app, cols[0]);
    render_concerns(frame, app, side[0]);
    render_logs(frame, app, side[1]);
}

fn render_chat(frame: &mut Frame, app: &mut App, area: Rect) {
    let active = app.panel == Panel::Chat;

    let inner = area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    let width = inner.width.max(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    let mut rows = 0usize;

    {
        let theme = &app.theme;
        for entry in &app.chat {
            let (label, label_style, text_style) = match entry.author {
                Author::User => ("You".to_string(), theme.user(), theme.base()),
                Author::Bot => (app.bot_name.clone(), theme.bot(), theme.base()),
                Author::Notice => (String::new(), theme.muted(), theme.muted()),
            };

            if !label.is_empty() {
                lines.push(Line::styled(label, label_style));
                rows += 1;
            }
            for text_line in entry.text.lines() {
                rows += wrapped_rows(text_line, width);
                lines.push(Line::styled(text_line.to_string(), text_style));
            }
            lines.push(Line::from(""));
            rows += 1;
        }
    }

    // keep the newest message in view unless the user scrolled away
    let max_scroll = rows.saturating_sub(inner.height as usize);
    if app.follow_chat || app.chat_scroll >= max_scroll {
        app.chat_scroll = max_scroll;
        app.follow_chat = true;
    }

    let theme = &app.theme;
    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(Span::styled(" Conversation ", theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false })
        .scroll((app.chat_offset(), 0));

    frame.render_widget(paragraph, area);
}

fn render_concerns(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .title(Span::styled(" Concerns ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.base());

    let mut lines = Vec::new();

    if app.last_concerns.is_empty() {
        lines.push(Line::styled("nothing detected yet", theme.muted()));
    } else {
        let mut latest = vec![Span::styled("Latest: ", theme.muted())];
        for (i, concern) in app.last_concerns.iter().enumerate() {
            if i > 0 {
                latest.push(Span::styled(", ", theme.muted()));
            }
            latest.push(Span::styled(concern.name(), concern_style(app, concern.name())));
        }
        lines.push(Line::from(latest));
        lines.push(Line::from(""));

        for (concern, count) in &app.concern_counts {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<12}", concern.name()), concern_style(app, concern.name())),
                Span::styled(format!("x{count}"), theme.accent()),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn concern_style(app: &App, name: &str) -> ratatui::style::Style {
    if name == "crisis" {
        app.theme.crisis()
    } else {
        app.theme.base()
    }
}

fn render_logs(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Insights;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(Span::styled(" Logs ", theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    let lines: Vec<Line> = app
        .logs
        .iter()
        .map(|entry| {
            let (prefix, style) = match entry.level {
                LogLevel::Ok => ("[OK]", theme.success()),
                LogLevel::Info => ("[--]", theme.muted()),
                LogLevel::Warn => ("[!!]", theme.warning()),
                LogLevel::Error => ("[ERR]", theme.crisis()),
            };
            Line::from(vec![
                Span::styled(format!("{prefix} "), style),
                Span::styled(&entry.message, theme.base()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .scroll((app.log_offset(), 0));

    frame.render_widget(paragraph, area);
}

fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.mode == Mode::Insert && !app.ended;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(Span::styled(" Message ", theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    let inner = area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    let width = inner.width.max(1) as usize;

    // scroll horizontally so the cursor stays visible
    let offset = app.prompt_cursor.saturating_sub(width.saturating_sub(1));

    let content = if app.ended {
        Line::styled("press any key to leave", theme.muted())
    } else if app.prompt.is_empty() && !active {
        Line::styled("press 'i' to start typing...", theme.muted())
    } else {
        let visible: String = app.prompt.chars().skip(offset).take(width).collect();
        Line::styled(visible, theme.base())
    };

    let paragraph = Paragraph::new(content).block(block).style(theme.base());
    frame.render_widget(paragraph, area);

    if active {
        let cursor_x = inner.x + (app.prompt_cursor - offset) as u16;
        if cursor_x < inner.right() {
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let line = Line::from(vec![
        Span::styled(" Enter ", theme.base().bg(theme.accent).fg(theme.bg)),
        Span::styled(" Send ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("Esc ", theme.accent()),
        Span::styled("Normal ", theme.muted()),
        Span::styled("i ", theme.accent()),
        Span::styled("Insert ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("r ", theme.accent()),
        Span::styled("Resources ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("x ", theme.accent()),
        Span::styled("Export ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("t ", theme.accent()),
        Span::styled("Theme ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("q ", theme.accent()),
        Span::styled("Quit ", theme.muted()),
    ]);

    let paragraph = Paragraph::new(line)
        .style(theme.base())
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_theme_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(40, 60, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" select theme ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .style(theme.base());

    let mut lines: Vec<Line> = ThemeKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let name = kind.name();
            if i == app.theme_scroll {
                Line::from(vec![
                    Span::styled(" > ", theme.accent()),
                    Span::styled(name, theme.selected().fg(theme.accent)),
                ])
            } else {
                Line::from(vec![Span::styled(format!("   {name}"), theme.base())])
            }
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" j/k ", theme.accent()),
        Span::styled("navigate  ", theme.muted()),
        Span::styled("enter ", theme.accent()),
        Span::styled("select  ", theme.muted()),
        Span::styled("esc ", theme.accent()),
        Span::styled("close", theme.muted()),
    ]));

    let paragraph = Paragraph::new(lines).block(block).style(theme.base());
    frame.render_widget(paragraph, area);
}

fn render_resources_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(70, 60, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" crisis resources ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.crisis())
        .style(theme.base());

    let mut lines = vec![Line::styled(CRISIS_OPENING, theme.crisis()), Line::from("")];

    for resource in CRISIS {
        lines.push(Line::from(vec![
            Span::styled(" * ", theme.accent()),
            Span::styled(*resource, theme.base()),
        ]));
    }

    lines.push(Line::from(""));
    for reminder in CRISIS_REMINDER {
        lines.push(Line::styled(reminder, theme.muted()));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled("press any key to close", theme.muted()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

// rough count of screen rows a line takes once wrapped
fn wrapped_rows(text: &str, width: usize) -> usize {
    let chars = text.chars().count();
    chars.div_ceil(width).max(1)
}
