// theme support for the tui

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeKind {
    Dark,
    Light,
    Nord,
    CatppuccinLatte,
    CatppuccinMocha,
    RosePine,
    RosePineDawn,
}

impl ThemeKind {
    pub const ALL: &'static [ThemeKind] = &[
        Self::Dark,
        Self::Light,
        Self::Nord,
        Self::CatppuccinLatte,
        Self::CatppuccinMocha,
        Self::RosePine,
        Self::RosePineDawn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Nord => "nord",
            Self::CatppuccinLatte => "catppuccin latte",
            Self::CatppuccinMocha => "catppuccin mocha",
            Self::RosePine => "rose pine",
            Self::RosePineDawn => "rose pine dawn",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }
}

// light terminals get the light theme, everything else (including terminals
// that don't answer the query) gets dark
pub fn detect_theme() -> ThemeKind {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.6 => ThemeKind::Light,
        _ => ThemeKind::Dark,
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub border: Color,
    pub selection: Color,
    pub user: Color,
    pub bot: Color,
    pub crisis: Color,
    pub success: Color,
    pub warning: Color,
    pub muted: Color,
}

impl Theme {
    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
            ThemeKind::Nord => Self::nord(),
            ThemeKind::CatppuccinLatte => Self::catppuccin_latte(),
            ThemeKind::CatppuccinMocha => Self::catppuccin_mocha(),
            ThemeKind::RosePine => Self::rose_pine(),
            ThemeKind::RosePineDawn => Self::rose_pine_dawn(),
        }
    }

    fn dark() -> Self {
        Self {
            bg: Color::Rgb(22, 24, 30),
            fg: Color::Rgb(220, 222, 228),
            accent: Color::Rgb(130, 170, 230),
            border: Color::Rgb(58, 62, 76),
            selection: Color::Rgb(48, 52, 66),
            user: Color::Rgb(150, 200, 170),
            bot: Color::Rgb(130, 170, 230),
            crisis: Color::Rgb(240, 110, 110),
            success: Color::Rgb(120, 220, 150),
            warning: Color::Rgb(240, 200, 110),
            muted: Color::Rgb(120, 124, 140),
        }
    }

    fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 248, 250),
            fg: Color::Rgb(36, 38, 46),
            accent: Color::Rgb(60, 100, 180),
            border: Color::Rgb(200, 202, 212),
            selection: Color::Rgb(228, 236, 250),
            user: Color::Rgb(40, 120, 80),
            bot: Color::Rgb(60, 100, 180),
            crisis: Color::Rgb(190, 50, 50),
            success: Color::Rgb(50, 140, 80),
            warning: Color::Rgb(190, 140, 40),
            muted: Color::Rgb(130, 132, 144),
        }
    }

    fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(236, 239, 244),
            accent: Color::Rgb(136, 192, 208),
            border: Color::Rgb(67, 76, 94),
            selection: Color::Rgb(67, 76, 94),
            user: Color::Rgb(163, 190, 140),
            bot: Color::Rgb(136, 192, 208),
            crisis: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
            warning: Color::Rgb(235, 203, 139),
            muted: Color::Rgb(76, 86, 106),
        }
    }

    fn catppuccin_latte() -> Self {
        Self {
            bg: Color::Rgb(239, 241, 245),
            fg: Color::Rgb(76, 79, 105),
            accent: Color::Rgb(114, 135, 253),
            border: Color::Rgb(204, 208, 218),
            selection: Color::Rgb(188, 192, 204),
            user: Color::Rgb(23, 146, 153),
            bot: Color::Rgb(114, 135, 253),
            crisis: Color::Rgb(210, 15, 57),
            success: Color::Rgb(64, 160, 43),
            warning: Color::Rgb(223, 142, 29),
            muted: Color::Rgb(108, 111, 133),
        }
    }

    fn catppuccin_mocha() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 46),
            fg: Color::Rgb(205, 214, 244),
            accent: Color::Rgb(180, 190, 254),
            border: Color::Rgb(49, 50, 68),
            selection: Color::Rgb(69, 71, 90),
            user: Color::Rgb(148, 226, 213),
            bot: Color::Rgb(180, 190, 254),
            crisis: Color::Rgb(243, 139, 168),
            success: Color::Rgb(166, 227, 161),
            warning: Color::Rgb(249, 226, 175),
            muted: Color::Rgb(166, 173, 200),
        }
    }

    fn rose_pine() -> Self {
        Self {
            bg: Color::Rgb(25, 23, 36),
            fg: Color::Rgb(224, 222, 244),
            accent: Color::Rgb(196, 167, 231),
            border: Color::Rgb(38, 35, 58),
            selection: Color::Rgb(57, 53, 82),
            user: Color::Rgb(156, 207, 216),
            bot: Color::Rgb(196, 167, 231),
            crisis: Color::Rgb(235, 111, 146),
            success: Color::Rgb(156, 207, 216),
            warning: Color::Rgb(246, 193, 119),
            muted: Color::Rgb(110, 106, 134),
        }
    }

    fn rose_pine_dawn() -> Self {
        Self {
            bg: Color::Rgb(250, 244, 237),
            fg: Color::Rgb(87, 82, 121),
            accent: Color::Rgb(144, 122, 169),
            border: Color::Rgb(242, 233, 225),
            selection: Color::Rgb(223, 218, 217),
            user: Color::Rgb(86, 148, 159),
            bot: Color::Rgb(144, 122, 169),
            crisis: Color::Rgb(180, 99, 122),
            success: Color::Rgb(86, 148, 159),
            warning: Color::Rgb(234, 157, 52),
            muted: Color::Rgb(152, 147, 165),
        }
    }

    // style helpers
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn user(&self) -> Style {
        Style::default().fg(self.user).add_modifier(Modifier::BOLD)
    }

    pub fn bot(&self) -> Style {
        Style::default().fg(self.bot).add_modifier(Modifier::BOLD)
    }

    pub fn crisis(&self) -> Style {
        Style::default().fg(self.crisis)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
