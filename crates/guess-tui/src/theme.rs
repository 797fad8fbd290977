use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_header: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,
            text_primary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c500,
            text_header: tailwind::SKY.c300,
            accent_primary: tailwind::SKY.c400,
            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,
            status_info: tailwind::SLATE.c300,
        }
    }

    /// Style for the input field border, dimmed once input is locked
    pub fn input_border(&self, locked: bool) -> Style {
        if locked {
            Style::default().fg(self.text_muted)
        } else {
            Style::default().fg(self.accent_primary)
        }
    }
}
