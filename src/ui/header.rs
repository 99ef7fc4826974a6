//! Header, navigation bar and status line rendering

use crate::components::keybindings::KeybindingContext;
use crate::app::AppMode;
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the banner lines
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Height the banner needs, borders included
    pub fn height(&self) -> u16 {
        self.header_lines.len() as u16 + 2
    }

    /// Render the banner
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border_active()),
            )
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "🎓 Personalized Student Skill Roadmap",
                Styles::title(),
            )]),
            Line::from(vec![Span::styled(
                "Plan your skills, career, and personal development",
                Styles::text_secondary(),
            )]),
        ]
    }
}

/// Render the key hints for the current mode on one line
pub fn render_nav_bar(f: &mut Frame, area: Rect, mode: &AppMode, keys: &KeybindingContext) {
    let mut spans = Vec::new();
    for (i, (key, description)) in keys.nav_hints(mode).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Styles::nav_hint()));
        }
        spans.push(Span::styled(key, Styles::nav_key()));
        spans.push(Span::styled(format!(" {}", description), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status message line
pub fn render_status(f: &mut Frame, area: Rect, message: &str, is_error: bool) {
    let style = if is_error {
        Styles::error()
    } else {
        Styles::success()
    };
    let status = Paragraph::new(Line::from(Span::styled(message.to_string(), style)))
        .block(Block::default().borders(Borders::TOP).border_style(Styles::border_inactive()));
    f.render_widget(status, area);
}
