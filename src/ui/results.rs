//! Roadmap result rendering
//!
//! Numbered steps first, then the four static resource blocks.

use crate::app::AppState;
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Build the lines shown in the roadmap view
pub fn roadmap_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let Some(roadmap) = &state.roadmap else {
        lines.push(Line::from(Span::styled(
            "No roadmap yet. Fill in the form and press Enter.",
            Styles::text_muted(),
        )));
        return lines;
    };

    if let Some(submission) = &state.submission {
        let mut details = Vec::new();
        if !submission.year.is_empty() {
            details.push(format!("Year {}", submission.year));
        }
        if !submission.branch.is_empty() {
            details.push(submission.branch.clone());
        }
        if !details.is_empty() {
            lines.push(Line::from(Span::styled(
                details.join(" · "),
                Styles::text_secondary(),
            )));
            lines.push(Line::from(""));
        }
    }

    lines.push(Line::from(Span::styled("📌 Suggested Steps:", Styles::category())));
    for (i, step) in roadmap.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), Styles::header()),
            Span::styled(step.advice.clone(), Styles::text()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "📚 Recommended Resources:",
        Styles::category(),
    )));
    for category in roadmap.resources {
        lines.push(Line::from(vec![
            Span::styled(format!("  • {}: ", category.title), Styles::header()),
            Span::styled(category.summary(), Styles::text()),
        ]));
    }

    lines
}

/// Render the roadmap view
pub fn render_roadmap(f: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(roadmap_lines(state))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your Roadmap ")
                .border_style(Styles::border_active()),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.roadmap_scroll, 0));
    f.render_widget(paragraph, area);
}
