//! User interface rendering module
//!
//! - `header` - Banner, navigation bar and status line
//! - `form` - Student details form
//! - `results` - Generated roadmap
//! - `dataset` - Reference dataset preview

mod dataset;
mod form;
mod header;
mod results;

pub use dataset::visible_rows;
pub use results::roadmap_lines;

use crate::app::{AppMode, AppState};
use crate::catalog::ReferenceCatalog;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use header::HeaderRenderer;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Top-level renderer; owns the pieces that are built once
#[derive(Default)]
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl UiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Area left for the active view in a frame of the given size
    pub fn body_area(&self, area: Rect) -> Rect {
        self.split(area)[1]
    }

    fn split(&self, area: Rect) -> std::rc::Rc<[Rect]> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.header.height()), // Header
                Constraint::Min(5),                       // Active view
                Constraint::Length(2),                    // Status
                Constraint::Length(1),                    // Nav bar
            ])
            .split(area)
    }

    /// Draw a full frame
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        catalog: &ReferenceCatalog,
        keys: &KeybindingContext,
    ) {
        let chunks = self.split(f.area());

        self.header.render_header(f, chunks[0]);
        match state.mode {
            AppMode::Form => form::render_form(f, chunks[1], state, catalog),
            AppMode::Roadmap => results::render_roadmap(f, chunks[1], state),
            AppMode::Dataset => dataset::render_dataset(f, chunks[1], state, catalog),
        }
        header::render_status(f, chunks[2], &state.status_message, state.status_is_error);
        header::render_nav_bar(f, chunks[3], &state.mode, keys);

        if state.help_visible {
            HelpOverlay::new(&state.mode, keys).render(f, f.area());
        }
    }
}
