//! Application module
//!
//! Contains the main application loop and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, FormState, etc.)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState, FieldId, FieldInput, FormField, FormState};

use crate::catalog::ReferenceCatalog;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::profile::StudentForm;
use crate::ui::{visible_rows, UiRenderer};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    state: AppState,
    catalog: ReferenceCatalog,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    save_profile_path: Option<PathBuf>,
    /// Dataset rows that fit on screen, refreshed every frame
    page_size: usize,
}

impl App {
    /// Create the application for a loaded catalog
    pub fn new(catalog: ReferenceCatalog, save_profile_path: Option<PathBuf>) -> Self {
        let state = AppState::new(&catalog);
        Self::with_state(catalog, state, save_profile_path)
    }

    /// Create the application with the form pre-filled from a saved submission
    pub fn with_form(
        catalog: ReferenceCatalog,
        form: &StudentForm,
        save_profile_path: Option<PathBuf>,
    ) -> Self {
        let state = AppState::with_form(FormState::from_form(form, &catalog));
        Self::with_state(catalog, state, save_profile_path)
    }

    fn with_state(
        catalog: ReferenceCatalog,
        state: AppState,
        save_profile_path: Option<PathBuf>,
    ) -> Self {
        Self {
            state,
            catalog,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            save_profile_path,
            page_size: 10,
        }
    }

    /// Current application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            let mut body_height = 0;
            terminal.draw(|f| {
                body_height = self.ui_renderer.body_area(f.area()).height;
                self.ui_renderer
                    .render(f, &self.state, &self.catalog, &self.keybinding_context);
            })?;
            self.page_size = visible_rows(body_height).max(1);

            if crossterm::event::poll(Duration::from_millis(250))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    // Ignore release/repeat events reported by some terminals
                    if key_event.kind == KeyEventKind::Press && self.handle_key_event(key_event)? {
                        break;
                    }
                }
            }
        }

        info!("Exiting application loop");
        Ok(())
    }

    /// Handle one key press. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        let mode = self.state.mode;

        // Ctrl+C quits even with the help overlay open
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
            && self.keybinding_context.resolve(&mode, &key_event) == Some(KeyAction::Quit)
        {
            return Ok(true);
        }

        // Help overlay swallows everything except its own toggles
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_visible = false;
            }
            return Ok(false);
        }

        let action = self.keybinding_context.resolve(&mode, &key_event);
        debug!("Key {:?} in {:?} -> {:?}", key_event.code, mode, action);

        let Some(action) = action else {
            self.handle_text_input(key_event);
            return Ok(false);
        };

        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Help => self.state.help_visible = true,
            KeyAction::NavigateUp => self.state.form.previous(),
            KeyAction::NavigateDown => self.state.form.next(),
            KeyAction::Increase => self.state.form.increase(),
            KeyAction::Decrease => self.state.form.decrease(),
            KeyAction::Generate => self.generate(),
            KeyAction::ViewDataset => {
                self.state.open_dataset();
                self.state
                    .set_status(format!("Showing {} dataset records", self.catalog.len()));
            }
            KeyAction::Back => {
                self.state.go_back();
            }
            KeyAction::ScrollUp => self.scroll(-1),
            KeyAction::ScrollDown => self.scroll(1),
            KeyAction::PageUp => self.scroll(-(self.page_size as i32)),
            KeyAction::PageDown => self.scroll(self.page_size as i32),
        }

        Ok(false)
    }

    fn handle_text_input(&mut self, key_event: KeyEvent) {
        if self.state.mode != AppMode::Form || !self.state.form.is_editing_text() {
            return;
        }
        if key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }
        match key_event.code {
            KeyCode::Char(c) => self.state.form.push_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    fn scroll(&mut self, delta: i32) {
        let max_offset = self.catalog.len().saturating_sub(self.page_size);
        self.state.scroll(delta, max_offset);
    }

    fn generate(&mut self) {
        if self.state.submit(&self.catalog).is_err() {
            return;
        }

        let Some(path) = &self.save_profile_path else {
            return;
        };
        let form = self.state.form.to_student_form();
        match form.save_to_file(path) {
            Ok(()) => {
                info!("Saved submitted form to {:?}", path);
                let status = format!("{} (saved to {})", self.state.status_message, path.display());
                self.state.set_status(status);
            }
            Err(e) => {
                warn!("Failed to save form to {:?}: {}", path, e);
                self.state.set_error(format!("✗ Could not save form: {}", e));
            }
        }
    }
}
