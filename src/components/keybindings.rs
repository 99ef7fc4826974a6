//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The same registry drives key handling, the navigation
//! bar and the help overlay, so they cannot drift apart.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Increase,
    Decrease,
    Generate,
    ViewDataset,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Back,
    Quit,
    Help,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// Shift is ignored for character keys since terminals disagree on
    /// whether `?` arrives with it.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let mut modifiers = event.modifiers;
        if matches!(event.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        self.key == event.code && self.modifiers == modifiers
    }
}

/// Titled group of key/description pairs for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        // Form
        self.mode_bindings.insert(
            AppMode::Form,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous field"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next field"),
                Keybinding::new(KeyCode::Left, KeyAction::Decrease, "Left", "Previous value"),
                Keybinding::new(KeyCode::Right, KeyAction::Increase, "Right", "Next value"),
                Keybinding::new(KeyCode::Enter, KeyAction::Generate, "Enter", "Generate roadmap"),
                Keybinding::new(KeyCode::Tab, KeyAction::ViewDataset, "Tab", "Sample dataset"),
                Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            ],
        );

        // Roadmap
        self.mode_bindings.insert(
            AppMode::Roadmap,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::Tab, KeyAction::ViewDataset, "Tab", "Sample dataset"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Edit details"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Edit details"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );

        // Dataset
        self.mode_bindings.insert(
            AppMode::Dataset,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Map a key event to an action in the given mode.
    ///
    /// Mode bindings take precedence over global ones.
    pub fn resolve(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|binding| binding.matches(event))
            .map(|binding| binding.action)
    }

    /// Short hints for the navigation bar: one entry per distinct action
    pub fn nav_hints(&self, mode: &AppMode) -> Vec<(String, String)> {
        let mut seen: Vec<KeyAction> = Vec::new();
        let mut hints = Vec::new();
        for binding in self.get_bindings(mode) {
            if seen.contains(&binding.action) {
                continue;
            }
            seen.push(binding.action);
            hints.push((binding.display.clone(), binding.description.clone()));
        }
        hints
    }

    /// Help overlay content for a mode
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let mut sections = Vec::new();

        if let Some(bindings) = self.mode_bindings.get(mode) {
            sections.push(HelpSection {
                title: "This Screen".to_string(),
                items: bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        sections.push(HelpSection {
            title: "Global".to_string(),
            items: self
                .global_bindings
                .iter()
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect(),
        });

        sections
    }
}
