//! Application state definitions
//!
//! Contains the form model behind the interactive screen and the state the
//! renderer reads. Nothing here touches the terminal, so it is tested
//! directly.

use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, info};

use crate::catalog::{CatalogField, ReferenceCatalog};
use crate::error::Result;
use crate::profile::{
    FAILURES_RANGE, GPA_RANGE, SLEEP_HOURS_RANGE, STUDY_HOURS_RANGE, StudentForm, Submission,
};
use crate::roadmap::{Roadmap, build_roadmap};
use crate::types::{Level, Toggle, variant_names};

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Filling in the student form
    Form,
    /// Viewing the generated roadmap
    Roadmap,
    /// Browsing the reference dataset
    Dataset,
}

/// Form fields, in the order they are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FieldId {
    Name,
    Year,
    Branch,
    Gpa,
    StudyHours,
    Failures,
    Hostel,
    SleepHours,
    FamilySupport,
    Interest,
    Budget,
    SkillLevel,
    StressLevel,
    ConfusionLevel,
    Communication,
}

impl FieldId {
    /// Label shown next to the value
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Student Name",
            Self::Year => "Year",
            Self::Branch => "Branch",
            Self::Gpa => "GPA",
            Self::StudyHours => "Daily Study Hours",
            Self::Failures => "Number of Failures",
            Self::Hostel => "Hostel?",
            Self::SleepHours => "Daily Sleep Hours",
            Self::FamilySupport => "Family Support Level",
            Self::Interest => "Primary Interest",
            Self::Budget => "Budget Level",
            Self::SkillLevel => "Skill Level",
            Self::StressLevel => "Stress Level",
            Self::ConfusionLevel => "Confusion Level",
            Self::Communication => "Communication Level",
        }
    }

    /// Catalog column backing a dropdown, if any
    pub fn catalog_field(&self) -> Option<CatalogField> {
        match self {
            Self::Year => Some(CatalogField::Year),
            Self::Branch => Some(CatalogField::Branch),
            Self::Interest => Some(CatalogField::Interest),
            Self::Budget => Some(CatalogField::BudgetLevel),
            Self::SkillLevel => Some(CatalogField::SkillLevel),
            Self::StressLevel => Some(CatalogField::StressLevel),
            Self::ConfusionLevel => Some(CatalogField::ConfusionLevel),
            Self::Communication => Some(CatalogField::CommunicationLevel),
            _ => None,
        }
    }
}

/// Editable value of a form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Choice { options: Vec<String>, selected: usize },
    /// Stepped number, kept to `decimals` places and clamped to `min..=max`
    Number {
        value: f64,
        min: f64,
        max: f64,
        step: f64,
        decimals: u32,
    },
}

impl FieldInput {
    fn choice(options: Vec<String>, current: &str) -> Self {
        let selected = options.iter().position(|o| o == current).unwrap_or(0);
        Self::Choice { options, selected }
    }

    fn integer(value: u8, (min, max): (u8, u8)) -> Self {
        Self::Number {
            value: f64::from(value),
            min: f64::from(min),
            max: f64::from(max),
            step: 1.0,
            decimals: 0,
        }
    }

    /// Value as displayed on the form
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Choice { options, selected } => {
                options.get(*selected).cloned().unwrap_or_default()
            }
            Self::Number {
                value, decimals, ..
            } => format!("{:.*}", *decimals as usize, value),
        }
    }

    fn shift(&mut self, forward: bool) {
        match self {
            Self::Text(_) => {}
            Self::Choice { options, selected } => {
                if options.is_empty() {
                    return;
                }
                let len = options.len();
                *selected = if forward {
                    (*selected + 1) % len
                } else {
                    (*selected + len - 1) % len
                };
            }
            Self::Number {
                value,
                min,
                max,
                step,
                decimals,
            } => {
                let scale = 10f64.powi(*decimals as i32);
                let next = if forward { *value + *step } else { *value - *step };
                *value = ((next * scale).round() / scale).clamp(*min, *max);
            }
        }
    }

    /// Next option / larger number
    pub fn increase(&mut self) {
        self.shift(true);
    }

    /// Previous option / smaller number
    pub fn decrease(&mut self) {
        self.shift(false);
    }

    fn as_u8(&self) -> u8 {
        match self {
            Self::Number { value, .. } => value.round().clamp(0.0, f64::from(u8::MAX)) as u8,
            _ => 0,
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            Self::Number { value, .. } => *value,
            _ => 0.0,
        }
    }
}

/// A labelled form field
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub id: FieldId,
    pub input: FieldInput,
}

/// The whole form and the cursor position
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub selected: usize,
}

impl FormState {
    /// Fresh form with the initial value of every dropdown selected
    pub fn from_catalog(catalog: &ReferenceCatalog) -> Self {
        Self::from_form(&StudentForm::with_catalog_defaults(catalog), catalog)
    }

    /// Form pre-filled from a saved submission. Values the catalog does not
    /// offer fall back to the first option.
    pub fn from_form(form: &StudentForm, catalog: &ReferenceCatalog) -> Self {
        let options = |field: CatalogField| -> Vec<String> {
            catalog.value_set(field).iter().cloned().collect()
        };

        let fields = FieldId::iter()
            .map(|id| {
                let input = match id {
                    FieldId::Name => FieldInput::Text(form.name.clone()),
                    FieldId::Gpa => FieldInput::Number {
                        // Same 0.1 grid the stepper uses, so what is shown is what is submitted
                        value: ((form.gpa * 10.0).round() / 10.0)
                            .clamp(GPA_RANGE.0, GPA_RANGE.1),
                        min: GPA_RANGE.0,
                        max: GPA_RANGE.1,
                        step: 0.1,
                        decimals: 1,
                    },
                    FieldId::StudyHours => FieldInput::integer(form.study_hours, STUDY_HOURS_RANGE),
                    FieldId::Failures => FieldInput::integer(form.failures, FAILURES_RANGE),
                    FieldId::SleepHours => FieldInput::integer(form.sleep_hours, SLEEP_HOURS_RANGE),
                    FieldId::Hostel => FieldInput::choice(variant_names::<Toggle>(), &form.hostel),
                    FieldId::FamilySupport => {
                        FieldInput::choice(variant_names::<Level>(), &form.family_support)
                    }
                    FieldId::Year => FieldInput::choice(options(CatalogField::Year), &form.year),
                    FieldId::Branch => {
                        FieldInput::choice(options(CatalogField::Branch), &form.branch)
                    }
                    FieldId::Interest => {
                        FieldInput::choice(options(CatalogField::Interest), &form.interest)
                    }
                    FieldId::Budget => {
                        FieldInput::choice(options(CatalogField::BudgetLevel), &form.budget)
                    }
                    FieldId::SkillLevel => {
                        FieldInput::choice(options(CatalogField::SkillLevel), &form.skill_level)
                    }
                    FieldId::StressLevel => {
                        FieldInput::choice(options(CatalogField::StressLevel), &form.stress_level)
                    }
                    FieldId::ConfusionLevel => FieldInput::choice(
                        options(CatalogField::ConfusionLevel),
                        &form.confusion_level,
                    ),
                    FieldId::Communication => FieldInput::choice(
                        options(CatalogField::CommunicationLevel),
                        &form.communication,
                    ),
                };
                FormField { id, input }
            })
            .collect();

        Self {
            fields,
            selected: 0,
        }
    }

    /// Field under the cursor
    pub fn current(&self) -> &FormField {
        &self.fields[self.selected.min(self.fields.len() - 1)]
    }

    fn current_mut(&mut self) -> &mut FormField {
        let index = self.selected.min(self.fields.len() - 1);
        &mut self.fields[index]
    }

    /// Move the cursor down, wrapping to the top
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.fields.len();
    }

    /// Move the cursor up, wrapping to the bottom
    pub fn previous(&mut self) {
        let len = self.fields.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn increase(&mut self) {
        self.current_mut().input.increase();
    }

    pub fn decrease(&mut self) {
        self.current_mut().input.decrease();
    }

    /// Whether typed characters go into the current field
    pub fn is_editing_text(&self) -> bool {
        matches!(self.current().input, FieldInput::Text(_))
    }

    /// Type a character into the current text field
    pub fn push_char(&mut self, c: char) {
        if let FieldInput::Text(text) = &mut self.current_mut().input {
            text.push(c);
        }
    }

    /// Delete the last character of the current text field
    pub fn backspace(&mut self) {
        if let FieldInput::Text(text) = &mut self.current_mut().input {
            text.pop();
        }
    }

    fn value(&self, id: FieldId) -> Option<&FieldInput> {
        self.fields.iter().find(|f| f.id == id).map(|f| &f.input)
    }

    fn text(&self, id: FieldId) -> String {
        self.value(id).map(FieldInput::display).unwrap_or_default()
    }

    /// Snapshot the form as a raw submission
    pub fn to_student_form(&self) -> StudentForm {
        StudentForm {
            name: self.text(FieldId::Name),
            year: self.text(FieldId::Year),
            branch: self.text(FieldId::Branch),
            gpa: self.value(FieldId::Gpa).map(FieldInput::as_f64).unwrap_or_default(),
            study_hours: self
                .value(FieldId::StudyHours)
                .map(FieldInput::as_u8)
                .unwrap_or_default(),
            failures: self
                .value(FieldId::Failures)
                .map(FieldInput::as_u8)
                .unwrap_or_default(),
            hostel: self.text(FieldId::Hostel),
            sleep_hours: self
                .value(FieldId::SleepHours)
                .map(FieldInput::as_u8)
                .unwrap_or_default(),
            family_support: self.text(FieldId::FamilySupport),
            interest: self.text(FieldId::Interest),
            budget: self.text(FieldId::Budget),
            skill_level: self.text(FieldId::SkillLevel),
            stress_level: self.text(FieldId::StressLevel),
            confusion_level: self.text(FieldId::ConfusionLevel),
            communication: self.text(FieldId::Communication),
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Mode to return to when leaving the dataset view
    pub previous_mode: Option<AppMode>,
    /// Form contents and cursor
    pub form: FormState,
    /// Last successful submission
    pub submission: Option<Submission>,
    /// Roadmap generated from `submission`
    pub roadmap: Option<Roadmap>,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether the last status message reports a failure
    pub status_is_error: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Scroll offset of the roadmap view
    pub roadmap_scroll: u16,
    /// First dataset row shown
    pub dataset_offset: usize,
}

impl AppState {
    /// Initial state for a loaded catalog
    pub fn new(catalog: &ReferenceCatalog) -> Self {
        Self::with_form(FormState::from_catalog(catalog))
    }

    /// Initial state with a pre-filled form
    pub fn with_form(form: FormState) -> Self {
        Self {
            mode: AppMode::Form,
            previous_mode: None,
            form,
            submission: None,
            roadmap: None,
            status_message: "Fill in your details and press Enter to generate your roadmap"
                .to_string(),
            status_is_error: false,
            help_visible: false,
            roadmap_scroll: 0,
            dataset_offset: 0,
        }
    }

    /// Set an informational status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    /// Set an error status message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Validate the form and, on success, switch to the roadmap view.
    ///
    /// On failure the form stays open and the error is shown in the status
    /// line; the error is also returned to the caller.
    pub fn submit(&mut self, catalog: &ReferenceCatalog) -> Result<()> {
        let form = self.form.to_student_form();
        match form.validate(catalog) {
            Ok(submission) => {
                let roadmap = build_roadmap(&submission.profile);
                info!("Generated roadmap with {} steps", roadmap.len());
                if submission.name.is_empty() {
                    self.set_status("✅ Roadmap Generated");
                } else {
                    self.set_status(format!("✅ Roadmap Generated for {}", submission.name));
                }
                self.submission = Some(submission);
                self.roadmap = Some(roadmap);
                self.roadmap_scroll = 0;
                self.mode = AppMode::Roadmap;
                Ok(())
            }
            Err(e) => {
                debug!("Form rejected: {}", e);
                self.set_error(format!("✗ {}", e));
                Err(e)
            }
        }
    }

    /// Open the dataset view, remembering where we came from
    pub fn open_dataset(&mut self) {
        if self.mode != AppMode::Dataset {
            self.previous_mode = Some(self.mode);
            self.mode = AppMode::Dataset;
        }
    }

    /// Leave the current view. Returns false when already at the form.
    pub fn go_back(&mut self) -> bool {
        match self.mode {
            AppMode::Form => false,
            AppMode::Roadmap => {
                self.mode = AppMode::Form;
                true
            }
            AppMode::Dataset => {
                self.mode = self.previous_mode.take().unwrap_or(AppMode::Form);
                true
            }
        }
    }

    /// Scroll the active view
    pub fn scroll(&mut self, delta: i32, max_dataset_offset: usize) {
        match self.mode {
            AppMode::Roadmap => {
                self.roadmap_scroll = self.roadmap_scroll.saturating_add_signed(delta as i16);
            }
            AppMode::Dataset => {
                let next = self.dataset_offset as i64 + i64::from(delta);
                self.dataset_offset = next.clamp(0, max_dataset_offset as i64) as usize;
            }
            AppMode::Form => {}
        }
    }
}
