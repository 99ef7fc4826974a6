//! Student form input and the validated profile handed to the generator.
//!
//! `StudentForm` is the raw submission, exactly as the form (or a saved JSON
//! file, or CLI flags) provides it: categorical answers are plain strings and
//! numbers are unchecked. `StudentForm::validate` is the only way to obtain a
//! `StudentProfile`, so the generator never sees an out-of-domain value.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::catalog::{CatalogField, ReferenceCatalog};
use crate::error::{Result, RoadmapError};
use crate::types::{CommunicationLevel, Level, SkillLevel, Toggle};

/// Inclusive GPA range
pub const GPA_RANGE: (f64, f64) = (0.0, 10.0);
/// Inclusive daily study hours range
pub const STUDY_HOURS_RANGE: (u8, u8) = (0, 12);
/// Inclusive daily sleep hours range
pub const SLEEP_HOURS_RANGE: (u8, u8) = (0, 12);
/// Inclusive range for the number of failed courses
pub const FAILURES_RANGE: (u8, u8) = (0, 10);

/// The inputs the roadmap generator reads.
///
/// Constructed per request by [`StudentForm::validate`] and only ever
/// borrowed immutably afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProfile {
    pub skill_level: SkillLevel,
    pub interest: String,
    pub study_hours: u8,
    pub gpa: f64,
    pub stress_level: Level,
    pub confusion_level: Level,
    pub hostel_resident: bool,
    pub communication_level: CommunicationLevel,
    pub budget_level: Level,
    pub family_support_level: Level,
}

/// A validated submission: the profile plus the form fields that are only
/// displayed, never used for advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub name: String,
    pub year: String,
    pub branch: String,
    pub failures: u8,
    pub sleep_hours: u8,
    pub profile: StudentProfile,
}

/// Raw form submission that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub name: String,
    pub year: String,
    pub branch: String,
    pub gpa: f64,
    pub study_hours: u8,
    pub failures: u8,
    pub hostel: String,
    pub sleep_hours: u8,
    pub family_support: String,
    pub interest: String,
    pub budget: String,
    pub skill_level: String,
    pub stress_level: String,
    pub confusion_level: String,
    pub communication: String,
}

impl Default for StudentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            year: String::new(),
            branch: String::new(),
            gpa: 7.0,
            study_hours: 3,
            failures: 0,
            hostel: Toggle::Yes.to_string(),
            sleep_hours: 6,
            family_support: Level::Low.to_string(),
            interest: String::new(),
            budget: String::new(),
            skill_level: String::new(),
            stress_level: String::new(),
            confusion_level: String::new(),
            communication: String::new(),
        }
    }
}

impl StudentForm {
    /// Create a form pre-filled with the first catalog value of every
    /// categorical field, the same initial state a dropdown would show.
    pub fn with_catalog_defaults(catalog: &ReferenceCatalog) -> Self {
        let first = |field| {
            catalog
                .value_set(field)
                .iter()
                .next()
                .cloned()
                .unwrap_or_default()
        };
        Self {
            year: first(CatalogField::Year),
            branch: first(CatalogField::Branch),
            interest: first(CatalogField::Interest),
            budget: first(CatalogField::BudgetLevel),
            skill_level: first(CatalogField::SkillLevel),
            stress_level: first(CatalogField::StressLevel),
            confusion_level: first(CatalogField::ConfusionLevel),
            communication: first(CatalogField::CommunicationLevel),
            ..Self::default()
        }
    }

    /// Save the form to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        debug!("Saved student form to {:?}", path.as_ref());
        Ok(())
    }

    /// Load a form from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let form: Self = serde_json::from_str(&content)?;
        Ok(form)
    }

    /// Validate every field and build the submission.
    ///
    /// Fails on the first problem found, in form order: unparseable
    /// categories, out-of-range numbers, then values the reference catalog
    /// has never seen.
    pub fn validate(&self, catalog: &ReferenceCatalog) -> Result<Submission> {
        // Free text; only surrounding whitespace is dropped
        let name = self.name.trim();

        check_catalog(catalog, CatalogField::Year, "year", &self.year)?;
        check_catalog(catalog, CatalogField::Branch, "branch", &self.branch)?;

        if !(GPA_RANGE.0..=GPA_RANGE.1).contains(&self.gpa) {
            return Err(RoadmapError::out_of_range(
                "GPA",
                self.gpa,
                GPA_RANGE.0,
                GPA_RANGE.1,
            ));
        }
        check_range("Daily study hours", self.study_hours, STUDY_HOURS_RANGE)?;
        check_range("Number of failures", self.failures, FAILURES_RANGE)?;
        let hostel: Toggle = parse_choice("hostel answer", &self.hostel)?;
        check_range("Daily sleep hours", self.sleep_hours, SLEEP_HOURS_RANGE)?;
        let family_support: Level = parse_choice("family support level", &self.family_support)?;

        check_catalog(catalog, CatalogField::Interest, "interest", &self.interest)?;

        let budget: Level = parse_choice("budget level", &self.budget)?;
        check_catalog(catalog, CatalogField::BudgetLevel, "budget level", &self.budget)?;
        let skill_level: SkillLevel = parse_choice("skill level", &self.skill_level)?;
        check_catalog(
            catalog,
            CatalogField::SkillLevel,
            "skill level",
            &self.skill_level,
        )?;
        let stress_level: Level = parse_choice("stress level", &self.stress_level)?;
        check_catalog(
            catalog,
            CatalogField::StressLevel,
            "stress level",
            &self.stress_level,
        )?;
        let confusion_level: Level = parse_choice("confusion level", &self.confusion_level)?;
        check_catalog(
            catalog,
            CatalogField::ConfusionLevel,
            "confusion level",
            &self.confusion_level,
        )?;
        let communication: CommunicationLevel =
            parse_choice("communication level", &self.communication)?;
        check_catalog(
            catalog,
            CatalogField::CommunicationLevel,
            "communication level",
            &self.communication,
        )?;

        Ok(Submission {
            name: name.to_string(),
            year: self.year.clone(),
            branch: self.branch.clone(),
            failures: self.failures,
            sleep_hours: self.sleep_hours,
            profile: StudentProfile {
                skill_level,
                interest: self.interest.clone(),
                study_hours: self.study_hours,
                gpa: self.gpa,
                stress_level,
                confusion_level,
                hostel_resident: hostel.as_bool(),
                communication_level: communication,
                budget_level: budget,
                family_support_level: family_support,
            },
        })
    }
}

fn parse_choice<E>(field: &'static str, value: &str) -> Result<E>
where
    E: FromStr + IntoEnumIterator + ToString,
{
    E::from_str(value).map_err(|_| RoadmapError::invalid_choice(field, value, E::iter()))
}

fn check_range(field: &'static str, value: u8, (min, max): (u8, u8)) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RoadmapError::out_of_range(
            field,
            f64::from(value),
            f64::from(min),
            f64::from(max),
        ))
    }
}

fn check_catalog(
    catalog: &ReferenceCatalog,
    field: CatalogField,
    name: &'static str,
    value: &str,
) -> Result<()> {
    if value.is_empty() {
        return Err(RoadmapError::validation(format!("{} must be selected", name)));
    }
    if catalog.contains(field, value) {
        Ok(())
    } else {
        Err(RoadmapError::NotInCatalog {
            field: name,
            value: value.to_string(),
        })
    }
}
