//! Roadmap generation
//!
//! Translates a validated student profile into an ordered list of advice.
//!
//! # Rules
//!
//! | # | Rule                | Fires when                              |
//! |---|---------------------|-----------------------------------------|
//! | 1 | `SkillFocus`        | always (Beginner vs. everyone else)     |
//! | 2 | `StudyHabits`       | study hours < 3 or GPA < 6.0            |
//! | 3 | `LivingSituation`   | always (hostel vs. home)                |
//! | 4 | `Wellbeing`         | stress or confusion is High             |
//! | 5 | `SupportNetwork`    | family support is Low                   |
//! | 6 | `Communication`     | communication is Poor                   |
//! | 7 | `InterestResources` | always, names the interest verbatim     |
//! | 8 | `BudgetResources`   | always (Low budget vs. everyone else)   |
//!
//! Rules are evaluated independently in this order, so a roadmap has between
//! 4 and 8 steps and its order always matches the table.
//!
//! Pure logic: no I/O, no shared state.

use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::profile::StudentProfile;
use crate::resources::{ResourceCategory, RESOURCE_CATEGORIES};
use crate::types::{CommunicationLevel, Level, SkillLevel};

/// Below this many daily study hours the study-habits advice fires
pub const MIN_STUDY_HOURS: u8 = 3;
/// Below this GPA the study-habits advice fires
pub const MIN_GPA: f64 = 6.0;

/// Advice text, one constant per possible outcome
pub mod advice {
    pub const BASICS: &str = "Start with basics of your interest area and practice small projects.";
    pub const ADVANCED: &str =
        "Focus on advanced projects, real-world applications, and certifications.";
    pub const STUDY_SCHEDULE: &str =
        "Increase study hours and follow a structured learning schedule.";
    pub const HOSTEL_ROUTINE: &str =
        "Maintain a healthy routine: proper sleep, food, and time management in hostel.";
    pub const FAMILY_BALANCE: &str =
        "Balance family responsibilities with studies and skill building.";
    pub const STRESS_MANAGEMENT: &str =
        "Adopt stress management techniques: meditation, time management, and counseling.";
    pub const MENTORS: &str = "Seek mentors, peer groups, or online communities for guidance.";
    pub const COMMUNICATION: &str =
        "Work on communication skills through speaking, writing, and online workshops.";
    pub const FREE_RESOURCES: &str =
        "Use free resources: YouTube tutorials, free MOOCs, and open-source materials.";
    pub const PAID_RESOURCES: &str =
        "Consider paid courses, mentorship, or workshops for faster learning.";

    /// Interest advice with the interest interpolated verbatim
    pub fn curated_resources(interest: &str) -> String {
        format!("Follow curated courses, books, and online tutorials for {interest}.")
    }
}

/// One check of the pipeline. Declaration order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    SkillFocus,
    StudyHabits,
    LivingSituation,
    Wellbeing,
    SupportNetwork,
    Communication,
    InterestResources,
    BudgetResources,
}

impl Rule {
    /// Whether the rule produces advice for every profile
    pub fn is_unconditional(&self) -> bool {
        matches!(
            self,
            Self::SkillFocus | Self::LivingSituation | Self::InterestResources | Self::BudgetResources
        )
    }

    /// Evaluate the rule against a profile
    pub fn evaluate(&self, profile: &StudentProfile) -> Option<String> {
        match self {
            // Intermediate and Advanced share the advanced advice
            Self::SkillFocus => Some(
                match profile.skill_level {
                    SkillLevel::Beginner => advice::BASICS,
                    SkillLevel::Intermediate | SkillLevel::Advanced => advice::ADVANCED,
                }
                .to_string(),
            ),
            Self::StudyHabits => (profile.study_hours < MIN_STUDY_HOURS || profile.gpa < MIN_GPA)
                .then(|| advice::STUDY_SCHEDULE.to_string()),
            Self::LivingSituation => Some(
                if profile.hostel_resident {
                    advice::HOSTEL_ROUTINE
                } else {
                    advice::FAMILY_BALANCE
                }
                .to_string(),
            ),
            Self::Wellbeing => (profile.stress_level == Level::High
                || profile.confusion_level == Level::High)
                .then(|| advice::STRESS_MANAGEMENT.to_string()),
            Self::SupportNetwork => (profile.family_support_level == Level::Low)
                .then(|| advice::MENTORS.to_string()),
            Self::Communication => (profile.communication_level == CommunicationLevel::Poor)
                .then(|| advice::COMMUNICATION.to_string()),
            Self::InterestResources => Some(advice::curated_resources(&profile.interest)),
            // Medium and High share the paid advice
            Self::BudgetResources => Some(
                match profile.budget_level {
                    Level::Low => advice::FREE_RESOURCES,
                    Level::Medium | Level::High => advice::PAID_RESOURCES,
                }
                .to_string(),
            ),
        }
    }
}

/// A single piece of advice and the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapStep {
    pub rule: Rule,
    pub advice: String,
}

/// Generated advice plus the static resource listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roadmap {
    pub steps: Vec<RoadmapStep>,
    pub resources: &'static [ResourceCategory],
}

impl Roadmap {
    /// Advice strings in order
    pub fn advice(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.advice.as_str()).collect()
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a generated roadmap (four rules always fire)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Run every rule in order and keep the ones that fire.
pub fn build_roadmap(profile: &StudentProfile) -> Roadmap {
    let steps = Rule::iter()
        .filter_map(|rule| {
            rule.evaluate(profile)
                .map(|advice| RoadmapStep { rule, advice })
        })
        .collect();

    Roadmap {
        steps,
        resources: &RESOURCE_CATEGORIES,
    }
}

/// Ordered advice strings for a profile.
///
/// Deterministic and total over validated profiles.
pub fn generate(profile: &StudentProfile) -> Vec<String> {
    build_roadmap(profile)
        .steps
        .into_iter()
        .map(|step| step.advice)
        .collect()
}
