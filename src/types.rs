//! Type-safe profile categories for the skill roadmap
//!
//! The reference dataset stores every categorical answer as free text. These
//! closed enums are what the rest of the crate works with; the catalog loader
//! refuses datasets whose values do not parse into them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Self-assessed skill level in the student's area of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum SkillLevel {
    #[strum(serialize = "Beginner")]
    Beginner,
    #[strum(serialize = "Intermediate")]
    Intermediate,
    #[strum(serialize = "Advanced")]
    Advanced,
}

/// Low/Medium/High scale shared by stress, confusion, budget and family support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Level {
    #[default]
    #[strum(serialize = "Low")]
    Low,
    #[strum(serialize = "Medium")]
    Medium,
    #[strum(serialize = "High")]
    High,
}

/// Self-assessed communication skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum CommunicationLevel {
    #[strum(serialize = "Poor")]
    Poor,
    #[strum(serialize = "Average")]
    Average,
    #[strum(serialize = "Good")]
    Good,
    #[strum(serialize = "Excellent")]
    Excellent,
}

/// Generic Yes/No answer, used for the hostel question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Toggle {
    #[default]
    #[strum(serialize = "Yes")]
    Yes,
    #[strum(serialize = "No")]
    No,
}

impl Toggle {
    /// Convert to boolean
    pub fn as_bool(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

/// Display names of every member of a closed enum, in declaration order.
pub fn variant_names<E>() -> Vec<String>
where
    E: IntoEnumIterator + ToString,
{
    E::iter().map(|v| v.to_string()).collect()
}
