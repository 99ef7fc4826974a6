use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::profile::StudentForm;

/// Skill Roadmap - personalized study and skill advice for students
#[derive(Parser)]
#[command(name = "skill-roadmap")]
#[command(about = "Turns a student's self-reported profile into a personalized skill roadmap")]
#[command(version)]
pub struct Cli {
    /// Reference dataset (CSV of prior student records)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging to stderr (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the interactive form
    Form {
        /// Pre-fill the form from a saved submission (JSON)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Save the submitted form to this JSON file
        #[arg(long)]
        save_profile: Option<PathBuf>,
    },
    /// Generate a roadmap without the interactive form
    Generate(GenerateArgs),
    /// Validate a saved form against the reference dataset
    Validate {
        /// Path to the saved form (JSON)
        profile: PathBuf,
    },
    /// List the choices the dataset offers for each field
    Catalog {
        /// Only this field (year, branch, interest, budget_level, skill_level,
        /// stress_level, confusion_level, communication_level)
        field: Option<String>,
    },
    /// Preview the reference dataset
    Dataset {
        /// Maximum rows to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

/// Form fields for `generate`; each flag overrides the loaded profile
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Start from a saved form (JSON)
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub branch: Option<String>,
    /// GPA on a 0-10 scale
    #[arg(long)]
    pub gpa: Option<f64>,
    /// Daily study hours (0-12)
    #[arg(long)]
    pub study_hours: Option<u8>,
    /// Number of failed courses (0-10)
    #[arg(long)]
    pub failures: Option<u8>,
    /// Hostel resident (Yes/No)
    #[arg(long)]
    pub hostel: Option<String>,
    /// Daily sleep hours (0-12)
    #[arg(long)]
    pub sleep_hours: Option<u8>,
    /// Family support level (Low/Medium/High)
    #[arg(long)]
    pub family_support: Option<String>,
    #[arg(long)]
    pub interest: Option<String>,
    #[arg(long)]
    pub budget: Option<String>,
    #[arg(long)]
    pub skill_level: Option<String>,
    #[arg(long)]
    pub stress_level: Option<String>,
    #[arg(long)]
    pub confusion_level: Option<String>,
    #[arg(long)]
    pub communication: Option<String>,
}

impl GenerateArgs {
    /// Overlay the flags that were given onto a base form
    pub fn apply_to(&self, mut form: StudentForm) -> StudentForm {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }

        set(&mut form.name, &self.name);
        set(&mut form.year, &self.year);
        set(&mut form.branch, &self.branch);
        set(&mut form.gpa, &self.gpa);
        set(&mut form.study_hours, &self.study_hours);
        set(&mut form.failures, &self.failures);
        set(&mut form.hostel, &self.hostel);
        set(&mut form.sleep_hours, &self.sleep_hours);
        set(&mut form.family_support, &self.family_support);
        set(&mut form.interest, &self.interest);
        set(&mut form.budget, &self.budget);
        set(&mut form.skill_level, &self.skill_level);
        set(&mut form.stress_level, &self.stress_level);
        set(&mut form.confusion_level, &self.confusion_level);
        set(&mut form.communication, &self.communication);
        form
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
