//! Roadmap report rendering for non-interactive output

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::error::Result;
use crate::profile::Submission;
use crate::resources::ResourceCategory;
use crate::roadmap::{Roadmap, RoadmapStep};

/// How `generate` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    student: &'a str,
    year: &'a str,
    branch: &'a str,
    steps: &'a [RoadmapStep],
    resources: &'a [ResourceCategory],
}

/// Render a roadmap in the requested format
pub fn render(submission: &Submission, roadmap: &Roadmap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(submission, roadmap)),
        OutputFormat::Json => render_json(submission, roadmap),
    }
}

/// Plain-text report: heading, numbered steps, resource listing
pub fn render_text(submission: &Submission, roadmap: &Roadmap) -> String {
    let mut out = String::new();

    if submission.name.is_empty() {
        out.push_str("✅ Roadmap Generated\n\n");
    } else {
        out.push_str(&format!("✅ Roadmap Generated for {}\n\n", submission.name));
    }

    out.push_str("📌 Suggested Steps:\n");
    for (i, step) in roadmap.steps.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step.advice));
    }

    out.push_str("\n📚 Recommended Resources:\n");
    for category in roadmap.resources {
        out.push_str(&format!("- {}: {}\n", category.title, category.summary()));
    }

    out
}

/// JSON report with the rule behind every step
pub fn render_json(submission: &Submission, roadmap: &Roadmap) -> Result<String> {
    let document = ReportDocument {
        student: &submission.name,
        year: &submission.year,
        branch: &submission.branch,
        steps: &roadmap.steps,
        resources: roadmap.resources,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
