//! Tests for form submission and validation
//!
//! These tests verify:
//! - Saving and loading forms as JSON
//! - Validation failures for each kind of bad input
//! - The rendered report for a validated submission

use skill_roadmap::report::{render, render_text};
use skill_roadmap::roadmap::{advice, build_roadmap};
use skill_roadmap::{
    CommunicationLevel, Level, OutputFormat, ReferenceCatalog, RoadmapError, SkillLevel,
    StudentForm,
};

fn catalog() -> ReferenceCatalog {
    let data = "\
year,branch,interest,budget_level,skill level,stress level,confusion level,communication
1,CSE,Data Science,Medium,Beginner,Low,Low,Good
3,ECE,Robotics,Low,Advanced,High,High,Poor
";
    ReferenceCatalog::from_reader(data.as_bytes()).unwrap()
}

fn valid_form() -> StudentForm {
    StudentForm {
        name: "Asha".to_string(),
        year: "1".to_string(),
        branch: "CSE".to_string(),
        gpa: 7.5,
        study_hours: 4,
        failures: 0,
        hostel: "Yes".to_string(),
        sleep_hours: 7,
        family_support: "High".to_string(),
        interest: "Data Science".to_string(),
        budget: "Medium".to_string(),
        skill_level: "Beginner".to_string(),
        stress_level: "Low".to_string(),
        confusion_level: "Low".to_string(),
        communication: "Good".to_string(),
    }
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_form_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.json");
    let form = valid_form();
    form.save_to_file(&path).unwrap();
    assert_eq!(StudentForm::load_from_file(&path).unwrap(), form);
}

#[test]
fn test_partial_json_uses_form_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{"name": "Ravi", "interest": "Robotics"}"#).unwrap();

    let form = StudentForm::load_from_file(&path).unwrap();
    assert_eq!(form.name, "Ravi");
    assert_eq!(form.gpa, 7.0);
    assert_eq!(form.sleep_hours, 6);
    assert_eq!(form.hostel, "Yes");
}

#[test]
fn test_malformed_json_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        StudentForm::load_from_file(&path),
        Err(RoadmapError::Json(_))
    ));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_valid_form_builds_profile() {
    let submission = valid_form().validate(&catalog()).unwrap();
    assert_eq!(submission.name, "Asha");
    let profile = &submission.profile;
    assert_eq!(profile.skill_level, SkillLevel::Beginner);
    assert_eq!(profile.budget_level, Level::Medium);
    assert_eq!(profile.family_support_level, Level::High);
    assert_eq!(profile.communication_level, CommunicationLevel::Good);
    assert!(profile.hostel_resident);
}

#[test]
fn test_catalog_defaults_validate() {
    let catalog = catalog();
    let form = StudentForm::with_catalog_defaults(&catalog);
    assert_eq!(form.year, "1");
    assert_eq!(form.interest, "Data Science");
    assert!(form.validate(&catalog).is_ok());
}

#[test]
fn test_gpa_out_of_range() {
    let form = StudentForm {
        gpa: 11.5,
        ..valid_form()
    };
    let err = form.validate(&catalog()).unwrap_err();
    assert!(matches!(err, RoadmapError::OutOfRange { field: "GPA", .. }));
    assert_eq!(err.to_string(), "GPA must be between 0 and 10, got 11.5");
}

#[test]
fn test_study_hours_out_of_range() {
    let form = StudentForm {
        study_hours: 13,
        ..valid_form()
    };
    assert!(matches!(
        form.validate(&catalog()),
        Err(RoadmapError::OutOfRange { .. })
    ));
}

#[test]
fn test_wrong_case_skill_level_is_rejected() {
    let form = StudentForm {
        skill_level: "beginner".to_string(),
        ..valid_form()
    };
    let err = form.validate(&catalog()).unwrap_err();
    assert!(matches!(err, RoadmapError::InvalidChoice { .. }));
    assert!(err.to_string().contains("Beginner, Intermediate, Advanced"));
}

#[test]
fn test_enum_value_missing_from_catalog_is_rejected() {
    // Intermediate is a valid skill level but the dataset never uses it
    let form = StudentForm {
        skill_level: "Intermediate".to_string(),
        ..valid_form()
    };
    assert!(matches!(
        form.validate(&catalog()),
        Err(RoadmapError::NotInCatalog { .. })
    ));
}

#[test]
fn test_unknown_interest_is_rejected() {
    let form = StudentForm {
        interest: "Astrophysics".to_string(),
        ..valid_form()
    };
    let err = form.validate(&catalog()).unwrap_err();
    assert!(err.to_string().contains("Astrophysics"));
}

#[test]
fn test_unselected_branch_is_rejected() {
    let form = StudentForm {
        branch: String::new(),
        ..valid_form()
    };
    let err = form.validate(&catalog()).unwrap_err();
    assert!(err.to_string().contains("must be selected"));
}

#[test]
fn test_long_name_is_accepted() {
    let form = StudentForm {
        name: "x".repeat(500),
        ..valid_form()
    };
    let submission = form.validate(&catalog()).unwrap();
    assert_eq!(submission.name.len(), 500);
}

#[test]
fn test_name_surrounding_whitespace_is_dropped() {
    let form = StudentForm {
        name: "  Asha Rao ".to_string(),
        ..valid_form()
    };
    assert_eq!(form.validate(&catalog()).unwrap().name, "Asha Rao");
}

// =============================================================================
// Report Tests
// =============================================================================

#[test]
fn test_text_report_layout() {
    let submission = valid_form().validate(&catalog()).unwrap();
    let roadmap = build_roadmap(&submission.profile);
    let text = render_text(&submission, &roadmap);

    assert!(text.starts_with("✅ Roadmap Generated for Asha"));
    assert!(text.contains(&format!("1. {}", advice::BASICS)));
    assert!(text.contains("📚 Recommended Resources:"));
    assert!(text.contains("- Free Courses: YouTube, NPTEL, Coursera free courses"));
}

#[test]
fn test_json_report_lists_steps() {
    let submission = valid_form().validate(&catalog()).unwrap();
    let roadmap = build_roadmap(&submission.profile);
    let json = render(&submission, &roadmap, OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["student"], "Asha");
    assert_eq!(value["steps"].as_array().unwrap().len(), roadmap.len());
}
