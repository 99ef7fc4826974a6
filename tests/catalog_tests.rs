//! Tests for the reference catalog
//!
//! These tests verify:
//! - Loading the bundled sample dataset
//! - Header normalization and value-set derivation
//! - Rejection of malformed datasets

use std::io::Write;
use std::path::PathBuf;

use skill_roadmap::catalog::normalize_header;
use skill_roadmap::{CatalogField, ReferenceCatalog, RoadmapError};
use strum::IntoEnumIterator;

const HEADER: &str =
    "year,branch,gpa,interest,budget_level,skill level,stress level,confusion  level,communication";

fn sample_dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/student_performance_extended.csv")
}

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// Sample Dataset Tests
// =============================================================================

#[test]
fn test_sample_dataset_loads() {
    let catalog = ReferenceCatalog::load(sample_dataset()).unwrap();
    assert!(!catalog.is_empty());
    for field in CatalogField::iter() {
        assert!(
            !catalog.value_set(field).is_empty(),
            "{} should have values",
            field
        );
    }
}

#[test]
fn test_sample_dataset_covers_every_skill_level() {
    let catalog = ReferenceCatalog::load(sample_dataset()).unwrap();
    let skills: Vec<&str> = catalog
        .value_set(CatalogField::SkillLevel)
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(skills, vec!["Advanced", "Beginner", "Intermediate"]);
}

// =============================================================================
// Loading Tests
// =============================================================================

#[test]
fn test_value_sets_are_distinct_and_sorted() {
    let file = write_csv(&format!(
        "{HEADER}\n\
         2,ECE,7.1,Robotics,Low,Beginner,High,Low,Poor\n\
         1,CSE,8.0,Data Science,High,Advanced,Low,Medium,Good\n\
         2,CSE,6.5,Robotics,Medium,Beginner,Medium,High,Good\n"
    ));
    let catalog = ReferenceCatalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), 3);
    let branches: Vec<&String> = catalog.value_set(CatalogField::Branch).iter().collect();
    assert_eq!(branches, vec!["CSE", "ECE"]);
    let interests: Vec<&String> = catalog.value_set(CatalogField::Interest).iter().collect();
    assert_eq!(interests, vec!["Data Science", "Robotics"]);
    assert!(catalog.contains(CatalogField::ConfusionLevel, "High"));
    assert!(!catalog.contains(CatalogField::CommunicationLevel, "Excellent"));
}

#[test]
fn test_headers_and_rows_are_kept_verbatim() {
    let file = write_csv(&format!("{HEADER}\n1, CSE ,7.0,AI,Low,Beginner,Low,Low,Good\n"));
    let catalog = ReferenceCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.headers()[5], "skill level");
    assert_eq!(catalog.rows()[0][1], " CSE ");
    assert!(catalog.contains(CatalogField::Branch, " CSE "));
}

#[test]
fn test_years_are_listed_in_numeric_order() {
    let file = write_csv(&format!(
        "{HEADER}\n\
         10,CSE,7.0,AI,Low,Beginner,Low,Low,Good\n\
         9,CSE,7.0,AI,Low,Beginner,Low,Low,Good\n\
         1,CSE,7.0,AI,Low,Beginner,Low,Low,Good\n"
    ));
    let catalog = ReferenceCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.value_set(CatalogField::Year), ["1", "9", "10"]);
}

#[test]
fn test_blank_cells_are_ignored() {
    let file = write_csv(&format!(
        "{HEADER}\n\
         1,CSE,7.0,,Low,Beginner,Low,Low,Good\n\
         2,ECE,7.5,Robotics,Low,Beginner,Low,Low,Good\n"
    ));
    let catalog = ReferenceCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.value_set(CatalogField::Interest).len(), 1);
}

#[test]
fn test_missing_column_is_rejected() {
    let file = write_csv("year,branch,interest\n1,CSE,AI\n");
    let err = ReferenceCatalog::load(file.path()).unwrap_err();
    assert!(matches!(err, RoadmapError::Catalog(_)));
    assert!(err.to_string().contains("budget_level"));
}

#[test]
fn test_unknown_category_is_rejected() {
    let file = write_csv(&format!("{HEADER}\n1,CSE,7.0,AI,Low,Expert,Low,Low,Good\n"));
    let err = ReferenceCatalog::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Expert"));
}

#[test]
fn test_header_only_dataset_is_rejected() {
    let file = write_csv(&format!("{HEADER}\n"));
    let err = ReferenceCatalog::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("no records"));
}

#[test]
fn test_missing_file_is_a_catalog_error() {
    let err = ReferenceCatalog::load("/nonexistent/students.csv").unwrap_err();
    assert!(matches!(err, RoadmapError::Catalog(_)));
}

#[test]
fn test_normalize_header_variants() {
    assert_eq!(normalize_header("Skill-Level"), "skill_level");
    assert_eq!(normalize_header("  confusion  level "), "confusion_level");
    assert_eq!(normalize_header("budget_level"), "budget_level");
}
