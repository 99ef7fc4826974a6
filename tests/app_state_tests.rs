//! Tests for Application State Management
//!
//! These tests verify:
//! - Form navigation and value editing
//! - Mode transitions driven by key events
//! - Status messages after submission

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use skill_roadmap::app::{App, AppMode, AppState, FieldId, FieldInput, FormState};
use skill_roadmap::ReferenceCatalog;

fn catalog() -> ReferenceCatalog {
    let data = "\
year,branch,interest,budget_level,skill level,stress level,confusion level,communication
1,CSE,Data Science,Low,Beginner,High,Low,Poor
2,ECE,Robotics,High,Advanced,Low,Low,Good
";
    ReferenceCatalog::from_reader(data.as_bytes()).unwrap()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key_event(key(code)).unwrap()
}

fn select_field(form: &mut FormState, id: FieldId) {
    while form.current().id != id {
        form.next();
    }
}

// =============================================================================
// FormState Tests
// =============================================================================

#[test]
fn test_form_starts_on_name() {
    let form = FormState::from_catalog(&catalog());
    assert_eq!(form.selected, 0);
    assert_eq!(form.current().id, FieldId::Name);
    assert!(form.is_editing_text());
    assert_eq!(form.fields.len(), 15);
}

#[test]
fn test_navigation_wraps() {
    let mut form = FormState::from_catalog(&catalog());
    form.previous();
    assert_eq!(form.current().id, FieldId::Communication);
    form.next();
    assert_eq!(form.current().id, FieldId::Name);
}

#[test]
fn test_choice_cycles_through_catalog_values() {
    let mut form = FormState::from_catalog(&catalog());
    select_field(&mut form, FieldId::Interest);
    assert_eq!(form.current().input.display(), "Data Science");
    form.increase();
    assert_eq!(form.current().input.display(), "Robotics");
    form.increase();
    assert_eq!(form.current().input.display(), "Data Science");
    form.decrease();
    assert_eq!(form.current().input.display(), "Robotics");
}

#[test]
fn test_gpa_steps_and_clamps() {
    let mut form = FormState::from_catalog(&catalog());
    select_field(&mut form, FieldId::Gpa);
    assert_eq!(form.current().input.display(), "7.0");
    form.increase();
    assert_eq!(form.current().input.display(), "7.1");
    for _ in 0..50 {
        form.increase();
    }
    assert_eq!(form.current().input.display(), "10.0");
    assert_eq!(form.to_student_form().gpa, 10.0);
}

#[test]
fn test_study_hours_never_go_negative() {
    let mut form = FormState::from_catalog(&catalog());
    select_field(&mut form, FieldId::StudyHours);
    for _ in 0..10 {
        form.decrease();
    }
    assert!(matches!(
        form.current().input,
        FieldInput::Number { value, .. } if value == 0.0
    ));
    assert_eq!(form.to_student_form().study_hours, 0);
}

#[test]
fn test_text_editing() {
    let mut form = FormState::from_catalog(&catalog());
    for c in "Neha".chars() {
        form.push_char(c);
    }
    form.backspace();
    assert_eq!(form.to_student_form().name, "Neh");
}

#[test]
fn test_saved_form_prefills_fields() {
    let catalog = catalog();
    let mut saved = skill_roadmap::StudentForm::with_catalog_defaults(&catalog);
    saved.name = "Kiran".to_string();
    saved.interest = "Robotics".to_string();
    saved.hostel = "No".to_string();

    let form = FormState::from_form(&saved, &catalog);
    assert_eq!(form.to_student_form(), saved);
}

#[test]
fn test_saved_gpa_is_rounded_to_displayed_step() {
    let catalog = catalog();
    let mut saved = skill_roadmap::StudentForm::with_catalog_defaults(&catalog);
    saved.gpa = 5.96;

    let mut form = FormState::from_form(&saved, &catalog);
    assert_eq!(form.to_student_form().gpa, 6.0);
    select_field(&mut form, FieldId::Gpa);
    assert_eq!(form.current().input.display(), "6.0");

    // The value submitted is the value shown, so no study-habits advice
    let mut state = AppState::with_form(form);
    state.submit(&catalog).unwrap();
    let roadmap = state.roadmap.unwrap();
    assert!(
        !roadmap
            .advice()
            .contains(&skill_roadmap::roadmap::advice::STUDY_SCHEDULE)
    );
}

#[test]
fn test_unknown_saved_value_falls_back_to_first_option() {
    let catalog = catalog();
    let mut saved = skill_roadmap::StudentForm::with_catalog_defaults(&catalog);
    saved.branch = "AERO".to_string();

    let form = FormState::from_form(&saved, &catalog);
    assert_eq!(form.to_student_form().branch, "CSE");
}

// =============================================================================
// AppState Tests
// =============================================================================

#[test]
fn test_submit_switches_to_roadmap() {
    let catalog = catalog();
    let mut state = AppState::new(&catalog);
    state.submit(&catalog).unwrap();

    assert_eq!(state.mode, AppMode::Roadmap);
    assert_eq!(state.status_message, "✅ Roadmap Generated");
    assert!(!state.status_is_error);
    assert!(state.roadmap.is_some());
}

#[test]
fn test_dataset_view_returns_to_previous_mode() {
    let catalog = catalog();
    let mut state = AppState::new(&catalog);
    state.submit(&catalog).unwrap();

    state.open_dataset();
    assert_eq!(state.mode, AppMode::Dataset);
    assert!(state.go_back());
    assert_eq!(state.mode, AppMode::Roadmap);
    assert!(state.go_back());
    assert_eq!(state.mode, AppMode::Form);
    assert!(!state.go_back());
}

#[test]
fn test_dataset_scroll_is_clamped() {
    let catalog = catalog();
    let mut state = AppState::new(&catalog);
    state.open_dataset();
    state.scroll(-5, 3);
    assert_eq!(state.dataset_offset, 0);
    state.scroll(10, 3);
    assert_eq!(state.dataset_offset, 3);
}

// =============================================================================
// Key Handling Tests
// =============================================================================

#[test]
fn test_enter_generates_roadmap_with_name() {
    let mut app = App::new(catalog(), None);
    for c in "Dev".chars() {
        assert!(!press(&mut app, KeyCode::Char(c)));
    }
    assert!(!press(&mut app, KeyCode::Enter));

    let state = app.state();
    assert_eq!(state.mode, AppMode::Roadmap);
    assert_eq!(state.status_message, "✅ Roadmap Generated for Dev");
    assert_eq!(state.submission.as_ref().unwrap().name, "Dev");
}

#[test]
fn test_q_is_typed_into_name_on_form() {
    let mut app = App::new(catalog(), None);
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.state().form.to_student_form().name, "q");
}

#[test]
fn test_q_quits_from_roadmap() {
    let mut app = App::new(catalog(), None);
    press(&mut app, KeyCode::Enter);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn test_esc_quits_from_form() {
    let mut app = App::new(catalog(), None);
    assert!(press(&mut app, KeyCode::Esc));
}

#[test]
fn test_ctrl_c_quits_anywhere() {
    let mut app = App::new(catalog(), None);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().mode, AppMode::Dataset);
    let quit = app
        .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .unwrap();
    assert!(quit);
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut app = App::new(catalog(), None);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.state().help_visible);

    // Esc closes the overlay instead of quitting
    assert!(!press(&mut app, KeyCode::Esc));
    assert!(!app.state().help_visible);
    assert_eq!(app.state().mode, AppMode::Form);
}

#[test]
fn test_ctrl_c_quits_with_help_open() {
    let mut app = App::new(catalog(), None);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.state().help_visible);

    let quit = app
        .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .unwrap();
    assert!(quit);
}

#[test]
fn test_plain_c_with_help_open_does_not_quit() {
    let mut app = App::new(catalog(), None);
    press(&mut app, KeyCode::Char('?'));
    assert!(!press(&mut app, KeyCode::Char('c')));
    assert!(app.state().help_visible);
}

#[test]
fn test_long_name_generates_roadmap() {
    let mut app = App::new(catalog(), None);
    for _ in 0..150 {
        press(&mut app, KeyCode::Char('x'));
    }
    press(&mut app, KeyCode::Enter);

    let state = app.state();
    assert_eq!(state.mode, AppMode::Roadmap);
    assert_eq!(state.submission.as_ref().unwrap().name.len(), 150);
}

#[test]
fn test_invalid_form_stays_open_with_error() {
    let catalog = catalog();
    let mut state = AppState::new(&catalog);
    let branch = state
        .form
        .fields
        .iter_mut()
        .find(|f| f.id == FieldId::Branch)
        .unwrap();
    branch.input = FieldInput::Choice {
        options: vec!["AERO".to_string()],
        selected: 0,
    };

    assert!(state.submit(&catalog).is_err());
    assert_eq!(state.mode, AppMode::Form);
    assert!(state.status_is_error);
    assert!(state.status_message.starts_with('✗'));
    assert!(state.roadmap.is_none());
}

#[test]
fn test_generate_saves_form_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submitted.json");
    let mut app = App::new(catalog(), Some(path.clone()));

    press(&mut app, KeyCode::Char('A'));
    press(&mut app, KeyCode::Enter);

    let saved = skill_roadmap::StudentForm::load_from_file(&path).unwrap();
    assert_eq!(saved.name, "A");
    assert!(app.state().status_message.contains("saved to"));
}
