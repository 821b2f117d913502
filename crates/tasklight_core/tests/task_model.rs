use tasklight_core::{CategoryPreset, Task, TaskValidationError};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("write report", "work", Some(1_700_000_000_000));

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "write report");
    assert_eq!(task.category, "work");
    assert_eq!(task.deadline, Some(1_700_000_000_000));
    assert!(!task.completed);
    assert!(!task.notified);
}

#[test]
fn validate_rejects_blank_title_and_category() {
    let blank_title = Task::new("   ", "work", None);
    assert_eq!(
        blank_title.validate().unwrap_err(),
        TaskValidationError::EmptyTitle
    );

    let blank_category = Task::new("ok", " ", None);
    assert_eq!(
        blank_category.validate().unwrap_err(),
        TaskValidationError::EmptyCategory
    );

    let valid = Task::new("ok", "personal", None);
    assert!(valid.validate().is_ok());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new("ship release", "work", Some(1_700_000_360_000));
    task.completed = true;
    task.notified = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task.id.to_string());
    assert_eq!(json["title"], "ship release");
    assert_eq!(json["category"], "work");
    assert_eq!(json["deadline"], 1_700_000_360_000_i64);
    assert_eq!(json["completed"], true);
    assert_eq!(json["notified"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn missing_deadline_serializes_as_null_and_round_trips() {
    let task = Task::new("no reminder", "personal", None);

    let json = serde_json::to_value(&task).unwrap();
    assert!(json["deadline"].is_null());

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.deadline, None);
}

#[test]
fn category_preset_parse_is_case_insensitive() {
    assert_eq!(CategoryPreset::parse("Work"), Some(CategoryPreset::Work));
    assert_eq!(
        CategoryPreset::parse(" PERSONAL "),
        Some(CategoryPreset::Personal)
    );
    assert_eq!(CategoryPreset::parse("others"), Some(CategoryPreset::Others));
    assert_eq!(CategoryPreset::parse("groceries"), None);
}

#[test]
fn reminder_due_requires_pending_state_and_elapsed_deadline() {
    let mut task = Task::new("call bank", "personal", Some(1_000));

    assert!(!task.reminder_due(999));
    assert!(task.reminder_due(1_000));
    assert!(task.reminder_due(2_000));

    task.notified = true;
    assert!(!task.reminder_due(2_000));

    task.notified = false;
    task.completed = true;
    assert!(!task.reminder_due(2_000));

    let no_deadline = Task::new("someday", "personal", None);
    assert!(!no_deadline.reminder_due(i64::MAX));
}
