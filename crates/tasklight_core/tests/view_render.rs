use tasklight_core::view::render::format_deadline;
use tasklight_core::{filter_tasks, format_task_line, progress, Task};

#[test]
fn progress_is_zero_for_empty_list() {
    let report = progress(&[]);
    assert_eq!(report.percent(), 0);
    assert_eq!(report.summary(), "0% Complete (0/0 tasks)");
}

#[test]
fn progress_is_full_when_everything_is_done() {
    let mut task = Task::new("done", "work", None);
    task.completed = true;

    let report = progress(&[task]);
    assert_eq!(report.percent(), 100);
    assert_eq!(report.summary(), "100% Complete (1/1 tasks)");
}

#[test]
fn progress_rounds_half_split_to_fifty() {
    let mut done = Task::new("done", "work", None);
    done.completed = true;
    let open = Task::new("open", "work", None);

    let report = progress(&[done, open]);
    assert_eq!(report.percent(), 50);
    assert_eq!(report.summary(), "50% Complete (1/2 tasks)");
}

#[test]
fn filter_is_case_insensitive_over_title_and_category() {
    let tasks = vec![
        Task::new("Quarterly numbers", "Work", None),
        Task::new("water plants", "home", None),
        Task::new("Workshop prep", "personal", None),
    ];

    // Category match regardless of title.
    let by_category = filter_tasks(&tasks, "WORK");
    assert_eq!(by_category.len(), 2);
    assert_eq!(by_category[0].title, "Quarterly numbers");
    assert_eq!(by_category[1].title, "Workshop prep");

    let by_title = filter_tasks(&tasks, "PLANTS");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "water plants");
}

#[test]
fn empty_filter_matches_everything_in_order() {
    let tasks = vec![
        Task::new("a", "work", None),
        Task::new("b", "personal", None),
    ];

    let shown = filter_tasks(&tasks, "");
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0].title, "a");
    assert_eq!(shown[1].title, "b");
}

#[test]
fn task_line_reflects_completion_and_deadline() {
    let mut task = Task::new("review draft", "work", Some(1_700_000_000_000));
    let line = format_task_line(&task);
    assert!(line.starts_with("[ ]"));
    assert!(line.contains("review draft"));
    assert!(line.contains("#work"));
    assert!(line.contains(&format!("Due: {}", format_deadline(1_700_000_000_000))));

    task.completed = true;
    task.deadline = None;
    let completed_line = format_task_line(&task);
    assert!(completed_line.starts_with("[x]"));
    assert!(!completed_line.contains("Due:"));
}
