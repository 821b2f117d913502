use std::cell::RefCell;
use std::rc::Rc;
use tasklight_core::db::open_db_in_memory;
use tasklight_core::{Notifier, NotifyError, Sweeper, TaskFields, TaskStore, SWEEP_INTERVAL};

#[derive(Default)]
struct RecordingNotifier {
    calls: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    fn handle(&self) -> Rc<RefCell<Vec<(String, String)>>> {
        Rc::clone(&self.calls)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        self.calls
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}

struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(&self, _title: &str, _body: &str) -> Result<(), NotifyError> {
        Err(NotifyError::ChannelUnavailable(
            "permission revoked".to_string(),
        ))
    }
}

fn store() -> TaskStore {
    TaskStore::load(open_db_in_memory().unwrap()).unwrap()
}

fn fields(title: &str, deadline: Option<i64>) -> TaskFields {
    TaskFields {
        title: title.to_string(),
        category: "work".to_string(),
        deadline,
    }
}

#[test]
fn due_task_fires_exactly_once_with_reminder_body() {
    let mut store = store();
    let id = store.add(fields("submit form", Some(1_000))).unwrap();

    let primary = RecordingNotifier::default();
    let calls = primary.handle();
    let sweeper = Sweeper::new(primary, RecordingNotifier::default());

    let report = sweeper.tick(&mut store, 1_000).unwrap();
    assert_eq!(report.fired, vec![id]);
    assert_eq!(report.fallbacks, 0);
    assert!(store.get(id).unwrap().notified);

    let recorded = calls.borrow();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "Task Reminder");
    assert_eq!(recorded[0].1, "Time to: submit form");
}

#[test]
fn repeated_ticks_never_refire_a_notified_task() {
    let mut store = store();
    store.add(fields("submit form", Some(1_000))).unwrap();

    let primary = RecordingNotifier::default();
    let calls = primary.handle();
    let sweeper = Sweeper::new(primary, RecordingNotifier::default());

    sweeper.tick(&mut store, 1_000).unwrap();
    let second = sweeper.tick(&mut store, 2_000).unwrap();
    let third = sweeper.tick(&mut store, 100_000).unwrap();

    assert!(second.fired.is_empty());
    assert!(third.fired.is_empty());
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn future_deadlines_completed_tasks_and_no_deadline_are_skipped() {
    let mut store = store();
    store.add(fields("future", Some(10_000))).unwrap();
    let done = store.add(fields("already done", Some(1_000))).unwrap();
    store.set_completed(done, true).unwrap();
    store.add(fields("no deadline", None)).unwrap();

    let primary = RecordingNotifier::default();
    let calls = primary.handle();
    let sweeper = Sweeper::new(primary, RecordingNotifier::default());

    let report = sweeper.tick(&mut store, 5_000).unwrap();
    assert!(report.fired.is_empty());
    assert!(calls.borrow().is_empty());
    assert!(!store.get(done).unwrap().notified);
}

#[test]
fn editing_a_notified_task_rearms_even_for_a_past_deadline() {
    let mut store = store();
    let id = store.add(fields("pay rent", Some(1_000))).unwrap();

    let primary = RecordingNotifier::default();
    let calls = primary.handle();
    let sweeper = Sweeper::new(primary, RecordingNotifier::default());

    sweeper.tick(&mut store, 1_000).unwrap();
    assert_eq!(calls.borrow().len(), 1);

    // Edit keeps the past deadline; the very next tick fires again.
    store.replace(id, fields("pay rent (urgent)", Some(1_000))).unwrap();
    assert!(!store.get(id).unwrap().notified);

    let report = sweeper.tick(&mut store, 2_000).unwrap();
    assert_eq!(report.fired, vec![id]);
    assert_eq!(calls.borrow().len(), 2);
    assert_eq!(calls.borrow()[1].1, "Time to: pay rent (urgent)");
}

#[test]
fn primary_failure_degrades_to_fallback_and_sweeps_the_whole_list() {
    let mut store = store();
    let first = store.add(fields("first due", Some(1_000))).unwrap();
    let second = store.add(fields("second due", Some(1_500))).unwrap();

    let fallback = RecordingNotifier::default();
    let fallback_calls = fallback.handle();
    let sweeper = Sweeper::new(FailingNotifier, fallback);

    let report = sweeper.tick(&mut store, 2_000).unwrap();
    assert_eq!(report.fired, vec![first, second]);
    assert_eq!(report.fallbacks, 2);
    assert_eq!(report.undelivered, 0);

    // Both tasks are marked notified despite the broken primary channel.
    assert!(store.get(first).unwrap().notified);
    assert!(store.get(second).unwrap().notified);
    assert_eq!(fallback_calls.borrow().len(), 2);
}

#[test]
fn both_channels_failing_still_marks_notified_and_continues() {
    let mut store = store();
    let id = store.add(fields("unreachable", Some(1_000))).unwrap();
    let other = store.add(fields("also due", Some(1_000))).unwrap();

    let sweeper = Sweeper::new(FailingNotifier, FailingNotifier);

    let report = sweeper.tick(&mut store, 1_000).unwrap();
    assert_eq!(report.fired, vec![id, other]);
    assert_eq!(report.undelivered, 2);
    assert!(store.get(id).unwrap().notified);
    assert!(store.get(other).unwrap().notified);
}

#[test]
fn sweep_interval_is_thirty_seconds() {
    assert_eq!(SWEEP_INTERVAL.as_secs(), 30);
}
