use tasklist_core::{AddTaskError, ConfirmChoice, SequentialIds, TaskStore};

fn store() -> TaskStore {
    TaskStore::with_id_source(SequentialIds::starting_at(1_700_000_000_000))
}

#[test]
fn add_appends_in_insertion_order_with_unique_ids() {
    let mut store = store();
    let first = store.add_task("Buy milk").unwrap();
    let second = store.add_task("Walk dog").unwrap();
    let third = store.add_task("Read book").unwrap();

    let snapshot = store.snapshot();
    let ids: Vec<_> = snapshot.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![first, second, third]);
    let titles: Vec<_> = snapshot.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, vec!["Buy milk", "Walk dog", "Read book"]);
    assert!(snapshot.iter().all(|task| !task.done));
}

#[test]
fn duplicate_title_is_rejected_without_mutation() {
    let mut store = store();
    store.add_task("Buy milk").unwrap();
    let before = store.snapshot();

    let err = store.add_task("BUY MILK").unwrap_err();
    assert!(matches!(err, AddTaskError::DuplicateTitle { .. }));
    assert_eq!(store.len(), 1);
    assert!(before.same_version(&store.snapshot()));
}

#[test]
fn titles_differing_only_in_whitespace_are_distinct() {
    let mut store = store();
    store.add_task("a").unwrap();
    store.add_task("a ").unwrap();
    store.add_task("Buy milk").unwrap();
    store.add_task("Buy  milk").unwrap();
    store.add_task("Buy milk ").unwrap();

    let titles: Vec<_> = store
        .snapshot()
        .iter()
        .map(|task| task.title.clone())
        .collect();
    assert_eq!(titles, vec!["a", "a ", "Buy milk", "Buy  milk", "Buy milk "]);
}

#[test]
fn edit_stores_title_as_submitted() {
    let mut store = store();
    let id = store.add_task("Buy milk").unwrap();

    assert!(store.edit_task(id, " Buy  almond milk"));
    assert_eq!(store.get(id).unwrap().title, " Buy  almond milk");
}

#[test]
fn toggle_twice_restores_done_and_keeps_other_fields() {
    let mut store = store();
    let id = store.add_task("Buy milk").unwrap();
    let original = store.get(id).unwrap().clone();

    assert!(store.toggle_task_done(id));
    assert!(store.get(id).unwrap().done);
    assert!(store.toggle_task_done(id));
    assert_eq!(store.get(id).unwrap(), &original);
}

#[test]
fn toggle_unknown_id_is_silent_noop() {
    let mut store = store();
    store.add_task("Buy milk").unwrap();
    let before = store.snapshot();

    assert!(!store.toggle_task_done(42));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn edit_changes_only_the_target_title() {
    let mut store = store();
    let first = store.add_task("Buy milk").unwrap();
    let second = store.add_task("Walk dog").unwrap();
    store.toggle_task_done(first);
    let other_before = store.get(second).unwrap().clone();

    assert!(store.edit_task(first, "Buy almond milk"));

    let edited = store.get(first).unwrap();
    assert_eq!(edited.id, first);
    assert_eq!(edited.title, "Buy almond milk");
    assert!(edited.done);
    assert_eq!(store.get(second).unwrap(), &other_before);
}

#[test]
fn edit_unknown_id_is_silent_noop() {
    let mut store = store();
    store.add_task("Buy milk").unwrap();
    let before = store.snapshot();

    assert!(!store.edit_task(42, "anything"));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn edit_does_not_enforce_unique_titles() {
    let mut store = store();
    store.add_task("Buy milk").unwrap();
    let second = store.add_task("Walk dog").unwrap();

    assert!(store.edit_task(second, "buy milk"));
    let titles: Vec<_> = store
        .snapshot()
        .iter()
        .map(|task| task.title.to_lowercase())
        .collect();
    assert_eq!(titles, vec!["buy milk", "buy milk"]);
}

#[test]
fn remove_confirm_deletes_exactly_one_task() {
    let mut store = store();
    let first = store.add_task("Buy milk").unwrap();
    let second = store.add_task("Walk dog").unwrap();
    let third = store.add_task("Read book").unwrap();

    let pending = store.remove_task(second);
    assert_eq!(store.len(), 3);
    assert!(store.resolve_removal(pending, ConfirmChoice::Confirm));

    let ids: Vec<_> = store.snapshot().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![first, third]);
}

#[test]
fn remove_cancel_leaves_collection_unchanged() {
    let mut store = store();
    let id = store.add_task("Buy milk").unwrap();
    let before = store.snapshot();

    let pending = store.remove_task(id);
    assert!(!store.resolve_removal(pending, ConfirmChoice::Cancel));
    assert!(before.same_version(&store.snapshot()));
}

#[test]
fn readd_after_remove_moves_task_to_the_end() {
    let mut store = store();
    let first = store.add_task("Buy milk").unwrap();
    store.add_task("Walk dog").unwrap();

    let pending = store.remove_task(first);
    store.resolve_removal(pending, ConfirmChoice::Confirm);
    let readded = store.add_task("Buy milk").unwrap();

    assert_ne!(readded, first);
    assert_eq!(store.snapshot().at(1).unwrap().id, readded);
}

#[test]
fn earlier_snapshots_survive_later_mutations() {
    let mut store = store();
    let id = store.add_task("Buy milk").unwrap();
    let held = store.snapshot();

    store.toggle_task_done(id);
    store.edit_task(id, "Buy almond milk");
    store.add_task("Walk dog").unwrap();

    assert_eq!(held.len(), 1);
    let task = held.get(id).unwrap();
    assert_eq!(task.title, "Buy milk");
    assert!(!task.done);
}

#[test]
fn buy_milk_scenario() {
    let mut store = store();

    let t1 = store.add_task("Buy milk").unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(t1).unwrap().title, "Buy milk");
    assert!(!store.get(t1).unwrap().done);

    assert!(store.add_task("buy milk").is_err());
    assert_eq!(store.len(), 1);

    store.toggle_task_done(t1);
    assert!(store.get(t1).unwrap().done);

    store.edit_task(t1, "Buy almond milk");
    assert_eq!(store.get(t1).unwrap().title, "Buy almond milk");
    assert!(store.get(t1).unwrap().done);

    let pending = store.remove_task(t1);
    store.resolve_removal(pending, ConfirmChoice::Confirm);
    assert!(store.is_empty());
}
