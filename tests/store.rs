use facetist::filter::SelectionStore;
use facetist::model::{Category, FilterGroup, Item};

fn directory() -> Vec<FilterGroup> {
    vec![FilterGroup::new("recipients", "Recipients").with_categories(vec![
        Category::new("school", "School").with_items(vec![Item::new("1", "North"), Item::new("2", "South")]),
        Category::new("grade", "Grade")
            .with_dependency("school", "school_id")
            .with_items(vec![
                Item::new("g1", "1st grade").with_field("school_id", "1"),
                Item::new("g2", "2nd grade").with_field("school_id", "2"),
            ]),
        Category::new("student", "Student")
            .with_dependency("grade", "grade_id")
            .with_items(vec![
                Item::new("s1", "Alice").with_field("grade_id", "g1"),
                Item::new("s2", "Bruno").with_field("grade_id", "g1"),
                Item::new("s3", "Carla").with_field("grade_id", "g2"),
            ]),
    ])]
}

#[test]
fn test_toggle_item_selects_and_deselects() {
    let mut store = SelectionStore::new(directory());

    store.toggle_item("school", "1");
    assert!(store.is_item_selected("school", "1"));

    store.toggle_item("school", "1");
    assert!(!store.is_item_selected("school", "1"));
}

#[test]
fn test_toggle_twice_restores_original_state() {
    // Toggling the same item twice is an identity on the whole store
    let mut store = SelectionStore::new(directory());
    store.toggle_item("school", "1");
    let snapshot = store.clone();

    store.toggle_item("school", "2");
    store.toggle_item("school", "2");

    assert_eq!(store, snapshot);
}

#[test]
fn test_toggle_gated_item_is_a_noop() {
    // No school selected, so no grade is visible or selectable
    let mut store = SelectionStore::new(directory());
    store.toggle_item("grade", "g1");
    assert!(!store.is_item_selected("grade", "g1"));
    assert!(!store.has_active_selection());
}

#[test]
fn test_toggle_unknown_keys_are_noops() {
    let mut store = SelectionStore::new(directory());
    let snapshot = store.clone();

    store.toggle_item("nonexistent", "1");
    store.toggle_item("school", "nonexistent");
    store.toggle_batch("nonexistent", &["1".to_string()]);

    assert_eq!(store, snapshot);
}

#[test]
fn test_deselecting_ancestor_cascades() {
    let mut store = SelectionStore::new(directory());
    store.toggle_item("school", "1");
    store.toggle_item("grade", "g1");
    store.toggle_item("student", "s1");
    store.toggle_item("student", "s2");

    // Removing the school invalidates the grade and both students
    store.toggle_item("school", "1");

    assert!(store.active_filters().is_empty());
}

#[test]
fn test_toggle_batch_selects_then_deselects_as_unit() {
    let mut store = SelectionStore::new(directory());
    store.toggle_item("school", "1");
    store.toggle_item("grade", "g1");

    let batch = vec!["s1".to_string(), "s2".to_string()];
    store.toggle_batch("student", &batch);
    assert!(store.is_batch_selected("student", &batch));

    store.toggle_batch("student", &batch);
    assert!(!store.is_item_selected("student", "s1"));
    assert!(!store.is_item_selected("student", "s2"));
}

#[test]
fn test_toggle_batch_twice_restores_original_state() {
    let mut store = SelectionStore::new(directory());
    store.toggle_item("school", "1");
    store.toggle_item("grade", "g1");
    let snapshot = store.clone();

    let batch = vec!["s1".to_string(), "s2".to_string()];
    store.toggle_batch("student", &batch);
    store.toggle_batch("student", &batch);

    assert_eq!(store, snapshot);
}

#[test]
fn test_toggle_batch_completes_a_partial_selection() {
    let mut store = SelectionStore::new(directory());
    store.toggle_item("school", "1");
    store.toggle_item("grade", "g1");
    store.toggle_item("student", "s1");

    // One id of the batch is already selected: the first call completes the
    // batch, the second drops it entirely
    let batch = vec!["s1".to_string(), "s2".to_string()];
    store.toggle_batch("student", &batch);
    assert!(store.is_batch_selected("student", &batch));
    store.toggle_batch("student", &batch);
    assert!(!store.is_item_selected("student", "s1"));
    assert!(!store.is_item_selected("student", "s2"));
}

#[test]
fn test_empty_batch_is_never_selected() {
    let mut store = SelectionStore::new(directory());
    store.toggle_item("school", "1");
    assert!(!store.is_batch_selected("student", &[]));
}

#[test]
fn test_select_all_honors_dependencies() {
    let mut store = SelectionStore::new(directory());
    store.select_all();

    // Everything with a resolvable chain ends up selected
    assert!(store.is_item_selected("school", "1"));
    assert!(store.is_item_selected("school", "2"));
    assert!(store.is_batch_selected(
        "student",
        &["s1".to_string(), "s2".to_string(), "s3".to_string()]
    ));
}

#[test]
fn test_select_all_prunes_dangling_foreign_keys() {
    let mut groups = directory();
    groups[0]
        .category_mut("student")
        .unwrap()
        .items
        .push(Item::new("s4", "Ghost").with_field("grade_id", "g9"));

    let mut store = SelectionStore::new(groups);
    store.select_all();

    assert!(!store.is_item_selected("student", "s4"));
}

#[test]
fn test_clear_all_empties_every_selection() {
    let mut store = SelectionStore::new(directory());
    store.select_all();
    store.clear_all();

    assert!(!store.has_active_selection());
    assert!(store.active_filters().is_empty());
}

#[test]
fn test_active_filters_scans_selected_categories() {
    let mut store = SelectionStore::new(directory());
    store.toggle_item("school", "2");
    store.toggle_item("grade", "g2");

    let active = store.active_filters();
    assert_eq!(active.len(), 2);
    assert_eq!(active["school"], vec!["2".to_string()]);
    assert_eq!(active["grade"], vec!["g2".to_string()]);
}

#[test]
fn test_effective_items_follow_selection() {
    let mut store = SelectionStore::new(directory());
    assert!(store.effective_items("grade").is_empty());

    store.toggle_item("school", "1");
    let grades: Vec<&str> = store.effective_items("grade").iter().map(|i| i.id.as_str()).collect();
    assert_eq!(grades, vec!["g1"]);
}

#[test]
fn test_set_groups_reestablishes_invariant() {
    // Selections arriving from outside (e.g. deserialized state) get pruned
    let mut groups = directory();
    groups[0].category_mut("grade").unwrap().selected_ids = vec!["g1".to_string()];

    let store = SelectionStore::new(groups);
    assert!(!store.is_item_selected("grade", "g1"));
}
