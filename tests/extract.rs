use facetist::filter::SelectionStore;
use facetist::model::{Category, FilterGroup, Item};
use facetist::wizard::extract::extract_recipients;

fn student_groups() -> Vec<FilterGroup> {
    vec![
        FilterGroup::new("recipients", "Recipients").with_categories(vec![Category::new("student", "Student")
            .with_items(vec![
                Item::new("s1", "Alice").with_field("user_institution_id", "ui-1"),
                Item::new("s2", "Bruno").with_field("user_institution_id", "ui-2"),
                Item::new("s3", "Carla").with_field("user_institution_id", "ui-3"),
                Item::new("s4", "Ghost"),
            ])]),
    ]
}

#[test]
fn test_extraction_preserves_selection_order() {
    let mut store = SelectionStore::new(student_groups());
    store.toggle_item("student", "s1");
    store.toggle_item("student", "s3");

    let recipients = extract_recipients(&store, "student", "user_institution_id");

    assert_eq!(recipients.len(), 2);
    assert_eq!(recipients[0].student_id, "s1");
    assert_eq!(recipients[0].user_institution_id, "ui-1");
    assert_eq!(recipients[1].student_id, "s3");
    assert_eq!(recipients[1].user_institution_id, "ui-3");
}

#[test]
fn test_extraction_is_idempotent() {
    let mut store = SelectionStore::new(student_groups());
    store.toggle_item("student", "s3");
    store.toggle_item("student", "s1");

    let first = extract_recipients(&store, "student", "user_institution_id");
    let second = extract_recipients(&store, "student", "user_institution_id");

    assert_eq!(first, second);
    // Selection order, not item order: s3 was toggled first
    assert_eq!(first[0].student_id, "s3");
}

#[test]
fn test_extraction_skips_unresolvable_ids() {
    let mut store = SelectionStore::new(student_groups());
    store.toggle_item("student", "s1");
    // s4 has no institution field and must not yield a partial record
    store.toggle_item("student", "s4");

    let recipients = extract_recipients(&store, "student", "user_institution_id");

    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].student_id, "s1");
}

#[test]
fn test_extraction_with_unknown_leaf_is_empty() {
    let store = SelectionStore::new(student_groups());
    assert!(extract_recipients(&store, "teacher", "user_institution_id").is_empty());
}

#[test]
fn test_extraction_with_empty_selection_is_empty() {
    let store = SelectionStore::new(student_groups());
    assert!(extract_recipients(&store, "student", "user_institution_id").is_empty());
}

#[test]
fn test_extraction_requires_string_institution_ids() {
    // A numeric institution id is not silently coerced
    let groups = vec![FilterGroup::new("recipients", "Recipients").with_categories(vec![Category::new(
        "student",
        "Student",
    )
    .with_items(vec![
        Item::new("s1", "Alice").with_field("user_institution_id", 42),
    ])])];

    let mut store = SelectionStore::new(groups);
    store.toggle_item("student", "s1");

    assert!(extract_recipients(&store, "student", "user_institution_id").is_empty());
}
