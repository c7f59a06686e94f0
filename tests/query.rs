use facetist::filter::query::{read_filters, write_filters, QueryString};
use facetist::filter::{SortOrder, TableQuery};
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
    ])]
}

#[test]
fn test_parse_tolerates_messy_input() {
    let query = QueryString::parse("?a=1&&b=two%20words&c&=orphan&d=");
    assert_eq!(query.get("a"), Some("1"));
    assert_eq!(query.get("b"), Some("two words"));
    // A piece without '=' is a key with an empty value
    assert_eq!(query.get("c"), Some(""));
    // An empty key is skipped entirely
    assert_eq!(query.pairs().len(), 4);
    assert_eq!(query.get("d"), Some(""));
}

#[test]
fn test_parse_decodes_plus_and_malformed_escapes() {
    let query = QueryString::parse("q=hello+world&bad=50%zz");
    assert_eq!(query.get("q"), Some("hello world"));
    // Malformed percent-escapes decode literally instead of failing
    assert_eq!(query.get("bad"), Some("50%zz"));
}

#[test]
fn test_encode_round_trips_and_preserves_order() {
    let raw = "sortBy=name&filter_school=1,2&page=2";
    let query = QueryString::parse(raw);
    assert_eq!(query.encode(), raw);
}

#[test]
fn test_set_replaces_in_place_and_remove_drops() {
    let mut query = QueryString::parse("a=1&b=2&c=3");
    query.set("b", "20");
    assert_eq!(query.encode(), "a=1&b=20&c=3");

    query.remove("a");
    assert_eq!(query.encode(), "b=20&c=3");

    query.set("d", "4");
    assert_eq!(query.encode(), "b=20&c=3&d=4");
}

#[test]
fn test_encode_escapes_reserved_but_not_commas() {
    let mut query = QueryString::default();
    query.set("search", "math & science");
    assert_eq!(query.encode(), "search=math%20%26%20science");

    let mut query = QueryString::default();
    query.set("filter_school", "1,2");
    assert_eq!(query.encode(), "filter_school=1,2");
}

#[test]
fn test_write_filters_encodes_active_and_removes_empty() {
    let mut groups = directory();
    groups[0].category_mut("school").unwrap().selected_ids = vec!["1".to_string(), "2".to_string()];

    let mut query = QueryString::parse("sortBy=name&filter_grade=g1&page=2");
    write_filters(&mut query, &groups, "filter_", ",");

    // The empty grade selection removes its parameter, other params survive
    assert_eq!(query.encode(), "sortBy=name&page=2&filter_school=1,2");
}

#[test]
fn test_read_filters_hydrates_and_ignores_unknown() {
    let mut groups = directory();
    let query = QueryString::parse("filter_school=1&filter_grade=g1,g9&filter_unknown=7");
    read_filters(&query, &mut groups, "filter_", ",");

    assert_eq!(
        groups[0].category("school").unwrap().selected_ids,
        vec!["1".to_string()]
    );
    // g9 is not a known grade id and is dropped silently
    assert_eq!(
        groups[0].category("grade").unwrap().selected_ids,
        vec!["g1".to_string()]
    );
}

#[test]
fn test_read_filters_empty_value_yields_empty_selection() {
    let mut groups = directory();
    groups[0].category_mut("school").unwrap().selected_ids = vec!["1".to_string()];

    let query = QueryString::parse("filter_school=");
    read_filters(&query, &mut groups, "filter_", ",");

    assert!(groups[0].category("school").unwrap().selected_ids.is_empty());
}

#[test]
fn test_read_filters_prunes_dependents_of_dropped_ancestors() {
    let mut groups = directory();
    // grade g1 belongs to school 1, but the query only selects school 2
    let query = QueryString::parse("filter_school=2&filter_grade=g1");
    read_filters(&query, &mut groups, "filter_", ",");

    assert!(groups[0].category("grade").unwrap().selected_ids.is_empty());
}

#[test]
fn test_filter_round_trip_reproduces_active_state() {
    let mut groups = directory();
    groups[0].category_mut("school").unwrap().selected_ids = vec!["1".to_string()];
    groups[0].category_mut("grade").unwrap().selected_ids = vec!["g1".to_string()];

    let mut query = QueryString::default();
    write_filters(&mut query, &groups, "filter_", ",");

    let mut rehydrated = directory();
    read_filters(&query, &mut rehydrated, "filter_", ",");

    assert_eq!(groups, rehydrated);
}

#[test]
fn test_table_query_reads_typed_parameters() {
    let query = QueryString::parse("page=3&perPage=25&sortBy=name&sortOrder=desc&search=alice");
    let table = TableQuery::read(&query);

    assert_eq!(table.page, Some(3));
    assert_eq!(table.per_page, Some(25));
    assert_eq!(table.sort_by.as_deref(), Some("name"));
    assert_eq!(table.sort_order, Some(SortOrder::Desc));
    assert_eq!(table.search.as_deref(), Some("alice"));
}

#[test]
fn test_table_query_treats_garbage_as_absent() {
    let query = QueryString::parse("page=abc&sortOrder=sideways&search=");
    let table = TableQuery::read(&query);

    assert_eq!(table.page, None);
    assert_eq!(table.sort_order, None);
    assert_eq!(table.search, None);
}

#[test]
fn test_table_query_write_leaves_filters_alone() {
    let mut query = QueryString::parse("filter_school=1&page=9");
    let table = TableQuery {
        page: Some(1),
        per_page: None,
        sort_by: Some("name".to_string()),
        sort_order: Some(SortOrder::Asc),
        search: None,
    };
    table.write(&mut query);

    assert_eq!(query.get("filter_school"), Some("1"));
    assert_eq!(query.get("page"), Some("1"));
    assert_eq!(query.get("sortBy"), Some("name"));
    assert_eq!(query.get("sortOrder"), Some("asc"));
    assert!(!query.contains("search"));
}
