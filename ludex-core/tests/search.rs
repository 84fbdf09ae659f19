use std::collections::BTreeSet;

use ludex_core::{
    AppId, GameCatalog, GameRecord, NAME_NOT_FOUND, SearchQuery, intersect_adjacent,
    intersect_smallest_first,
};

fn record(id: u32, name: &str, date: &str, dev: &str, publisher: &str, tags: &str, reviews: &str) -> GameRecord {
    GameRecord::from_fields(vec![
        id.to_string(),
        name.to_string(),
        date.to_string(),
        dev.to_string(),
        publisher.to_string(),
        tags.to_string(),
        reviews.to_string(),
    ])
    .unwrap()
}

fn setup_catalog() -> GameCatalog {
    GameCatalog::new(vec![
        record(620, "Portal 2", "2011-4-18", "Valve", "Valve", "Puzzle;Co-op", "138220"),
        record(220, "Half-Life 2", "2004-11-16", "Valve", "Valve", "FPS;Action", "67902"),
        record(105600, "Terraria", "2011-5-16", "Re-Logic", "Re-Logic", "Sandbox;Adventure", "12345"),
        record(413150, "Stardew Valley", "2016-2-26", "ConcernedApe", "ConcernedApe", "Farming Sim;Indie", "289000"),
        record(242760, "The Forest", "2018-4-30", "Endnight Games Ltd", "Endnight Games Ltd", "Survival;Adventure", "99000"),
    ])
}

fn ids(set: &BTreeSet<AppId>) -> Vec<AppId> {
    set.iter().copied().collect()
}

#[test]
fn developer_search_returns_exactly_that_developers_games() {
    let catalog = setup_catalog();
    assert_eq!(ids(&catalog.search_by_developer("Valve")), vec![220, 620]);
    assert!(catalog.search_by_developer("valve").is_empty()); // exact-key, no folding
}

#[test]
fn date_range_spans_inclusive_snapped_bounds() {
    let catalog = setup_catalog();
    // 2011-1-1 snaps forward to Portal 2's date, 2016-12-31 back to Stardew's.
    let result = catalog.search_by_date("2011-1-1", "2016-12-31");
    assert_eq!(ids(&result), vec![620, 105600, 413150]);
}

#[test]
fn date_range_with_garbage_begin_uses_catalog_minimum() {
    let catalog = setup_catalog();
    let result = catalog.search_by_date("not a date", "2011-12-31");
    assert_eq!(ids(&result), vec![220, 620, 105600]);
}

#[test]
fn review_threshold_rounds_up_then_takes_upward_closure() {
    let catalog = setup_catalog();
    // Nothing has exactly 70000 reviews; behaves like the next count up.
    assert_eq!(
        catalog.search_by_min_reviews("70000"),
        catalog.search_by_min_reviews("99000")
    );
    assert_eq!(ids(&catalog.search_by_min_reviews("70000")), vec![620, 242760, 413150]);
}

#[test]
fn combined_terms_intersect() {
    let catalog = setup_catalog();
    let query = SearchQuery {
        developer: Some("Valve".to_string()),
        genre: Some("Puzzle".to_string()),
        ..Default::default()
    };
    assert_eq!(catalog.combine_and_resolve(&query), vec!["Portal 2"]);
}

#[test]
fn combined_terms_with_date_and_reviews() {
    let catalog = setup_catalog();
    let query = SearchQuery {
        date_range: Some(("2011-1-1".to_string(), String::new())),
        min_reviews: Some("100000".to_string()),
        ..Default::default()
    };
    assert_eq!(
        catalog.combine_and_resolve(&query),
        vec!["Portal 2", "Stardew Valley"]
    );
}

#[test]
fn merge_variants_agree_on_real_facet_outputs() {
    let catalog = setup_catalog();
    let sets = vec![
        catalog.search_by_date("2004-1-1", "2018-12-31"),
        catalog.search_by_genre("Adventure"),
        catalog.search_by_min_reviews("10000"),
    ];
    assert_eq!(
        intersect_adjacent(sets.clone()),
        intersect_smallest_first(sets.clone())
    );
    assert_eq!(ids(&intersect_adjacent(sets)), vec![105600, 242760]);
}

#[test]
fn unknown_id_resolves_to_sentinel_without_aborting_batch() {
    let catalog = setup_catalog();
    let resolved: Vec<&str> = [620u32, 999999, 220]
        .iter()
        .map(|&id| catalog.resolve_name(id))
        .collect();
    assert_eq!(resolved, vec!["Portal 2", NAME_NOT_FOUND, "Half-Life 2"]);
}

#[test]
fn term_browsing_lists_first_seen_order() {
    let catalog = setup_catalog();
    assert_eq!(
        catalog.developer_names(),
        ["Valve", "Re-Logic", "ConcernedApe", "Endnight Games Ltd"]
    );
    assert_eq!(catalog.genre_names()[0], "Puzzle");
    let (min, max) = catalog.date_bounds().unwrap();
    assert_eq!(min.to_string(), "2004-11-16");
    assert_eq!(max.to_string(), "2018-4-30");
}
