use crate::fixtures::seed::{ids, mixed_feed};
use notifeed_models::Category;
use notifeed_services::projection::{
    filter_by_category, filter_by_request_grouping, filter_by_text, filter_unread,
};
use notifeed_services::{CategoryFilter, FeedQuery};

#[test]
fn category_filter_keeps_matching_entries_in_order() {
    let feed = mixed_feed();

    let messages = filter_by_category(&feed, CategoryFilter::Only(Category::Message));
    assert_eq!(ids(&messages), vec![10, 16]);

    let payments = filter_by_category(&feed, Category::Payment.into());
    assert_eq!(ids(&payments), vec![14]);
}

#[test]
fn category_all_returns_everything() {
    let feed = mixed_feed();
    let all: CategoryFilter = "all".parse().unwrap();

    assert_eq!(all, CategoryFilter::All);
    assert_eq!(filter_by_category(&feed, all), feed);
}

#[test]
fn category_filter_parses_names_and_rejects_unknown() {
    assert_eq!(
        "Proposal".parse::<CategoryFilter>().unwrap(),
        CategoryFilter::Only(Category::Proposal)
    );
    assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert!("invoice".parse::<CategoryFilter>().is_err());
}

#[test]
fn unread_filter() {
    let feed = mixed_feed();
    assert_eq!(ids(&filter_unread(&feed)), vec![10, 11, 13, 15]);
}

#[test]
fn request_grouping_is_connections_and_messages() {
    let feed = mixed_feed();
    assert_eq!(ids(&filter_by_request_grouping(&feed)), vec![10, 12, 16]);
}

#[test]
fn text_filter_is_case_insensitive_over_text_and_meta() {
    let feed = mixed_feed();

    // 10 has it in meta, 14 in lowercase meta
    assert_eq!(ids(&filter_by_text(&feed, "BRAND")), vec![10, 14]);
    // 14 matches on text, 13 only on meta
    assert_eq!(ids(&filter_by_text(&feed, "payment")), vec![13, 14]);
    assert!(filter_by_text(&feed, "nothing like this").is_empty());
}

#[test]
fn blank_text_query_returns_everything() {
    let feed = mixed_feed();

    assert_eq!(filter_by_text(&feed, ""), feed);
    assert_eq!(filter_by_text(&feed, "   "), feed);
}

#[test]
fn composed_filters_are_a_logical_and() {
    let feed = mixed_feed();

    let query = FeedQuery::default().category(Category::Message).text("message");
    assert_eq!(ids(&query.apply(&feed)), vec![10, 16]);

    let query = FeedQuery::default()
        .category(Category::Message)
        .text("message")
        .unread_only();
    assert_eq!(ids(&query.apply(&feed)), vec![10]);

    let query = FeedQuery::default().requests_only().unread_only();
    assert_eq!(ids(&query.apply(&feed)), vec![10]);
}

#[test]
fn composition_matches_sequential_filters_and_keeps_order() {
    let feed = mixed_feed();
    let query = FeedQuery::default().unread_only().text("p");

    let sequential = filter_by_text(&filter_unread(&feed), "p");
    let composed = query.apply(&feed);
    assert_eq!(composed, sequential);

    let positions: Vec<usize> = composed
        .iter()
        .map(|n| feed.iter().position(|f| f.id == n.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn projections_do_not_touch_the_snapshot() {
    let feed = mixed_feed();
    let before = feed.clone();

    let _ = FeedQuery::default().unread_only().apply(&feed);
    let _ = filter_by_request_grouping(&feed);

    assert_eq!(feed, before);
}

#[test]
fn feed_query_deserializes_from_parameters() {
    let query: FeedQuery = serde_json::from_value(serde_json::json!({
        "category": "connection",
        "q": "marcus",
    }))
    .unwrap();

    assert_eq!(query.category, CategoryFilter::Only(Category::Connection));
    assert!(!query.unread_only);
    assert_eq!(ids(&query.apply(&mixed_feed())), vec![12]);

    let all: FeedQuery = serde_json::from_value(serde_json::json!({ "category": "all" })).unwrap();
    assert_eq!(all.category, CategoryFilter::All);

    let bad = serde_json::from_value::<FeedQuery>(serde_json::json!({ "category": "spam" }));
    assert!(bad.is_err());
}
