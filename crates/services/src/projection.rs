//! Read-only projections over a feed snapshot.
//!
//! Every function returns a fresh `Vec` and keeps the relative order of the
//! input. Nothing here is cached; callers recompute from the current
//! snapshot each time they render.

use notifeed_models::{Category, Notification, ParseCategoryError};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, entry: &Notification) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category == *category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

pub fn filter_by_category(entries: &[Notification], filter: CategoryFilter) -> Vec<Notification> {
    retain(entries, |n| filter.matches(n))
}

pub fn filter_unread(entries: &[Notification]) -> Vec<Notification> {
    retain(entries, |n| n.unread)
}

/// Connection requests and messages, as grouped by the overlay's requests tab.
pub fn filter_by_request_grouping(entries: &[Notification]) -> Vec<Notification> {
    retain(entries, |n| n.category.is_request())
}

/// Case-insensitive substring search over `text` and `meta`.
pub fn filter_by_text(entries: &[Notification], query: &str) -> Vec<Notification> {
    match TextMatcher::new(query) {
        Some(matcher) => retain(entries, |n| matcher.matches(n)),
        None => entries.to_vec(),
    }
}

struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// None for a blank query, which matches everything.
    fn new(query: &str) -> Option<Self> {
        let needle = query.trim().to_lowercase();
        (!needle.is_empty()).then_some(Self { needle })
    }

    fn matches(&self, entry: &Notification) -> bool {
        entry.text.to_lowercase().contains(&self.needle)
            || entry
                .meta
                .as_deref()
                .is_some_and(|m| m.to_lowercase().contains(&self.needle))
    }
}

/// Filters a surface applies together. All set filters must hold (AND).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedQuery {
    pub category: CategoryFilter,
    pub unread_only: bool,
    pub requests_only: bool,
    pub q: Option<String>,
}

impl FeedQuery {
    pub fn category(mut self, filter: impl Into<CategoryFilter>) -> Self {
        self.category = filter.into();
        self
    }

    pub fn unread_only(mut self) -> Self {
        self.unread_only = true;
        self
    }

    pub fn requests_only(mut self) -> Self {
        self.requests_only = true;
        self
    }

    pub fn text(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn apply(&self, entries: &[Notification]) -> Vec<Notification> {
        let matcher = self.q.as_deref().and_then(TextMatcher::new);
        retain(entries, |n| {
            self.category.matches(n)
                && (!self.unread_only || n.unread)
                && (!self.requests_only || n.category.is_request())
                && matcher.as_ref().is_none_or(|m| m.matches(n))
        })
    }
}

fn retain(entries: &[Notification], keep: impl Fn(&Notification) -> bool) -> Vec<Notification> {
    entries.iter().filter(|n| keep(*n)).cloned().collect()
}
