use notifeed_models::Notification;
use serde::{Deserialize, Serialize};

use crate::projection::FeedQuery;
use crate::store::Feed;

/// Header indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BadgeView {
    pub has_unread: bool,
    pub unread_count: usize,
    pub loading: bool,
}

impl BadgeView {
    pub fn from_feed(feed: &Feed) -> Self {
        Self {
            has_unread: feed.has_unread(),
            unread_count: feed.unread_count(),
            loading: feed.loading,
        }
    }
}

/// Tabs of the compact overlay widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayTab {
    #[default]
    All,
    Unread,
    Requests,
}

impl OverlayTab {
    pub fn query(&self) -> FeedQuery {
        match self {
            OverlayTab::All => FeedQuery::default(),
            OverlayTab::Unread => FeedQuery::default().unread_only(),
            OverlayTab::Requests => FeedQuery::default().requests_only(),
        }
    }
}

/// A rendered list for the overlay or the full page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub items: Vec<Notification>,
    /// Matches before any display limit was applied.
    pub total: usize,
    pub has_unread: bool,
    pub loading: bool,
}

impl ListView {
    fn new(feed: &Feed, mut items: Vec<Notification>, limit: Option<usize>) -> Self {
        let total = items.len();
        if let Some(limit) = limit {
            items.truncate(limit);
        }
        Self {
            items,
            total,
            has_unread: feed.has_unread(),
            loading: feed.loading,
        }
    }
}

pub fn overlay_view(feed: &Feed, tab: OverlayTab, limit: usize) -> ListView {
    ListView::new(feed, tab.query().apply(&feed.entries), Some(limit))
}

pub fn page_view(feed: &Feed, query: &FeedQuery) -> ListView {
    ListView::new(feed, query.apply(&feed.entries), None)
}
