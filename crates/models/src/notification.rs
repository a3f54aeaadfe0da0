use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One event in the user's feed. Only `unread` ever changes after delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub category: Category,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    /// Display-ready relative time ("2 mins ago"). Never parsed.
    pub timestamp_label: String,
    #[serde(default = "default_unread")]
    pub unread: bool,
}

fn default_unread() -> bool {
    true
}

impl Notification {
    pub fn new(
        id: u64,
        category: Category,
        text: impl Into<String>,
        timestamp_label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            text: text.into(),
            meta: None,
            timestamp_label: timestamp_label.into(),
            unread: true,
        }
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn read(mut self) -> Self {
        self.unread = false;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Message,
    Job,
    Proposal,
    Connection,
    Payment,
    Upgrade,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Message,
        Category::Job,
        Category::Proposal,
        Category::Connection,
        Category::Payment,
        Category::Upgrade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Message => "message",
            Category::Job => "job",
            Category::Proposal => "proposal",
            Category::Connection => "connection",
            Category::Payment => "payment",
            Category::Upgrade => "upgrade",
        }
    }

    /// Categories grouped under the "requests" tab. A display grouping only.
    pub fn is_request(&self) -> bool {
        matches!(self, Category::Connection | Category::Message)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown notification category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
