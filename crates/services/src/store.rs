use notifeed_models::Notification;
use serde::Serialize;
use std::collections::HashSet;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::{FeedError, FeedResult};
use crate::surface::BadgeView;

/// A consistent view of the store: the ordered entries plus the loading flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feed {
    pub entries: Vec<Notification>,
    pub loading: bool,
}

impl Feed {
    fn pending() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
        }
    }

    /// Derived from the entries on every call, never stored.
    pub fn has_unread(&self) -> bool {
        self.entries.iter().any(|n| n.unread)
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| n.unread).count()
    }
}

/// Single source of truth for the notification feed of one session.
///
/// Shared by every surface through an `Arc`. All writes go through the
/// mutation methods below; each one is applied as a single closure on the
/// underlying watch channel, so readers never see a half-applied change and
/// subscribers are woken only when something actually changed.
pub struct NotificationStore {
    feed: watch::Sender<Feed>,
}

impl NotificationStore {
    pub fn new() -> Self {
        let (feed, _) = watch::channel(Feed::pending());
        Self { feed }
    }

    /// Current entries in insertion order.
    pub fn get_all(&self) -> Vec<Notification> {
        self.feed.borrow().entries.clone()
    }

    pub fn has_unread(&self) -> bool {
        self.feed.borrow().has_unread()
    }

    pub fn unread_count(&self) -> usize {
        self.feed.borrow().unread_count()
    }

    /// True until the first delivery has been applied.
    pub fn is_loading(&self) -> bool {
        self.feed.borrow().loading
    }

    pub fn snapshot(&self) -> Feed {
        self.feed.borrow().clone()
    }

    /// Receiver that is notified after every effective mutation.
    pub fn subscribe(&self) -> watch::Receiver<Feed> {
        self.feed.subscribe()
    }

    /// Applies one mutation atomically. The returned badge describes the
    /// feed exactly as this mutation left it.
    pub fn apply(&self, mutation: Mutation) -> FeedResult<MutationOutcome> {
        let kind = mutation.kind();
        let mut outcome = Ok(MutationOutcome::default());
        self.feed.send_if_modified(|feed| {
            let applied = mutation.apply_to(feed);
            let modified = matches!(&applied, Ok(changed) if *changed > 0);
            outcome = applied.map(|changed| MutationOutcome {
                changed,
                badge: BadgeView::from_feed(feed),
            });
            modified
        });

        match &outcome {
            Ok(o) => debug!(kind, changed = o.changed, "Mutation applied"),
            Err(e) => warn!(kind, error = %e, "Mutation rejected"),
        }
        outcome
    }

    /// Marks one entry read. Unknown or already-read ids are a no-op.
    /// Returns whether the collection changed.
    pub fn mark_as_read(&self, id: u64) -> bool {
        self.apply(Mutation::MarkAsRead(id))
            .is_ok_and(|o| o.changed > 0)
    }

    /// Marks every entry read. Returns how many entries changed.
    pub fn mark_all_as_read(&self) -> usize {
        self.apply(Mutation::MarkAllAsRead)
            .map_or(0, |o| o.changed)
    }

    /// Removes every entry. Returns how many entries were removed.
    pub fn clear_all(&self) -> usize {
        self.apply(Mutation::ClearAll).map_or(0, |o| o.changed)
    }

    /// Overwrites the collection with `entries`, keeping their order, and
    /// ends the loading state. Rejected input leaves the store untouched.
    pub fn replace_all(&self, entries: Vec<Notification>) -> FeedResult<()> {
        if let Err(e) = validate(&entries, &[]) {
            warn!(error = %e, "Rejected notification delivery");
            return Err(e);
        }

        let count = entries.len();
        self.feed.send_modify(|feed| {
            feed.entries = entries;
            feed.loading = false;
        });
        info!(count, "Notification feed replaced");
        Ok(())
    }

    /// Adds `entries` after the existing ones. Only allowed once the initial
    /// delivery has landed; ids already in the store are rejected and
    /// nothing is applied.
    pub fn append(&self, entries: Vec<Notification>) -> FeedResult<()> {
        self.apply(Mutation::Append(entries)).map(|_| ())
    }
}

/// The write operations surfaces may request.
#[derive(Debug, Clone)]
pub enum Mutation {
    MarkAsRead(u64),
    MarkAllAsRead,
    ClearAll,
    Append(Vec<Notification>),
}

impl Mutation {
    fn kind(&self) -> &'static str {
        match self {
            Mutation::MarkAsRead(_) => "mark_as_read",
            Mutation::MarkAllAsRead => "mark_all_as_read",
            Mutation::ClearAll => "clear_all",
            Mutation::Append(_) => "append",
        }
    }

    /// Returns how many entries changed.
    fn apply_to(self, feed: &mut Feed) -> FeedResult<usize> {
        match self {
            Mutation::MarkAsRead(id) => match feed.entries.iter_mut().find(|n| n.id == id) {
                Some(entry) if entry.unread => {
                    entry.unread = false;
                    Ok(1)
                }
                _ => Ok(0),
            },
            Mutation::MarkAllAsRead => {
                let mut marked = 0;
                for entry in feed.entries.iter_mut().filter(|n| n.unread) {
                    entry.unread = false;
                    marked += 1;
                }
                Ok(marked)
            }
            Mutation::ClearAll => {
                let removed = feed.entries.len();
                feed.entries.clear();
                Ok(removed)
            }
            Mutation::Append(entries) => {
                // The initial delivery replaces the whole collection
                if feed.loading {
                    return Err(FeedError::NotReady);
                }
                validate(&entries, &feed.entries)?;
                let added = entries.len();
                feed.entries.extend(entries);
                Ok(added)
            }
        }
    }
}

/// Result of [`NotificationStore::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MutationOutcome {
    /// Entries affected by the mutation.
    pub changed: usize,
    pub badge: BadgeView,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(incoming: &[Notification], existing: &[Notification]) -> FeedResult<()> {
    let mut seen: HashSet<u64> = existing.iter().map(|n| n.id).collect();
    for entry in incoming {
        if entry.text.trim().is_empty() {
            return Err(FeedError::EmptyText(entry.id));
        }
        if !seen.insert(entry.id) {
            return Err(FeedError::DuplicateId(entry.id));
        }
    }
    Ok(())
}
