use notifeed_models::{Category, Notification};

/// Feed delivered when no seed file is configured. Newest first.
pub fn demo_feed() -> Vec<Notification> {
    vec![
        Notification::new(1, Category::Message, "Sarah Chen sent you a message", "2 mins ago")
            .with_meta("Brand Refresh"),
        Notification::new(2, Category::Job, "New job matches your skills: Senior Rust Engineer", "15 mins ago"),
        Notification::new(3, Category::Proposal, "Your proposal was viewed by Acme Corp", "1 hour ago")
            .with_meta("Payments API"),
        Notification::new(4, Category::Connection, "Marcus Lee wants to connect", "3 hours ago"),
        Notification::new(5, Category::Payment, "Payment of $1,250.00 received", "Yesterday")
            .with_meta("Brand Refresh")
            .read(),
        Notification::new(6, Category::Message, "David Park replied to your message", "Yesterday")
            .with_meta("Mobile App Audit")
            .read(),
        Notification::new(7, Category::Upgrade, "Upgrade to Pro to unlock unlimited proposals", "2 days ago")
            .read(),
        Notification::new(8, Category::Job, "A job you saved is closing soon", "3 days ago")
            .with_meta("Data Pipeline Migration")
            .read(),
    ]
}
