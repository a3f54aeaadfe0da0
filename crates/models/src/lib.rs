pub mod notification;

pub use notification::{Category, Notification, ParseCategoryError};
