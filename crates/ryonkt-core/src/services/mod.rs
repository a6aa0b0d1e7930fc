pub mod dashboard;
pub mod edit_session;
pub mod persistence;

#[cfg(test)]
pub(crate) mod test_support;

pub use dashboard::Dashboard;
pub use edit_session::{EditSession, EditTarget};
pub use persistence::{ContentPersistence, CorruptPolicy, DEFAULT_CONTENT_KEY, LoadOutcome};
