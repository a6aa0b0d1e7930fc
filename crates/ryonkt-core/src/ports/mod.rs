pub mod clock;
pub mod confirm;
pub mod key_value_store;

pub use clock::{Clock, SystemClock};
pub use confirm::Confirm;
pub use key_value_store::{KeyValueStore, StoreError};
