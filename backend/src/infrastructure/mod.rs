pub mod confirm;
pub mod logging;
