pub mod domain;
pub mod errors;
pub mod ports;
pub mod route;
pub mod services;
pub mod site;

pub use errors::CoreError;
pub use route::Route;
