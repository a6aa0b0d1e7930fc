//! Modelo de vista del sitio público (solo lectura).

pub mod biography;
pub mod discography;
pub mod links;
pub mod section;
pub mod view;

pub use biography::{BIOGRAPHY, Era};
pub use discography::{YearGroup, group_by_year};
pub use links::{ContactLinks, DISCOGS_PROFILE};
pub use section::{ParseSectionError, Section};
pub use view::SiteView;
