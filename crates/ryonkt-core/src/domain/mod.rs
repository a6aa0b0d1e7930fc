pub mod about;
pub mod bundle;
pub mod collaboration;
pub mod contact;
pub mod defaults;
pub mod ids;
pub mod work;
pub mod work_type;

pub use about::About;
pub use bundle::{CURRENT_SCHEMA_VERSION, ContentBundle};
pub use collaboration::Collaboration;
pub use contact::Contact;
pub use ids::WorkId;
pub use work::Work;
pub use work_type::WorkType;
