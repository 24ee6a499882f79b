pub mod enums;
pub mod error;
pub mod names;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Gender, Season};
pub use error::CoreError;
pub use names::capitalize_fully;
pub use structs::{Country, GoldMedal};
