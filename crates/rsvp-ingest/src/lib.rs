pub mod csv;
pub mod error;
pub mod json;

pub use csv::parse_csv;
pub use error::{Result, RosterError};
pub use json::parse_json;
