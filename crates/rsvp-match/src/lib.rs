pub mod matcher;
pub mod normalize;

pub use matcher::{MAX_EDIT_DISTANCE, resolve};
pub use normalize::normalize;
