// Core algorithm exports
pub mod matcher;
pub mod normalize;

pub use matcher::Matcher;
pub use normalize::{to_display, to_identifier};
