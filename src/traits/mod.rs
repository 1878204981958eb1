pub mod screen_source;

pub use screen_source::*;
