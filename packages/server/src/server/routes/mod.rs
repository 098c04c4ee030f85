// HTTP routes
pub mod health;
pub mod maps;

pub use health::*;
pub use maps::*;
