pub mod coordinates;
pub mod resolution;

pub use coordinates::*;
pub use resolution::*;
