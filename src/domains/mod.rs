pub mod coverage;
pub mod logger;

pub use coverage::*;
pub use logger::*;
