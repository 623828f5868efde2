pub mod actors;
pub mod events;
pub mod planner;
pub mod ports;
pub mod sweep;
pub mod trajectory;
pub mod types;
pub mod validation;

pub use actors::*;
pub use events::*;
pub use planner::*;
pub use ports::*;
pub use sweep::*;
pub use trajectory::*;
pub use types::*;
pub use validation::*;
