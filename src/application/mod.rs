pub mod trajectory_service;

pub use trajectory_service::*;
