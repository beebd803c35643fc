pub mod command;
pub mod config;
pub mod dedup;
pub mod error;
pub mod io;
pub mod message;
pub mod paths;
pub mod progress;
pub mod roadmap;
pub mod scheduler;
pub mod store;
pub mod week;

pub use error::{GrindError, Result};
