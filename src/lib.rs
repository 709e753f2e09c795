pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::ConsoleSink;
pub use app::demos::build_demos;
pub use config::DemoConfig;
pub use core::sequence::DemoSequence;
pub use utils::error::{DemoError, Result};
