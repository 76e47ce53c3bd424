//! Application-level utilities for the Daybook CLI.
//!
//! This module provides:
//! - Path resolution for the config file and database
//! - A context that opens stores and builds the advice client on demand

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_data_path};
