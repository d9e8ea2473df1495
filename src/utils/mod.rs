//! Utility modules: data directory and logging setup.

pub mod logging;
pub mod paths;

pub use logging::init_logging;
pub use paths::{data_dir, data_path};
