//! CLI argument parsing for GenericDev Hub.

mod args;

pub use args::{Args, CliConfig, VERSION};
