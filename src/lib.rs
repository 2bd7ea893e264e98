//! GenericDev Hub: a read-only terminal browser over three reference
//! catalogs for generic drug development, backed by a Supabase project.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod theme;
pub mod ui;
pub mod utils;
pub mod view;
