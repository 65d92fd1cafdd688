//! Sightline command-line front end.
//!
//! Parses go-style single-dash flags, selects one detection feature, sends
//! the images as one batch and renders the per-image results as JSON.

pub mod app;
pub mod cli;
pub mod logging;

pub use app::{build_client, execute, render, run, CliError, Stage};
pub use cli::{normalize_args, Cli, FeatureFlags};
