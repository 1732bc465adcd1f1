//! # Workbench Core
//!
//! Core command-construction logic for the DL Workbench starter.
//!
//! This crate contains pure business logic with no I/O dependencies:
//! - Configuration model (OS, devices, start mode, proxies)
//! - Command parameters and the per-start-mode builders
//! - Command formatting and startup-guide assembly
//!
//! ## Design Principles
//!
//! - **Pure Functions**: the formatter is a deterministic, side-effect-free
//!   transform; every configuration renders without error
//! - **Dependency-Free**: no networking, persistence, or process execution
//! - **Composable**: usable from any configuration source (CLI flags,
//!   interactive prompts, tests)

pub mod command;
pub mod errors;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use command::{CommandFormatter, CommandLayout, StartupGuide};
pub use errors::{CoreError, Result};
pub use models::{CommandConfig, CommandDefaults, Device, OperatingSystem, StartMode};
pub use params::{
    CommandParameter, DockerParametersBuilder, ParametersBuilder, PythonParametersBuilder,
};
