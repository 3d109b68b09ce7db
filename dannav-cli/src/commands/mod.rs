//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`decode`] - DAN to coordinate
//! - [`encode`] - Footprint or point to DAN
//! - [`format`] - Canonical DAN formatting
//! - [`init`] - Configuration initialization
//! - [`navigate`] - Replay a recorded track against a route
//! - [`states`] - State code table

pub mod common;
pub mod config;
pub mod decode;
pub mod encode;
pub mod format;
pub mod init;
pub mod navigate;
pub mod states;
