//! Command implementations for the Substrscan CLI
//!
//! This module contains the actual implementations for each CLI command.
//! Each command is organized into its own module for better
//! maintainability.

pub mod scan;
pub mod version;
