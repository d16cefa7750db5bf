//! Version command implementation
//!
//! Displays version information in a consistent styled format.

use anyhow::Result;

use crate::cli::Output;

/// Execute the version command
pub fn execute(output: &Output) -> Result<()> {
    output.header(&format!("{} v{}", crate::PKG_NAME, crate::VERSION));

    output.key_value("Description:", crate::PKG_DESCRIPTION);
    output.key_value("Rust edition:", "2024");
    output.key_value("Target:", std::env::consts::ARCH);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
    );

    output.blank_line();
    output.success(&format!(
        "Run '{} --help' for usage information",
        crate::PKG_NAME
    ));

    Ok(())
}
