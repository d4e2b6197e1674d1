//! Compile-time build metadata exposed on CLI version surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("PARROT_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("PARROT_BUILD_TIMESTAMP");

/// Help trailer block surfacing build metadata in `parrot --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("PARROT_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("PARROT_BUILD_TIMESTAMP")
);

/// Render the CLI version block used by `parrot --version`.
pub fn cli_version_text() -> String {
    format!("parrot {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_version_text_includes_expected_lines() {
        let text = cli_version_text();
        assert!(text.starts_with("parrot "));
        assert!(text.contains("commit:"));
        assert!(text.contains("built:"));
    }
}
