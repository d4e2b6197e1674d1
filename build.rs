//! Embeds the git commit and build time shown by `parrot --version`.
//!
//! Dependency-free on purpose; when git or date tooling is missing the
//! metadata degrades to "unknown" rather than failing the build.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    let commit = capture("git", &["rev-parse", "--short=12", "HEAD"]);
    let built = capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]);

    println!("cargo:rustc-env=PARROT_BUILD_GIT_HASH={commit}");
    println!("cargo:rustc-env=PARROT_BUILD_TIMESTAMP={built}");
}

fn capture(program: &str, args: &[&str]) -> String {
    let out = Command::new(program).args(args).output();
    let text = match out {
        Ok(out) if out.status.success() => String::from_utf8(out.stdout).unwrap_or_default(),
        _ => String::new(),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "unknown".to_string()
    } else {
        trimmed.to_string()
    }
}
