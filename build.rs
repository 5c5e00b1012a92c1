// SPDX-License-Identifier: GPL-3.0-only

use std::process::Command;

fn main() {
    // Re-run build script if git HEAD changes
    println!("cargo::rerun-if-changed=.git/HEAD");
    println!("cargo::rerun-if-changed=.git/refs/tags");
    println!("cargo::rerun-if-env-changed=COLLAGE_VERSION");

    // Packagers may pin the version explicitly
    let version = match std::env::var("COLLAGE_VERSION") {
        Ok(v) => v,
        Err(_) => describe_version(),
    };

    println!("cargo::rustc-env=GIT_VERSION={}", version);
}

/// Version in the form `<tag>-<hash>` for tagged commits and
/// `<tag>-dirty-<hash>` for commits past the last tag.
fn describe_version() -> String {
    let hash = git(&["rev-parse", "--short", "HEAD"]);

    let Some(described) = git(&["describe", "--tags", "--always", "--match", "v*"]) else {
        return hash.unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    };
    let described = described.strip_prefix('v').unwrap_or(&described);

    let parts: Vec<&str> = described.rsplitn(3, '-').collect();
    match parts.as_slice() {
        [hash, _commits, base] => {
            format!("{}-dirty-{}", base, hash.strip_prefix('g').unwrap_or(hash))
        }
        _ => format!(
            "{}-{}",
            described,
            hash.unwrap_or_else(|| "unknown".to_string())
        ),
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
