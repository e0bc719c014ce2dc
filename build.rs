//! Computes the `--version` label from git state: the package version on a
//! release tag, `dev@<short hash>` otherwise.

use std::process::{Command, Output};

fn git(args: &[&str]) -> Option<Output> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
}

fn version_label(short_hash: &str, tagged: bool) -> String {
    match (tagged, short_hash) {
        (true, _) => env!("CARGO_PKG_VERSION").to_owned(),
        (false, "") => "dev@unknown".to_owned(),
        (false, hash) => format!("dev@{hash}"),
    }
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let short_hash = git(&["rev-parse", "--short", "HEAD"])
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_owned())
        .unwrap_or_default();
    let tagged = git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();

    println!(
        "cargo:rustc-env=CURRICULUM_SITE_VERSION={}",
        version_label(&short_hash, tagged)
    );
}
