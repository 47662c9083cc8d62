use std::process::Command;

/// Trimmed stdout of a successful `git` invocation.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    // Release builds carry the tag; untagged checkouts fall back to the commit.
    if let Some(tag) = git(&["describe", "--tags", "--abbrev=0"]) {
        println!("cargo:rustc-env=PRICING_RELEASE_TAG={tag}");
    } else if let Some(commit) = git(&["rev-parse", "--short", "HEAD"]) {
        println!("cargo:rustc-env=PRICING_BUILD_COMMIT={commit}");
    }
}
