use std::env;
use std::process::Command;

const ENV_PREFIX: &str = "FORM_SESSION_BUILD";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let git_status = capture("git", &["status", "--porcelain"])
        .map(|out| if out.is_empty() { "clean" } else { "dirty" })
        .unwrap_or("unknown")
        .to_string();

    let entries = [
        (
            "HASH",
            capture("git", &["rev-parse", "--short", "HEAD"]).filter(|hash| !hash.is_empty()),
        ),
        ("STATUS", Some(git_status)),
        (
            "TIMESTAMP",
            Some(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
        ),
        ("TARGET", env::var("TARGET").ok()),
        ("PROFILE", env::var("PROFILE").ok()),
        ("RUSTC", capture("rustc", &["--version"])),
    ];

    for (key, value) in entries {
        let value = value.unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env={ENV_PREFIX}_{key}={value}");
    }
}

/// Runs a command and returns its trimmed stdout when it exits successfully.
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
