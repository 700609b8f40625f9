use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    println!("cargo:rustc-env=EXPENSE_LEDGER_BUILD_HASH={}", git_output(&["rev-parse", "--short", "HEAD"]));
    println!("cargo:rustc-env=EXPENSE_LEDGER_BUILD_STATUS={}", git_dirty_state());

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=EXPENSE_LEDGER_BUILD_TIMESTAMP={timestamp}");

    let target = env::var("TARGET").unwrap_or_else(|_| "unknown-target".to_string());
    println!("cargo:rustc-env=EXPENSE_LEDGER_BUILD_TARGET={target}");

    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown-profile".to_string());
    println!("cargo:rustc-env=EXPENSE_LEDGER_BUILD_PROFILE={profile}");

    println!("cargo:rustc-env=EXPENSE_LEDGER_BUILD_RUSTC={}", command_output("rustc", &["--version"]));
}

fn git_output(args: &[&str]) -> String {
    command_output("git", args)
}

fn git_dirty_state() -> &'static str {
    match run("git", &["status", "--porcelain"]) {
        Some(out) if out.trim().is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    }
}

fn command_output(program: &str, args: &[&str]) -> String {
    run(program, args)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn run(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
}
