use std::env;
use std::process::Command;

fn main() {
    for var in ["TWINKLE_BUILD", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    let build_id = env::var("TWINKLE_BUILD")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(target_label);
    println!("cargo:rustc-env=TWINKLE_BUILD={}", build_id);

    let sha = git_head()
        .or_else(|| env::var("GITHUB_SHA").ok())
        .and_then(|s| short_hex(&s))
        .unwrap_or_default();
    println!("cargo:rustc-env=TWINKLE_GIT_SHA={}", sha);
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout).ok()
}

fn short_hex(s: &str) -> Option<String> {
    let s = s.trim();
    let short = s.get(..7).unwrap_or(s);
    if short.is_empty() || !short.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(short.to_ascii_lowercase())
}

fn target_label() -> String {
    let os = match env::var("CARGO_CFG_TARGET_OS").as_deref() {
        Ok("macos") => "darwin".to_string(),
        Ok(other) => other.to_string(),
        Err(_) => "unknown".to_string(),
    };
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_else(|_| "unknown".to_string());
    format!("{os}-{arch}")
}
