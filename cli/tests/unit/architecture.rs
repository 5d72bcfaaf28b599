//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that the layer boundaries hold:
//! domain stays pure, application depends only on domain, and processes
//! are only spawned from infra.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and strip comment lines to avoid false positives.
fn read_non_comment_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// Report every line under `dir` containing one of `forbidden`.
fn scan(dir: &Path, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(dir) {
        let rel = file
            .strip_prefix(env!("CARGO_MANIFEST_DIR"))
            .unwrap_or(&file)
            .display()
            .to_string();
        for (i, line) in read_non_comment_lines(&file).iter().enumerate() {
            for needle in forbidden {
                if line.contains(needle) {
                    violations.push(format!("{rel}:{}: `{needle}`: {line}", i + 1));
                }
            }
        }
    }
    violations
}

#[test]
fn domain_has_no_io_or_outer_layer_imports() {
    let violations = scan(
        &src_dir().join("domain"),
        &[
            "crate::infra",
            "crate::application",
            "crate::commands",
            "crate::output",
            "tokio",
            "std::process",
            "std::fs",
            "std::net",
        ],
    );
    assert!(
        violations.is_empty(),
        "domain/ must stay pure:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_depends_only_on_domain() {
    let violations = scan(
        &src_dir().join("application"),
        &["crate::infra", "crate::commands", "crate::output", "crate::cli"],
    );
    assert!(
        violations.is_empty(),
        "application/ may only import crate::domain:\n{}",
        violations.join("\n")
    );
}

#[test]
fn processes_are_spawned_only_in_infra() {
    let mut violations = Vec::new();
    for file in collect_rs_files(&src_dir()) {
        let rel = file.to_string_lossy().replace('\\', "/");
        if rel.contains("/infra/") {
            continue;
        }
        for (i, line) in read_non_comment_lines(&file).iter().enumerate() {
            if line.contains("process::Command::new") || line.contains("Command::new(") {
                violations.push(format!("{rel}:{}: {line}", i + 1));
            }
        }
    }
    assert!(
        violations.is_empty(),
        "spawn processes through a CommandRunner in infra/:\n{}",
        violations.join("\n")
    );
}

#[test]
fn tokio_command_runner_constructed_only_in_infra_or_app() {
    let mut violations = Vec::new();
    for file in collect_rs_files(&src_dir()) {
        let rel = file.to_string_lossy().replace('\\', "/");
        if rel.contains("/infra/") || rel.ends_with("app.rs") {
            continue;
        }
        for (i, line) in read_non_comment_lines(&file).iter().enumerate() {
            if line.contains("TokioCommandRunner::") {
                violations.push(format!("{rel}:{}: {line}", i + 1));
            }
        }
    }
    assert!(
        violations.is_empty(),
        "construct TokioCommandRunner in app.rs only:\n{}",
        violations.join("\n")
    );
}

#[test]
fn services_take_trait_bounds_not_concrete_adapters() {
    let violations = scan(
        &src_dir().join("application").join("services"),
        &[
            "GitTagInspector",
            "RadKeyLocator",
            "SshRemoteShell",
            "TokioCommandRunner",
        ],
    );
    assert!(
        violations.is_empty(),
        "services must accept port traits:\n{}",
        violations.join("\n")
    );
}
