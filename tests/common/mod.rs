//! Shared utilities for integration tests.

use std::process::{Command, Output};

/// Captured result of one run of the binary.
pub struct Run {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl From<Output> for Run {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8(output.stdout).unwrap(),
            stderr: String::from_utf8(output.stderr).unwrap(),
            code: output.status.code(),
        }
    }
}

/// Run the `patterns` binary with colors and diagnostics forced off.
pub fn run(args: &[&str]) -> Run {
    Command::new(env!("CARGO_BIN_EXE_patterns"))
        .args(["--color", "never"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
        .into()
}

/// Run the binary with exactly `args` and the given environment additions.
#[allow(dead_code)]
pub fn run_raw(args: &[&str], env: &[(&str, &str)]) -> Run {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_patterns"));
    cmd.args(args).env_remove("RUST_LOG").env_remove("CLICOLOR_FORCE");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().unwrap().into()
}
