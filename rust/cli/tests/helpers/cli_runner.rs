use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Environment variables the CLI reads; cleared for every run so the host
/// environment cannot leak into a test.
const LUMO_VARS: &[&str] = &[
    "LUMO_CONFIG",
    "LUMO_LEVEL",
    "LUMO_MAX_LEVEL",
    "LUMO_LIVES",
    "LUMO_OPTIONS",
    "LUMO_HISTORY",
    "LUMO_STEP_SEED",
    "LUMO_LOG",
];

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

#[allow(dead_code)]
impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_lumo")),
        }
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    pub fn run_with_env_and_input(
        &self,
        args: &[&str],
        env: &[(&str, &str)],
        input: &str,
    ) -> CliResult {
        self.run_inner(args, env, Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for key in LUMO_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let start = Instant::now();
        let mut child = cmd.spawn().expect("failed to spawn CLI binary");

        if let Some(payload) = input {
            use std::io::Write as _;
            if let Some(mut stdin) = child.stdin.take() {
                let _ = stdin.write_all(payload.as_bytes());
            }
        }

        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: start.elapsed(),
        }
    }
}
