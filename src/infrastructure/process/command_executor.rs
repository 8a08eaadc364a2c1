use std::path::Path;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// Captured result of one external process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code of the process, -1 when killed by a signal
    pub exit_code: i32,
    pub stdout: String,
    /// Diagnostic stream
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lines().map(str::to_string).collect()
    }
}

/// Runs external processes to completion, capturing both streams
pub struct CommandExecutor;

impl CommandExecutor {
    /// Spawns `program` and waits for it. A non-zero exit is not an error at
    /// this level; callers decide from [`CommandOutput::exit_code`].
    pub async fn execute(
        program: &str,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> std::io::Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        let start = Instant::now();
        let output = cmd.output().await?;
        tracing::debug!(
            program,
            exit_code = output.status.code().unwrap_or(-1),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "process finished"
        );

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
