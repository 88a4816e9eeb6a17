use crate::i18n::I18n;
use crate::storage::{Invocation, TimingRecord};
use anyhow::{Context, Result};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

pub struct CommandExecutor {
    fallback_exit_code: i32,
}

impl CommandExecutor {
    pub fn new(fallback_exit_code: i32) -> Self {
        Self { fallback_exit_code }
    }

    /// Runs the command with the terminal's own streams and times it.
    pub fn execute(&self, invocation: &Invocation, i18n: &I18n) -> Result<TimingRecord> {
        let command_line = invocation.command_line();
        log::debug!("spawning `{}`", command_line);

        let started = Instant::now();

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| i18n.t_format("error_spawn_command", &[&invocation.program]))?;

        let status = child
            .wait()
            .with_context(|| i18n.t_format("error_wait_command", &[&invocation.program]))?;

        let finished = Instant::now();
        log::debug!("`{}` finished with {}", command_line, status);

        Ok(TimingRecord {
            command_line,
            started,
            finished,
            exit_code: self.exit_code(status),
        })
    }

    fn exit_code(&self, status: ExitStatus) -> i32 {
        resolve_exit_code(status.code(), self.fallback_exit_code)
    }
}

/// `None` means the child did not exit normally (e.g. killed by a signal).
fn resolve_exit_code(code: Option<i32>, fallback: i32) -> i32 {
    code.unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn invocation(parts: &[&str]) -> Invocation {
        Invocation::new(
            PathBuf::from("unused.times"),
            parts.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_exit_code() {
        assert_eq!(resolve_exit_code(Some(0), 120), 0);
        assert_eq!(resolve_exit_code(Some(3), 120), 3);
        assert_eq!(resolve_exit_code(Some(255), 120), 255);
        assert_eq!(resolve_exit_code(None, 120), 120);
        assert_eq!(resolve_exit_code(None, 99), 99);
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_propagates_exit_code() -> Result<()> {
        let i18n = I18n::new("en");
        let executor = CommandExecutor::new(120);

        let record = executor.execute(&invocation(&["sh", "-c", "exit 7"]), &i18n)?;
        assert_eq!(record.exit_code, 7);
        assert_eq!(record.command_line, "sh -c exit 7");
        assert!(record.finished >= record.started);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_signal_uses_fallback() -> Result<()> {
        let i18n = I18n::new("en");
        let executor = CommandExecutor::new(120);

        let record = executor.execute(&invocation(&["sh", "-c", "kill -9 $$"]), &i18n)?;
        assert_eq!(record.exit_code, 120);
        Ok(())
    }

    #[test]
    fn test_execute_missing_program_fails() {
        let i18n = I18n::new("en");
        let executor = CommandExecutor::new(120);

        let err = executor
            .execute(&invocation(&["nonexistent-cmd-xyz"]), &i18n)
            .unwrap_err();
        assert!(err.to_string().contains("nonexistent-cmd-xyz"));
    }
}
