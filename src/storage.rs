use std::path::PathBuf;
use std::time::{Duration, Instant};

/// A resolved command line together with the file its timing goes to.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub times_file: PathBuf, // Timings log file
    pub program: String,     // Command to execute
    pub args: Vec<String>,   // Arguments, in original order
}

impl Invocation {
    /// Splits `command` into program and arguments. Returns `None` when empty.
    pub fn new(times_file: PathBuf, command: Vec<String>) -> Option<Self> {
        let mut parts = command.into_iter();
        let program = parts.next()?;
        Some(Self {
            times_file,
            program,
            args: parts.collect(),
        })
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct TimingRecord {
    pub command_line: String, // Command and arguments, space-joined
    pub started: Instant,     // Taken right before spawn
    pub finished: Instant,    // Taken right after wait returns
    pub exit_code: i32,       // Propagated or fallback exit code
}

impl TimingRecord {
    pub fn duration(&self) -> Duration {
        self.finished.duration_since(self.started)
    }

    pub fn to_line(&self) -> String {
        format!("[{}] : {}\n", format_duration(self.duration()), self.command_line)
    }
}

/// Formats like `1h2m3.5s`, `12.5ms`, `830µs` or `0s`.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{}ns", nanos);
    }
    if nanos < 1_000_000 {
        return format!("{}µs", with_fraction(nanos / 1_000, nanos % 1_000, 3));
    }
    if nanos < 1_000_000_000 {
        return format!("{}ms", with_fraction(nanos / 1_000_000, nanos % 1_000_000, 6));
    }

    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = with_fraction((total_secs % 60) as u128, d.subsec_nanos() as u128, 9);

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

fn with_fraction(whole: u128, remainder: u128, width: usize) -> String {
    if remainder == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", remainder, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
