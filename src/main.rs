mod config;
mod executor;
mod i18n;
mod storage;
mod timings;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

use config::Config;
use executor::CommandExecutor;
use i18n::I18n;
use storage::Invocation;
use timings::TimingLog;

#[derive(Parser)]
#[command(name = "ftime", version)]
#[command(about = "Run a command and append its wall-clock duration to a timings file")]
struct Cli {
    /// Timings file to append to [default: timings.txt]
    #[arg(long = "times", short = 't', value_name = "FILENAME")]
    times: Option<PathBuf>,
    /// Command to run, followed by its arguments (put `--` before it)
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    command: Vec<String>,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => fail(&I18n::new(&Config::default().get_effective_language()), e),
    };
    if !config.display.color {
        colored::control::set_override(false);
    }
    let i18n = I18n::new(&config.get_effective_language());

    match run(cli, &config, &i18n) {
        Ok(code) => std::process::exit(code),
        Err(e) => fail(&i18n, e),
    }
}

fn run(cli: Cli, config: &Config, i18n: &I18n) -> Result<i32> {
    let times_file = config.resolve_times_file(cli.times);
    let Some(invocation) = Invocation::new(times_file, cli.command) else {
        eprintln!("{} {}", i18n.t("error_label").red().bold(), i18n.t("error_missing_command"));
        eprintln!("{}", i18n.t("usage_hint"));
        return Ok(1);
    };

    let timings = TimingLog::new(&invocation.times_file);
    log::debug!("timings file: {}", timings.path().display());
    timings.check_access(i18n)?;

    let record = CommandExecutor::new(config.timing.fallback_exit_code).execute(&invocation, i18n)?;
    log::debug!("elapsed {:?}, exit code {}", record.duration(), record.exit_code);

    timings.append(&record, i18n)?;
    Ok(record.exit_code)
}

fn fail(i18n: &I18n, err: anyhow::Error) -> ! {
    eprintln!("{} {:#}", i18n.t("error_label").red().bold(), err);
    std::process::exit(1);
}
