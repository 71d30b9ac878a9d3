use clap::ArgMatches;
use colored::Colorize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use url::Url;
use xssprobe_core::config::{
    DEFAULT_THREADS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, expand_path,
};
use xssprobe_core::{InputError, OutputFormat, RunSummary, ScanConfig, ScanMode, run_scan};

/// Map the `-v` count to a log level. Warnings are always shown.
pub fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the immutable run configuration from parsed arguments.
pub fn config_from_matches(matches: &ArgMatches) -> ScanConfig {
    let threads = matches
        .get_one::<usize>("threads")
        .copied()
        .unwrap_or(DEFAULT_THREADS);
    let timeout = matches
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let user_agent = matches
        .get_one::<String>("user-agent")
        .cloned()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
    let output = matches
        .get_one::<String>("output")
        .map(|raw| expand_path(raw));
    let format = matches
        .get_one::<String>("format")
        .and_then(|f| f.parse::<OutputFormat>().ok())
        .unwrap_or_default();

    ScanConfig {
        threads,
        timeout: Duration::from_secs(timeout),
        user_agent,
        output,
        format,
        ..ScanConfig::default()
    }
}

/// Work out which mode was requested. clap already enforces the argument
/// groups; this turns them into a [`ScanMode`].
pub fn mode_from_matches(matches: &ArgMatches) -> Result<ScanMode, InputError> {
    if matches.get_flag("target-testing") {
        let file = matches
            .get_one::<PathBuf>("file")
            .ok_or_else(|| InputError::InvalidConfig("target testing mode requires --file".to_string()))?;
        return Ok(ScanMode::TargetTesting {
            file: expand_path(&file.to_string_lossy()),
        });
    }

    if let Some(depth) = matches.get_one::<usize>("depth") {
        let url = matches
            .get_one::<Url>("url")
            .ok_or_else(|| InputError::InvalidConfig("crawling mode requires --url".to_string()))?;
        return ScanMode::crawl(url.clone(), *depth);
    }

    Err(InputError::InvalidConfig(
        "choose --target-testing or --depth".to_string(),
    ))
}

/// Everything the run needs from the command line, checked before any
/// output is printed.
pub fn prepare(matches: &ArgMatches) -> Result<(ScanConfig, ScanMode), InputError> {
    let config = config_from_matches(matches);
    config.validate()?;
    let mode = mode_from_matches(matches)?;
    Ok((config, mode))
}

pub async fn handle_scan(config: ScanConfig, mode: ScanMode, quiet: bool) -> anyhow::Result<()> {
    let show_progress = !quiet && std::io::stderr().is_terminal();
    let summary = run_scan(&config, mode, show_progress).await?;

    print_summary(&summary, &config);
    Ok(())
}

fn print_summary(summary: &RunSummary, config: &ScanConfig) {
    println!();
    println!("{}", "═".repeat(60).bright_blue());
    if summary.pages_crawled > 0 {
        println!("  Pages crawled:     {}", summary.pages_crawled);
    }
    if summary.pages_failed > 0 {
        println!(
            "  Pages failed:      {}",
            summary.pages_failed.to_string().yellow()
        );
    }
    println!("  Targets scanned:   {}", summary.scan.targets);
    println!("  Candidates probed: {}", summary.scan.totals.probed);
    if summary.scan.totals.errors > 0 {
        println!(
            "  Probe errors:      {}",
            summary.scan.totals.errors.to_string().yellow()
        );
    }

    let findings = if summary.findings > 0 {
        summary.findings.to_string().red().bold()
    } else {
        summary.findings.to_string().green()
    };
    println!("  Findings:          {}", findings);

    if let Some(ref output) = config.output {
        println!("  Output:            {}", output.display().to_string().bright_white());
    }
    println!("{}", "═".repeat(60).bright_blue());
}
