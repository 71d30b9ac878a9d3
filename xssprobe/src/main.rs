use colored::Colorize;
use std::process::ExitCode;
use xssprobe::command_argument_builder;
use xssprobe::handlers::{handle_scan, init_tracing, prepare};
use xssprobe_core::print_banner;

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit here with status 2, before anything touches the network
    let matches = command_argument_builder().get_matches();

    init_tracing(matches.get_count("verbose"));

    let (config, mode) = match prepare(&matches) {
        Ok(prepared) => prepared,
        Err(e) => return fail(e.into()),
    };

    let quiet = matches.get_flag("quiet");
    if !quiet {
        print_banner();
    }

    match handle_scan(config, mode, quiet).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn fail(error: anyhow::Error) -> ExitCode {
    eprintln!("{} {}", "✗".red().bold(), format!("{:#}", error).red());
    ExitCode::FAILURE
}
