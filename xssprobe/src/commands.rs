use crate::CLAP_STYLING;
use clap::{ArgAction, ArgGroup, arg};
use std::path::PathBuf;
use url::Url;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("xssprobe")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("xssprobe")
        .about("Probe web applications for reflected XSS in URL query parameters")
        .styles(CLAP_STYLING)
        .after_help(
            "Examples:\n  \
             Target testing: xssprobe --target-testing -f urls.txt\n  \
             Crawling:       xssprobe -d 2 -u http://example.com",
        )
        .arg(arg!(-q --"quiet" "Suppress banner and progress output").required(false))
        .arg(
            arg!(-v --"verbose")
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
        // Mode selection
        .arg(
            arg!(--"target-testing")
                .visible_alias("tt")
                .help("Target testing mode: test every URL in --file directly")
                .action(ArgAction::SetTrue)
                .requires("file")
                .conflicts_with("url"),
        )
        .arg(
            arg!(-d --"depth" <DEPTH>)
                .help("Crawling mode: maximum link depth to crawl from --url")
                .value_parser(clap::value_parser!(usize))
                .requires("url")
                .conflicts_with("file"),
        )
        .group(
            ArgGroup::new("mode")
                .args(["target-testing", "depth"])
                .required(true),
        )
        // Target selection
        .arg(
            arg!(-u --"url" <URL>)
                .help("Seed URL for crawling mode")
                .value_parser(clap::value_parser!(Url)),
        )
        .arg(
            arg!(-f --"file" <PATH>)
                .help("Newline-delimited file of URLs for target testing mode")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .group(ArgGroup::new("target").args(["url", "file"]).required(true))
        // Tuning
        .arg(
            arg!(-t --"threads" <THREADS>)
                .required(false)
                .help("Number of concurrent workers")
                .value_parser(clap::value_parser!(usize))
                .default_value("15"),
        )
        .arg(
            arg!(-T --"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("8"),
        )
        .arg(
            arg!(-a --"user-agent" <USER_AGENT>)
                .required(false)
                .help("Custom User-Agent string"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Append vulnerable URLs to this file"),
        )
        .arg(
            arg!(--"format" <FORMAT>)
                .required(false)
                .help("Output file format: text (one URL per line) or json (one object per line)")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
}
