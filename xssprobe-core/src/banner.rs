use colored::Colorize;

const BANNER: &str = r"
 __  _____ ___ _ __  _ __ ___ | |__   ___
 \ \/ / __/ __| '_ \| '__/ _ \| '_ \ / _ \
  >  <\__ \__ \ |_) | | | (_) | |_) |  __/
 /_/\_\___/___/ .__/|_|  \___/|_.__/ \___|
              |_|";

pub fn print_banner() {
    println!("{}", BANNER.red().bold());
    println!("{}", "  Reflected Cross-Site Scripting Scanner".cyan());
    println!(
        "  {} {}   {} {}",
        "Target testing:".green(),
        "--target-testing -f <file>",
        "Crawling:".green(),
        "-d <depth> -u <url>"
    );
    println!("{}", "═".repeat(60).bright_blue());
}
