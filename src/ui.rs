//! Console output helpers shared by the workflow and the binary.

use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", style("⚠").yellow(), message);
}

/// Banner printed at the start and end of a release run.
pub fn display_banner(title: &str) {
    let rule = "=".repeat(50);
    println!("{}", rule);
    println!("{}", style(title).bold());
    println!("{}", rule);
}
