use anyhow::Result;
use clap::Parser;

use plugin_release::config;
use plugin_release::git::Git2Vcs;
use plugin_release::prompt::StdinPrompt;
use plugin_release::release;
use plugin_release::runner::SystemRunner;
use plugin_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "plugin-release",
    about = "Bump the plugin version, update the changelog, then build and deploy"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("plugin-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize git operations
    let vcs = match Git2Vcs::open(".") {
        Ok(vcs) => vcs,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_banner("PLUGIN RELEASE PROCESS");

    let mut source = StdinPrompt;
    let today = chrono::Local::now().date_naive();

    match release::run_release(&config, &mut source, &SystemRunner, &vcs, today) {
        Ok(outcome) => {
            println!();
            ui::display_banner(&format!(
                "Successfully released version {}",
                outcome.version
            ));
            println!("Don't forget to restart the host application to load the updated plugin");
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
