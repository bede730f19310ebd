mod cli;
mod commands;
mod config;
mod error;
mod git;
mod github;
mod tui;

#[cfg(test)]
mod test_utils;

use clap::Parser;
use cli::CommandArgs;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CommandArgs::parse();

    if let Err(e) = commands::pr::handle_pr(&args).await {
        tui::pr_display::display_error(&e);
        std::process::exit(1);
    }
}
