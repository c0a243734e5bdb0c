use activity_advisor::cli::Args;
use activity_advisor::config::Config;
use activity_advisor::orchestrator::{self, build_conversation, OrchestratorContext, DEFAULT_QUERY};
use activity_advisor::ui::{display_final, display_message};
use clap::Parser;
use colored::*;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Load configuration; the API key is required before anything else happens
    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let context = match OrchestratorContext::new(config) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let query = args.query().unwrap_or_else(|| DEFAULT_QUERY.to_string());
    let mut messages = build_conversation(&query);

    match orchestrator::run(&context, &mut messages, display_message).await {
        Ok(content) => display_final(&content),
        Err(e) => {
            // The run ends without an answer; this is not treated as a crash
            eprintln!("{} {}", "Error:".red(), e);
        }
    }
}
