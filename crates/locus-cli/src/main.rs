//! Locus CLI - Main entry point

use clap::Parser;
use locus_cli::{commands, Cli, Commands};
use locus_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Load .env before clap reads environment-backed flags
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Verbose mode logs debug to the console, otherwise warnings only
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let log_config = LogConfig::builder()
        .level(level)
        .output(LogOutput::Console)
        .log_file_prefix("locus")
        .build();

    // Environment variables take precedence over the flag defaults
    let log_config = match log_config.clone().merge_env() {
        Ok(merged) => merged,
        Err(e) => {
            eprintln!("Warning: ignoring logging environment: {}", e);
            log_config
        },
    };

    // Keep the guard alive so file logs are flushed on exit
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        },
    };

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> locus_cli::Result<()> {
    match &cli.command {
        Commands::Annotate {
            input,
            output,
            column,
            format,
            delay_ms,
            no_preview,
        } => {
            let mut config = cli.config()?;
            if let Some(delay_ms) = delay_ms {
                config.set_request_delay_ms(*delay_ms);
            }

            commands::annotate::run(
                &config,
                commands::annotate::AnnotateOptions {
                    input: input.clone(),
                    output: output.clone(),
                    column: column.clone(),
                    format: *format,
                    preview: !no_preview,
                },
            )
            .await
        },

        Commands::Resolve { ids, format } => {
            commands::resolve::run(&cli.config()?, ids, format).await
        },

        Commands::Classify { ids } => commands::classify::run(ids),
    }
}
