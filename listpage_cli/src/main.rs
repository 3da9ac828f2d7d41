mod cli;
mod commands;
mod errors;
mod files;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use cli::{ListpageCli, ListpageCommand};
use errors::CliError;

fn main() -> ExitCode {
    let cli = ListpageCli::parse();
    initialize_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => e.exit_code(),
    }
}

fn run(cli: ListpageCli) -> Result<(), CliError> {
    let catalog = cli.catalog.as_ref();
    let field_map = cli.field_map.as_ref();

    match cli.command {
        ListpageCommand::Summary { config } => {
            commands::summarize_configuration(&config, catalog, cli.format)
        }
        ListpageCommand::Resolve { config, entity } => commands::resolve_contextual_filters(
            &config,
            catalog,
            field_map,
            entity.as_ref(),
            cli.format,
        ),
        ListpageCommand::Search {
            config,
            index,
            entity,
            keys,
        } => commands::search_list_page(
            &config,
            &index,
            catalog,
            field_map,
            entity.as_ref(),
            keys,
            cli.format,
        ),
    }
}

/// Logs to stderr at info level, or debug when verbose. `RUST_LOG` takes precedence.
fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}
