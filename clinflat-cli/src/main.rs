mod flatten;
mod release;

use anyhow::Result;
use clap::Command;
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "clinflat";
    pub const DEFAULT_LOG_FILTER: &str = "info";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Flatten ClinVar variation releases into fixed-shape, analysis-ready JSON records.")
        .subcommand_required(true)
        .subcommand(flatten::cli::create_flatten_cli())
        .subcommand(release::cli::create_release_cli())
}

fn init_logging() {
    // stdout may carry the JSON output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(consts::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging();

    match matches.subcommand() {
        //
        // FLATTEN
        //
        Some((flatten::cli::FLATTEN_CMD, matches)) => {
            flatten::handlers::run_flatten(matches)?;
        }

        //
        // RELEASE HEADER
        //
        Some((release::cli::RELEASE_CMD, matches)) => {
            release::handlers::run_release(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_subcommand_is_required() {
        let result = build_parser().try_get_matches_from(["clinflat"]);
        assert!(result.is_err());
    }

    #[rstest]
    #[case("flatten")]
    #[case("release")]
    fn test_subcommands_are_registered(#[case] cmd: &str) {
        let matches = build_parser()
            .try_get_matches_from(["clinflat", cmd])
            .unwrap();
        assert_eq!(matches.subcommand_name(), Some(cmd));
    }
}
