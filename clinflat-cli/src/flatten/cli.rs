use clap::{Arg, ArgAction, Command, arg, builder::PossibleValuesParser, value_parser};

pub const FLATTEN_CMD: &str = "flatten";

pub const XREF_POLICIES: [&str; 3] = ["scan-reset", "first-match", "last-match"];

pub fn create_flatten_cli() -> Command {
    Command::new(FLATTEN_CMD)
        .about("Flatten every variation archive of a release into one JSON record.")
        .arg(arg!(-i --input <input> "ClinVar variation release XML, plain or gzipped (default: standard input)"))
        .arg(arg!(-o --output <output> "Output JSON file, gzipped when it ends in .gz (default: standard output)"))
        .arg(
            arg!(-r --"release-info" "Print the release metadata to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(--pretty "Pretty-print the JSON output").action(ArgAction::SetTrue))
        .arg(
            arg!(-t --threads <threads> "Number of worker threads (default: all cores)")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("xref-policy")
                .long("xref-policy")
                .value_name("policy")
                .help("How dbSNP and OMIM ids are picked from a cross-reference list")
                .value_parser(PossibleValuesParser::new(XREF_POLICIES)),
        )
        .arg(arg!(-c --config <config> "TOML file with flatten settings; flags override it"))
}
