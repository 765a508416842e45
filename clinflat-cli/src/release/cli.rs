use clap::{Command, arg};

pub const RELEASE_CMD: &str = "release";

pub fn create_release_cli() -> Command {
    Command::new(RELEASE_CMD)
        .about("Print the metadata of a release without decoding its archives.")
        .arg(arg!(-i --input <input> "ClinVar variation release XML, plain or gzipped (default: standard input)"))
}
