use clap::{value_parser, Arg};
use skelly::{actions, cli};
use std::{path::PathBuf, process::ExitCode};

fn main() -> miette::Result<ExitCode> {
    let matches = cli::command(
        "validate-structure",
        "Checks that the project tree matches the expected Electron layout",
    )
    .arg(
        Arg::new("root")
            .long("root")
            .value_name("DIR")
            .help("Repository root to validate (defaults to the parent of the binary's directory)")
            .value_parser(value_parser!(PathBuf)),
    )
    .get_matches();

    cli::init_logger(&matches);

    let root = match matches.get_one::<PathBuf>("root") {
        Some(root) => root.clone(),
        None => actions::default_repo_root()?,
    };

    if actions::validate_structure(&root) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
