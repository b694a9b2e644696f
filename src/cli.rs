//! Pieces shared by the `validate-structure` and `setup-project` binaries.
//!
//! The binaries only parse inputs and forward them to [`crate::actions`].
use clap::{crate_authors, crate_version, Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;

/// A command carrying the flags every binary accepts.
pub fn command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
}

/// Initialises logging. `RUST_LOG` wins over the verbosity flag.
pub fn init_logger(matches: &ArgMatches) {
    let default_filter = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
