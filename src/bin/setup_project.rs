use clap::{Arg, ArgAction};
use skelly::{actions, cli};

fn main() -> miette::Result<()> {
    let matches = cli::command(
        "setup-project",
        "Creates the Electron project layout in the current directory",
    )
    .arg(
        Arg::new("dry-run")
            .long("dry-run")
            .help("Preview what would be created without touching the disk")
            .action(ArgAction::SetTrue),
    )
    .get_matches();

    cli::init_logger(&matches);

    let root = actions::working_dir()?;

    actions::setup_project(&root, matches.get_flag("dry-run"))?;

    Ok(())
}
