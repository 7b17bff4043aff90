use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command,
};

// The CLI layer should only parse inputs and forward them to library code.
fn main() {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        // -V is taken by --factorio-version, keep only --version
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
        .arg(Arg::new("project-name").help("Name of the mod project to create"))
        .arg(
            Arg::new("dirname")
                .short('d')
                .long("dirname")
                .help("Directory to create the project in (defaults to <cwd>/<project-name>)"),
        )
        .arg(
            Arg::new("factorio-version")
                .short('V')
                .long("factorio-version")
                .help("Factorio version the mod targets (defaults to latest)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let project_name = matches.get_one::<String>("project-name").map(String::as_str);
    let dirname = matches.get_one::<String>("dirname").map(String::as_str);
    let factorio_version = matches
        .get_one::<String>("factorio-version")
        .map(String::as_str);

    if let Err(error) = fabrika::api::create_project(project_name, dirname, factorio_version) {
        eprintln!(
            "Failed to create new project: {}\n",
            project_name.unwrap_or("<unnamed>")
        );
        eprintln!("{:?}", miette::Report::new(error));

        std::process::exit(1);
    }
}
