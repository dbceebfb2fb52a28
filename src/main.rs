use anyhow::Result;
use calc_tui::{app::App, config::Config, logger, logger::LogBuffer};
use clap::{App as Cli, Arg};

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Uses the named theme for this session")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("no-bell")
                .long("no-bell")
                .help("Disables the terminal bell on calculation errors"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let mut session = config.clone();
    if let Some(theme) = matches.value_of("theme") {
        session.theme_name = theme.to_string();
    }
    if matches.is_present("no-bell") {
        session.bell = false;
    }

    let log = LogBuffer::default();
    logger::init(session.log_level, &log)?;

    App::start(config, &session, log)
}
