use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use moviebuffs_tui::app::App;
use moviebuffs_tui::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("moviebuffs-tui")
        .version(crate_version!())
        .about("A terminal user interface for browsing the MovieBuffs catalogue")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("endpoint")
                .short("e")
                .long("endpoint")
                .value_name("URL")
                .help("Overrides the configured MovieBuffs base URL")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Logs at debug level"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(endpoint) = matches.value_of("endpoint") {
        config.base_url = endpoint.to_string();
    }
    if matches.is_present("verbose") {
        config.log_level = "debug".to_string();
    }
    config.validate()?;

    App::start(config).await
}
