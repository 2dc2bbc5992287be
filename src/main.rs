mod app;
mod config;
mod error;
mod events;
mod grail;
mod logger;
mod state;
mod storage;
mod ui;

use crate::app::App;
use crate::config::Config;
use crate::storage::Storage;
use anyhow::Result;
use clap::{App as Cli, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("grail-tui")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A terminal user interface for tracking holy grail collection progress")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("data")
                .short("d")
                .long("data")
                .value_name("DIR")
                .help("Directory holding the persisted checklist")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    let storage = Storage::open(matches.value_of("data"))?;

    App::start(config, storage).await
}
