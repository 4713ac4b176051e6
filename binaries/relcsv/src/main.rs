use {
    clap::{arg, ArgMatches, Command},
    relcsv::cmd::{self, Error as ExecutionError},
    snafu::prelude::*,
    std::{env, path::PathBuf, process},
    storage::{Config, Store},
    tracing_subscriber::EnvFilter,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{}", source))]
    ExecuteCommand { source: ExecutionError },
}

pub type Result<T> = std::result::Result<T, Error>;

const RELCSV_LOG: &str = "RELCSV_LOG";

const INIT: &str = "init";
const DESCRIBE: &str = "describe";
const CLEAN: &str = "clean";
const DROP: &str = "drop";
const ALTER: &str = "alter";

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .arg(
            arg!(-d --"data-dir" <PATH> "data directory, defaults to $RELCSV_DATA_DIR or ./data")
                .global(true),
        )
        .arg(arg!(--"default-db" <NAME> "database of unqualified table names").global(true))
        .arg(arg!(--"log-level" <LEVEL> "log filter, defaults to $RELCSV_LOG or info").global(true))
        .subcommand(Command::new(INIT).about("initialize the data directory and the catalog"))
        .subcommand(
            Command::new(DESCRIBE)
                .about("print the definition of a table")
                .arg(arg!(<TABLE> "table identifier, [database.]name")),
        )
        .subcommand(
            Command::new(CLEAN)
                .about("remove every row of a table")
                .arg(arg!(<TABLE> "table identifier, [database.]name")),
        )
        .subcommand(
            Command::new(DROP)
                .about("delete a table and its catalog entry")
                .arg(arg!(<TABLE> "table identifier, [database.]name")),
        )
        .subcommand(
            Command::new(ALTER)
                .about("add, drop or change the type of a column")
                .arg(arg!(<TABLE> "table identifier, [database.]name"))
                .arg(arg!(<OPERATION> "add, drop or modify"))
                .arg(arg!(<COLUMN> "column name"))
                .arg(arg!([TYPE] "integer, float or text")),
        )
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(&matches);

    let config = config(&matches);
    let store = cmd::init(&config).context(ExecuteCommandSnafu)?;

    match matches.subcommand() {
        Some((INIT, _)) => {}
        Some((DESCRIBE, sub_matches)) => {
            let definition = cmd::describe(&store, table_id(sub_matches))
                .context(ExecuteCommandSnafu)?;
            println!("{}", definition);
        }
        Some((CLEAN, sub_matches)) => {
            cmd::clean(&store, table_id(sub_matches)).context(ExecuteCommandSnafu)?;
        }
        Some((DROP, sub_matches)) => {
            cmd::drop(&store, table_id(sub_matches)).context(ExecuteCommandSnafu)?;
        }
        Some((ALTER, sub_matches)) => {
            alter(&store, sub_matches)?;
        }
        _ => unreachable!(),
    }

    Ok(())
}

fn alter(store: &Store, matches: &ArgMatches) -> Result<()> {
    let arg = |name: &str| matches.get_one::<String>(name).map(String::as_str);

    cmd::alter(
        store,
        table_id(matches),
        arg("OPERATION").unwrap_or_default(),
        arg("COLUMN").unwrap_or_default(),
        arg("TYPE"),
    )
    .context(ExecuteCommandSnafu)
}

fn table_id(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("TABLE")
        .map(String::as_str)
        .unwrap_or_default()
}

/// Environment defaults, overridden by the command line.
fn config(matches: &ArgMatches) -> Config {
    let mut config = Config::from_env();

    if let Some(dir) = matches.get_one::<String>("data-dir") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(name) = matches.get_one::<String>("default-db") {
        config.default_database = name.clone();
    }

    config
}

fn init_logging(matches: &ArgMatches) {
    let level = matches
        .get_one::<String>("log-level")
        .cloned()
        .or_else(|| env::var(RELCSV_LOG).ok())
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
