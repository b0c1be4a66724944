use anyhow::{Error, Result};
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use codecov_config::{
    Config, ConfigBuilder, Service, API_BASE_URL_ENV, DEFAULT_PAGE_SIZE, DEFAULT_PORT,
    MAX_PAGE_SIZE,
};
use log::{debug, error};
use strum::VariantNames;

fn main() {
    let cmd = cmd();
    let matches = cmd.get_matches();
    let res = init_logger_from_matches(&matches);
    if let Err(e) = res {
        eprintln!("Error creating logger: {e}");
        std::process::exit(126);
    }

    let status = match make_config(&matches).and_then(|c| render(&c, matches.get_flag("json"))) {
        Ok(out) => {
            println!("{out}");
            0
        }
        Err(e) => {
            print_err(&e);
            127
        }
    };
    std::process::exit(status);
}

const MAX_TERM_WIDTH: usize = 100;

fn cmd() -> Command {
    Command::new("codecov-config")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolves and prints the Codecov API client configuration")
        .arg(Arg::new("api-base-url").long("api-base-url").help(concat!(
            "The full base URL for the Codecov API, like https://codecov.example.com/api/v2.",
            " If this has no path, /api/v2 is used. This overrides the CODECOV_API_BASE_URL and",
            " CODECOV_API_HOSTNAME env vars.",
        )))
        .arg(Arg::new("api-hostname").long("api-hostname").help(concat!(
            "The hostname of the Codecov API, like codecov.example.com. The path is always",
            " /api/v2. This is ignored if --api-base-url is also passed. This overrides the",
            " CODECOV_API_BASE_URL and CODECOV_API_HOSTNAME env vars.",
        )))
        .arg(
            Arg::new("service")
                .long("service")
                .short('s')
                .value_parser(clap::builder::PossibleValuesParser::new(Service::VARIANTS))
                .help("The source-control service. Defaults to github."),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .value_parser(clap::value_parser!(u32).range(1..=i64::from(MAX_PAGE_SIZE)))
                .help(format!(
                    "The default number of items per page, from 1 to {MAX_PAGE_SIZE}. Defaults to \
                     {DEFAULT_PAGE_SIZE}."
                )),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_parser(clap::value_parser!(u16))
                .help(format!("The port to listen on. Defaults to {DEFAULT_PORT}.")),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the configuration as JSON instead of key=value lines."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose output."),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debugging output."),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppresses most output."),
        )
        .group(ArgGroup::new("log-level").args(["verbose", "debug", "quiet"]))
        .max_term_width(MAX_TERM_WIDTH)
}

pub(crate) fn init_logger_from_matches(matches: &ArgMatches) -> Result<(), log::SetLoggerError> {
    let level = if matches.get_flag("debug") {
        log::LevelFilter::Debug
    } else if matches.get_flag("verbose") {
        log::LevelFilter::Info
    } else if matches.get_flag("quiet") {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Warn
    };

    codecov_config::init_logger(level)
}

fn make_config(matches: &ArgMatches) -> Result<Config> {
    make_config_with_lookup(matches, |name| std::env::var(name).ok())
}

fn make_config_with_lookup<F>(matches: &ArgMatches, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = ConfigBuilder::new();

    let base_url = matches.get_one::<String>("api-base-url");
    let hostname = matches.get_one::<String>("api-hostname");
    if base_url.is_none() && hostname.is_none() {
        builder = builder.with_lookup(lookup);
    } else {
        debug!("API location given on the command line, ignoring the environment.");
        if let Some(u) = base_url {
            builder = builder.api_base_url(u);
        }
        if let Some(h) = hostname {
            builder = builder.api_hostname(h);
        }
    }

    if let Some(s) = matches.get_one::<String>("service") {
        builder = builder.service(Service::from_name(s)?);
    }
    if let Some(p) = matches.get_one::<u32>("page-size") {
        builder = builder.page_size(*p);
    }
    if let Some(p) = matches.get_one::<u16>("port") {
        builder = builder.port(*p);
    }

    Ok(builder.build()?)
}

fn render(config: &Config, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(config)?);
    }

    Ok([
        format!("{API_BASE_URL_ENV}={}", config.api_base_url()),
        format!("service={}", config.service()),
        format!("page_size={}", config.page_size()),
        format!("max_page_size={}", config.max_page_size()),
        format!("port={}", config.port()),
    ]
    .join("\n"))
}

fn print_err(e: &Error) {
    error!("{e}");
}
