extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, crate_version, Arg, Command};
use pretty_env_logger::init_timed;
use std::{io::Write, process};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};
use wpcs2_client::{
    config::{env, relay::ADDRESS, remote::BASE_URL},
    Result,
};

#[macro_use]
mod color;
mod command {
    pub mod server;
    pub mod testcase;
}
mod read;
mod write;

use command::{server, testcase};

fn target_args(cmd: Command<'static>) -> Command<'static> {
    cmd.arg(
        Arg::new("problem")
            .required(true)
            .help("Problem letter, A for the first problem"),
    )
    .arg(
        Arg::new("size")
            .required(true)
            .help("Data set label: small, medium or large"),
    )
}

fn app() -> Command<'static> {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .after_help("Set $WPCS2_ID, $WPCS2_PASS and $WPCS2_CID, then start `wpcs2 server` before get/submit.")
        .arg(
            Arg::new("contest")
                .long("contest")
                .global(true)
                .takes_value(true)
                .env(env::CONTEST)
                .help("Contest id"),
        )
        .arg(
            Arg::new("relay")
                .long("relay")
                .global(true)
                .takes_value(true)
                .default_value(ADDRESS)
                .help("Address of the relay server"),
        )
        .subcommand(target_args(
            Command::new("get").about("Prints a test case input fetched through the relay"),
        ))
        .subcommand(target_args(
            Command::new("submit").about("Submits the answer read from stdin through the relay"),
        ))
        .subcommand(
            Command::new("server")
                .about("Logs in and starts the relay server")
                .arg(
                    Arg::new("account")
                        .long("account")
                        .takes_value(true)
                        .help("YAML file with identity and secret, instead of $WPCS2_ID/$WPCS2_PASS"),
                )
                .arg(
                    Arg::new("base-url")
                        .long("base-url")
                        .takes_value(true)
                        .env(env::BASE_URL)
                        .default_value(BASE_URL)
                        .help("Root of the judge site"),
                ),
        )
}

async fn run(stdout: &mut StandardStream) -> Result<()> {
    let matches = app().get_matches();
    let (name, sub) = match matches.subcommand() {
        Some(v) => v,
        None => return Ok(()),
    };
    let relay = sub
        .value_of("relay")
        .or_else(|| matches.value_of("relay"))
        .unwrap_or(ADDRESS);
    match name {
        "get" => testcase::get(relay, sub).await,
        "submit" => testcase::submit(stdout, relay, sub).await,
        "server" => server::serve(stdout, relay, sub).await,
        _ => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    if let Err(e) = run(&mut stdout).await {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        write_error!(&mut stderr, "Error", "{}", e);
        let _ = stderr.reset();
        process::exit(1);
    }
    let _ = stdout.reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_get_with_global_contest() {
        let m = app()
            .try_get_matches_from(&["wpcs2", "get", "b", "large", "--contest", "7"])
            .unwrap();
        let (name, sub) = m.subcommand().unwrap();
        assert_eq!(name, "get");
        assert_eq!(sub.value_of("problem"), Some("b"));
        assert_eq!(sub.value_of("size"), Some("large"));
        assert_eq!(sub.value_of("contest"), Some("7"));
        assert_eq!(sub.value_of("relay"), Some(ADDRESS));
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(app().try_get_matches_from(&["wpcs2", "fetch"]).is_err());
    }

    #[test]
    fn no_arguments_shows_usage() {
        assert!(app().try_get_matches_from(&["wpcs2"]).is_err());
    }

    #[test]
    fn server_options() {
        let m = app()
            .try_get_matches_from(&["wpcs2", "server", "--account", "me.yml"])
            .unwrap();
        let (_, sub) = m.subcommand().unwrap();
        assert_eq!(sub.value_of("account"), Some("me.yml"));
        assert!(sub.value_of("base-url").is_some());
    }
}
