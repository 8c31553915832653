extern crate clap;
extern crate termcolor;
extern crate tokio;

use clap::ArgMatches;
use log::{error, info};
use std::{fs::File, io::Write, sync::Arc};
use termcolor::{Color, StandardStream, WriteColor};
use tokio::signal::ctrl_c;
use wpcs2_client::{config::remote::BASE_URL, Account, Relay, Result, Session};

fn load_account(sub: &ArgMatches) -> Result<Account> {
    match sub.value_of("account") {
        Some(path) => Account::from_reader(File::open(path)?),
        None => Account::from_env(),
    }
}

async fn shutdown_signal() {
    match ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await
        }
    }
}

/// Logs in once, then serves the relay until Ctrl+C.
pub async fn serve(stdout: &mut StandardStream, relay: &str, sub: &ArgMatches) -> Result<()> {
    let account = load_account(sub)?;
    let base = sub.value_of("base-url").unwrap_or(BASE_URL);
    write_info!(stdout, "Info", "Logging into {} as {}", base, account.identity);
    let session = Arc::new(Session::from_account(base, &account).await?);
    write_ok!(stdout, "Success", "Logged in");

    let listener = Relay::bind(relay).await?;
    write_ok!(stdout, "Listening", "http://{}", listener.local_addr()?);
    let _ = stdout.reset();
    Relay::from_session(session)
        .serve_with_shutdown(listener, shutdown_signal())
        .await
}
