#[macro_use]
extern crate tracing;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod resources;
pub mod token;

use config::Config;
use error::{
    Error,
    Result,
};
use std::io::Write;

/// Reads the token, fetches and decodes the services and writes the report to `out`.
/// Returns the number of reported services.
///
/// Nothing is written to `out` unless the whole service list decoded successfully.
pub async fn run(config: &Config, out: &mut impl Write) -> Result<usize> {
    let token = token::read_token(&config.token_file)?;
    let client = client::build_client(config, &token)?;

    info!("Listing services from {}", config.api_url);
    let services = api::fetch_services(&client, &config.api_url).await?;

    let reported = report::write_report(out, &services).map_err(Error::Output)?;
    out.flush().map_err(Error::Output)?;

    info!("{reported} of {} services have an external address", services.items.len());
    Ok(reported)
}
