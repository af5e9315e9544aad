//! Periodic extract task: pulls one day of reservoir elevation and
//! precipitation for a site and prints the table. Failures are retried a
//! fixed number of times with a fixed delay before giving up.

use log::{error, info};
use std::env;
use std::time::Duration;
use usgs::{IvFrame, TransportOptions, Usgs, UsgsError};

const SITE: &str = "0204295505";
const PARAMETERS: [&str; 2] = ["62620", "00045"];
const RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(3 * 60);

async fn extract(usgs: &Usgs) -> Result<IvFrame, UsgsError> {
    usgs.instantaneous_values()
        .site(SITE)
        .parameter_codes(PARAMETERS)
        .start_date("2022-02-22")
        .end_date("2022-02-23")
        .transport(
            TransportOptions::builder()
                .timeout(Duration::from_secs(10))
                .build(),
        )
        .call()
        .await
}

#[tokio::main]
async fn main() -> Result<(), UsgsError> {
    env_logger::init();
    configure_polars_display();

    let usgs = Usgs::new();
    let mut attempt = 0;
    let values = loop {
        match extract(&usgs).await {
            Ok(values) => break values,
            Err(e) if attempt < RETRIES => {
                attempt += 1;
                error!(
                    "Extract for site {} failed ({}), retry {}/{} in {:?}",
                    SITE, e, attempt, RETRIES, RETRY_DELAY
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => return Err(e),
        }
    };

    info!("Extracted {} rows for site {}", values.height(), SITE);
    println!("{}", values.frame);

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
