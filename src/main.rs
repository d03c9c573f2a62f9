//! quakefeed CLI
//!
//! Fetches the significant-earthquakes feed once and prints it.

use clap::Parser;
use quakefeed::{EarthquakeFeed, FeedClient};

/// Fetch the USGS significant-earthquakes feed and print it
#[derive(Parser, Debug)]
#[command(name = "quakefeed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dump the decoded feed back out as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let client = FeedClient::new();
    let result = client.fetch().await.and_then(|feed| {
        if cli.json {
            let json = serde_json::to_string_pretty(&feed)
                .map_err(|e| quakefeed::Error::decode(e.to_string()))?;
            println!("{json}");
        } else {
            print_summary(&feed);
        }
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_summary(feed: &EarthquakeFeed) {
    let bbox = &feed.bbox;
    println!("{} significant earthquakes", feed.features.len());
    println!(
        "covering lon {:.1} to {:.1}, lat {:.1} to {:.1}, depth {:.1} to {:.1} km",
        bbox.minimum_longitude(),
        bbox.maximum_longitude(),
        bbox.minimum_latitude(),
        bbox.maximum_latitude(),
        bbox.minimum_depth(),
        bbox.maximum_depth(),
    );

    for feature in &feed.features {
        let props = &feature.properties;
        match props.alert {
            Some(alert) => println!("  {} [alert: {}]", props.title, alert.as_str()),
            None => println!("  {}", props.title),
        }
    }
}
