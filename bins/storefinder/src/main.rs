//! storefinder: store locator CLI.
//!
//! Builds the annotated catalog once, then renders the HTML page or
//! prints the view descriptors for inspection.

use anyhow::Context;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use storefinder_catalog::{group_and_sort, Catalog, ReferencePoint};
use storefinder_geo::{haversine_distance, Coordinate};
use storefinder_render::format::format_distance_km;
use storefinder_render::{card_groups, MarkerRequest, Page};

#[derive(Parser)]
#[command(name = "storefinder")]
#[command(about = "Store locator around the NIDA campus")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the store locator page to an HTML file
    Page {
        /// Output path
        #[arg(short, long, default_value = "store-locator.html")]
        out: PathBuf,

        /// Page title
        #[arg(long, default_value = "Store Locator")]
        title: String,

        /// Intro line under the title
        #[arg(long, default_value = "Find stores near NIDA")]
        intro: String,
    },

    /// Print the store cards, grouped by brand
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the map marker descriptors
    Markers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Distance from the reference point to an arbitrary coordinate
    Distance {
        /// Latitude in degrees
        lat: f64,

        /// Longitude in degrees
        lon: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("storefinder=debug")
            .init();
    }

    let catalog = Catalog::build(ReferencePoint::nida());
    tracing::debug!(stores = catalog.len(), "catalog built");

    match cli.command {
        Commands::Page { out, title, intro } => {
            let html = Page::new(title, intro).render(&catalog)?;
            std::fs::write(&out, html)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("{} wrote {}", "✓".green(), out.display());
        }

        Commands::List { json } => {
            let groups = card_groups(&group_and_sort(&catalog));
            if json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                for group in &groups {
                    println!();
                    println!("{}", group.brand_label.bold());
                    for card in &group.cards {
                        println!("  {} ({})", card.name, card.distance_text);
                        println!("    Open Hours: {}", card.open_hours);
                        println!("    Telephone: {}", card.telephone);
                        println!("    {}", card.map_link.blue());
                    }
                }
            }
        }

        Commands::Markers { json } => {
            let mut markers = vec![MarkerRequest::for_reference(catalog.reference())];
            markers.extend(catalog.stores().iter().map(MarkerRequest::for_store));

            if json {
                println!("{}", serde_json::to_string_pretty(&markers)?);
            } else {
                for marker in &markers {
                    println!(
                        "{} ({:.6}, {:.6}) [{}]",
                        marker.label.bold(),
                        marker.latitude,
                        marker.longitude,
                        marker.color.css_name()
                    );
                }
            }
        }

        Commands::Distance { lat, lon } => {
            let reference = catalog.reference();
            let distance =
                haversine_distance(&reference.coordinate, &Coordinate::new(lat, lon));
            println!(
                "{} from {}",
                format_distance_km(distance).bold(),
                reference.label
            );
        }
    }

    Ok(())
}
