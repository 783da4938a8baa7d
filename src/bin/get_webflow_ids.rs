//! Helper binary that prints the site and collection identifiers visible
//! to the configured API token, for filling in WEBFLOW_SITE_ID and
//! WEBFLOW_COLLECTION_ID.

use std::process;

use tracing::Level;

use webflow_cms_service::{AppConfig, WebflowClient};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let config = AppConfig::from_env();

    if config.api_token.is_none() {
        eprintln!("WEBFLOW_API_TOKEN is not set!");
        eprintln!("Set it with: export WEBFLOW_API_TOKEN=<your token>");
        process::exit(1);
    }

    let client = WebflowClient::new(&config);

    println!("Looking up Webflow sites...\n");

    let sites = match client.list_sites().await {
        Ok(sites) => sites,
        Err(err) => {
            eprintln!("Failed to list sites: {}", err);
            process::exit(1);
        }
    };

    if sites.is_empty() {
        println!("No sites found.");
        return;
    }

    for site in &sites {
        println!("Site Name: {}", site.display_name);
        println!("Site ID: {}", site.id);
        println!("Short Name: {}", site.short_name);
        println!("---");

        match client.list_collections(&site.id).await {
            Ok(collections) if collections.is_empty() => {
                println!("  No collections found for \"{}\"", site.display_name);
            }
            Ok(collections) => {
                println!("\n  Collections for \"{}\":\n", site.display_name);
                for collection in &collections {
                    println!("  Collection Name: {}", collection.display_name);
                    println!("  Collection ID: {}", collection.id);
                    println!("  Slug: {}", collection.slug);
                    println!("  ---");
                }
            }
            Err(err) => {
                println!("  Failed to list collections: {}", err);
            }
        }

        println!();
    }

    println!("Done! Copy the IDs into your environment configuration.");
}
