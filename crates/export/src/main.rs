//! Dump the storefront catalog as JSON.
//!
//! Reads the media configuration from the environment, builds the catalog,
//! verifies its invariants, and writes the full product payload to stdout.

use ecourses_catalog::Catalog;
use ecourses_media::{MediaConfig, MediaResolver};

fn main() -> anyhow::Result<()> {
    let config = MediaConfig::from_env();
    ecourses_observability::init(config.debug());

    let catalog = Catalog::load(&MediaResolver::new(config));
    catalog.verify()?;

    tracing::info!(products = catalog.len(), "exporting catalog");
    println!("{}", serde_json::to_string_pretty(catalog.products())?);

    Ok(())
}
