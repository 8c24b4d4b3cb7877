use log::info;
use maudit::{BuildOutput, content_sources, coronate, routes};
use stays::catalog;

mod components;
mod config;
mod layout;
mod routes;

use routes::*;

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    let output = coronate(
        routes![
            Index,
            LocationPage,
            PropertyPage,
            PhotoPage,
            ListingsIndex,
            NotFound
        ],
        content_sources![],
        config::build_options(),
    )?;

    // `coronate` installs the logger, so this is the first point it can be reported from main.
    info!(
        "{} listings across {} locations",
        catalog::all().len(),
        catalog::locations().len()
    );

    Ok(output)
}
