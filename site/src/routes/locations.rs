use maud::{Markup, html};
use maudit::route::prelude::*;
use stays::errors::CatalogError;
use stays::filter::{location_from_slug, location_slug};
use stays::{ListingFilter, catalog};

use crate::components::{listing_grid, location_pills};
use crate::layout::{SeoMeta, layout};

#[route("/locations/[location]/")]
pub struct LocationPage;

#[derive(Params, Clone)]
pub struct LocationParams {
    pub location: String,
}

impl Route<LocationParams> for LocationPage {
    fn pages(&self, _: &mut DynamicRouteContext) -> Pages<LocationParams> {
        catalog::locations()
            .into_iter()
            .map(|location| {
                Page::from_params(LocationParams {
                    location: location_slug(location),
                })
            })
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_location(ctx)
    }
}

fn render_location(ctx: &mut PageContext) -> Result<Markup, Box<dyn std::error::Error>> {
    let slug = ctx.params::<LocationParams>().location;
    let locations = catalog::locations();
    let location = location_from_slug(&slug, &locations).ok_or_else(|| {
        CatalogError::UnknownLocation {
            location: slug.clone(),
        }
    })?;

    let listings = ListingFilter::new()
        .with_location(location)
        .apply(catalog::all());

    let canonical_url = ctx.canonical_url();

    layout(
        html! {
            section.hero.hero-small {
                div.container {
                    h1 { "Stays in " (location) }
                    p { (listings.len()) " hand-picked " (if listings.len() == 1 { "home" } else { "homes" }) }
                }
            }
            section.container {
                (location_pills(&locations, Some(location)))
                (listing_grid(&listings))
            }
        },
        ctx,
        Some(SeoMeta {
            title: format!("Short stays in {}", location),
            description: Some(format!(
                "Book one of our {} homes in {}.",
                listings.len(),
                location
            )),
            canonical_url,
            ..Default::default()
        }),
    )
}
