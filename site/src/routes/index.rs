use maud::{Markup, html};
use maudit::route::prelude::*;
use stays::{ListingFilter, catalog};

use crate::components::{listing_grid, location_pills, places_label};
use crate::config::SITE_NAME;
use crate::layout::{SeoMeta, layout};

#[route("/")]
pub struct Index;

impl Route for Index {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_index(ctx)
    }
}

fn render_index(ctx: &mut PageContext) -> Result<Markup, Box<dyn std::error::Error>> {
    ctx.assets.include_script("assets/search.ts")?;

    let locations = catalog::locations();
    let listings = ListingFilter::new().apply(catalog::all());

    let canonical_url = ctx.canonical_url();

    layout(
        html! {
            section.hero {
                div.container {
                    h1 { "Short stays in the heart of Vancouver" }
                    p { "Townhouses, duplexes and lofts in Yaletown and Downtown, hosted by us." }
                }
            }

            section.container {
                form.search role="search" {
                    label for="search-query" { "Search" }
                    input id="search-query" type="search" name="q" placeholder="Loft, fireplace, city views…" autocomplete="off";
                    label for="search-location" { "Location" }
                    select id="search-location" name="location" {
                        option value="" { "All locations" }
                        @for location in &locations {
                            option value=(location) { (location) }
                        }
                    }
                }

                (location_pills(&locations, None))

                p.search-count aria-live="polite" { (places_label(listings.len())) }
                (listing_grid(&listings))
                p.search-empty hidden { "No places match your search. Try another word or location." }
            }
        },
        ctx,
        Some(SeoMeta {
            title: SITE_NAME.to_string(),
            canonical_url,
            ..Default::default()
        }),
    )
}
