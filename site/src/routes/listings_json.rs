use maudit::route::prelude::*;
use serde::Serialize;
use stays::{Listing, catalog};

use crate::components::property_url;

#[route("/listings.json")]
pub struct ListingsIndex;

/// Public summary of a listing, as exposed to embedders.
#[derive(Serialize)]
struct ListingSummary<'a> {
    slug: &'a str,
    title: &'a str,
    description: &'a str,
    location: &'a str,
    nightly_price: u32,
    currency: &'a str,
    rating: f32,
    reviews: u32,
    available: bool,
    url: String,
    cover_image: String,
}

impl<'a> From<&'a Listing> for ListingSummary<'a> {
    fn from(listing: &'a Listing) -> Self {
        Self {
            slug: listing.slug,
            title: listing.title,
            description: listing.description,
            location: listing.location,
            nightly_price: listing.nightly_price,
            currency: listing.currency,
            rating: listing.rating,
            reviews: listing.reviews,
            available: listing.available,
            url: property_url(listing),
            cover_image: listing.cover_image().path().to_string(),
        }
    }
}

impl Route for ListingsIndex {
    fn render(&self, _: &mut PageContext) -> impl Into<RenderResult> {
        let summaries = catalog::all()
            .iter()
            .map(ListingSummary::from)
            .collect::<Vec<_>>();

        serde_json::to_string_pretty(&summaries)
            .map_err(|err| -> Box<dyn std::error::Error> { Box::new(err) })
    }
}
