use maud::{Markup, html};
use maudit::route::prelude::*;
use stays::catalog;
use stays::listing::{FeatureKind, Listing};

use crate::components::{booking_buttons, inline_gallery, location_url};
use crate::layout::{SeoMeta, layout};

#[route("/properties/[slug]/")]
pub struct PropertyPage;

#[derive(Params, Clone)]
pub struct PropertyParams {
    pub slug: String,
}

impl Route<PropertyParams> for PropertyPage {
    fn pages(&self, _: &mut DynamicRouteContext) -> Pages<PropertyParams> {
        catalog::all()
            .iter()
            .map(|listing| {
                Page::from_params(PropertyParams {
                    slug: listing.slug.to_string(),
                })
            })
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_property(ctx)
    }
}

fn render_property(ctx: &mut PageContext) -> Result<Markup, Box<dyn std::error::Error>> {
    let slug = ctx.params::<PropertyParams>().slug;
    let listing = catalog::get(&slug)?;
    let gallery = listing.gallery();
    let neighborhood = &listing.neighborhood;

    ctx.assets.include_script("assets/lightbox.ts")?;

    let canonical_url = ctx.canonical_url();

    layout(
        html! {
            div.container.property {
                header.property-header {
                    a.property-location href=(location_url(listing.location)) { (listing.location) }
                    h1 { (listing.title) }
                    p.property-rating {
                        span.rating { "★ " (listing.formatted_rating()) }
                        " · "
                        span.reviews { (listing.reviews) " reviews" }
                    }
                }

                (inline_gallery(listing, &gallery))

                div.property-body {
                    div.property-details {
                        (capacity(listing))

                        h2 { "About this place" }
                        p.overview { (listing.overview) }

                        div.feature-groups {
                            @for kind in [FeatureKind::Bedrooms, FeatureKind::Living, FeatureKind::Kitchen, FeatureKind::Amenities] {
                                @if let Some(group) = listing.feature_group(kind) {
                                    section.feature-group {
                                        h3 { (group.heading) }
                                        ul {
                                            @for item in group.items {
                                                li { (item) }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        h2 { "Amenities" }
                        ul.amenities {
                            @for amenity in listing.amenities {
                                li { (amenity) }
                            }
                        }

                        h2 { "The neighborhood" }
                        @if !neighborhood.restaurants.is_empty() {
                            h3 { "Where to eat" }
                            ul.restaurants {
                                @for restaurant in neighborhood.restaurants {
                                    li {
                                        strong { (restaurant.name) }
                                        span.cuisine { (restaurant.cuisine) " · " (restaurant.price_symbol()) }
                                        span.rating { "★ " (format!("{:.1}", restaurant.rating)) }
                                        span.distance { (restaurant.walk_minutes) " min walk" }
                                    }
                                }
                            }
                        }
                        @if !neighborhood.walking.is_empty() {
                            h3 { "On foot" }
                            ul.walking {
                                @for walk in neighborhood.walking {
                                    li {
                                        (walk.place)
                                        span.distance { (walk.minutes) " minutes" }
                                    }
                                }
                            }
                        }
                    }
                    aside {
                        (booking_buttons(listing))
                    }
                }
            }
        },
        ctx,
        Some(SeoMeta {
            title: listing.title.to_string(),
            description: Some(listing.description.to_string()),
            canonical_url,
            image: Some(listing.cover_image().path().to_string()),
        }),
    )
}

/// Guests, bedrooms and bathrooms, each with its short note.
fn capacity(listing: &Listing) -> Markup {
    let notes = &listing.capacity_notes;

    html! {
        ul.capacity {
            li {
                strong { "Up to " (listing.guests) " guests" }
                span { (notes.guests) }
            }
            li {
                strong { (listing.bedrooms) @if listing.bedrooms == 1 { " bedroom" } @else { " bedrooms" } }
                span { (notes.bedrooms) }
            }
            li {
                strong { (listing.bathrooms) @if listing.bathrooms == 1 { " bathroom" } @else { " bathrooms" } }
                span { (notes.bathrooms) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_uses_notes_and_singular() {
        let html = capacity(catalog::get("richards").unwrap()).into_string();

        assert!(html.contains("Up to 2 guests"));
        assert!(html.contains("Perfect for couples"));
        assert!(html.contains("1 bedroom<"));
        assert!(html.contains("1 bathroom<"));

        let homer = capacity(catalog::get("homer").unwrap()).into_string();
        assert!(homer.contains("3 bedrooms"));
        assert!(homer.contains("Ensuite in master"));
    }
}
