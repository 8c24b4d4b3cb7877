use std::collections::HashSet;

use stays::catalog;
use stays::filter::{ListingFilter, location_from_slug, location_slug};

#[test]
fn test_slugs_and_ids_are_unique() {
    let listings = catalog::all();

    let slugs = listings.iter().map(|l| l.slug).collect::<HashSet<_>>();
    let ids = listings.iter().map(|l| l.id).collect::<HashSet<_>>();

    assert_eq!(slugs.len(), listings.len());
    assert_eq!(ids.len(), listings.len());
}

#[test]
fn test_every_listing_can_be_booked_somewhere() {
    for listing in catalog::all() {
        let direct = listing.direct_booking().map(|link| link.url);
        assert!(
            direct.is_some_and(|url| url.starts_with("mailto:")),
            "{} cannot be booked directly",
            listing.slug
        );
        assert!(listing.platform_bookings().count() > 0, "{} is on no platform", listing.slug);
        for link in listing.platform_bookings() {
            assert!(link.url.starts_with("https://"), "{} is not https", link.url);
        }
    }
}

#[test]
fn test_images_follow_path_convention() {
    for listing in catalog::all() {
        // Richards Street was photographed under its building name.
        let folder = if listing.slug == "richards" { "seymour" } else { listing.slug };
        let prefix = format!("/photos/{}/", folder);
        assert!(!listing.images.is_empty());
        for image in listing.images {
            assert!(image.starts_with(&prefix), "{} outside of {}", image, prefix);
        }
    }
}

#[test]
fn test_empty_filter_returns_full_catalog() {
    let results = ListingFilter::new().with_location("").apply(catalog::all());
    assert_eq!(results.len(), catalog::all().len());
}

#[test]
fn test_loft_query_finds_the_loft() {
    let results = ListingFilter::new().with_query("loft").apply(catalog::all());

    assert_eq!(results.len(), 1);
    assert!(results[0].title.contains("Loft"));
}

#[test]
fn test_query_keeps_surrounding_whitespace() {
    let listings = catalog::all();

    assert_eq!(ListingFilter::new().with_query("yaletown").apply(listings).len(), 2);
    // Homer's title ends with the word, so only Howe has a space on both sides.
    let padded = ListingFilter::new().with_query(" yaletown ").apply(listings);
    assert_eq!(padded.iter().map(|l| l.slug).collect::<Vec<_>>(), vec!["howe"]);
    assert!(ListingFilter::new().with_query("  ").apply(listings).is_empty());
}

#[test]
fn test_original_catalog_details() {
    let homer = catalog::get("homer").unwrap();

    assert_eq!(homer.formatted_rating(), "4.9");
    assert_eq!(homer.reviews, 42);
    assert_eq!(homer.images.len(), 23);
    assert_eq!(homer.neighborhood.restaurants[0].price_symbol(), "$$$$");
    assert_eq!(catalog::get("howe").unwrap().guests, 5);
    assert_eq!(catalog::get("richards").unwrap().images.len(), 10);
    assert!(catalog::all().iter().all(|listing| listing.available));
}

#[test]
fn test_location_filter_is_exact() {
    for location in catalog::locations() {
        let results = ListingFilter::new()
            .with_location(location)
            .apply(catalog::all());

        assert!(!results.is_empty());
        assert!(results.iter().all(|listing| listing.location == location));
    }
}

#[test]
fn test_location_slugs_round_trip() {
    let locations = catalog::locations();

    for location in &locations {
        assert_eq!(
            location_from_slug(&location_slug(location), &locations),
            Some(*location)
        );
    }
}

#[test]
fn test_gallery_wraps_for_every_listing() {
    for listing in catalog::all() {
        let mut gallery = listing.gallery();
        gallery.previous();
        assert_eq!(gallery.current_index(), listing.images.len() - 1);
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
    }
}
