//! Search and location filtering for the listings page.
use log::debug;
use slug::slugify;

use crate::listing::Listing;

/// Derives a view of the catalog from a free-text query and an optional location.
///
/// A listing matches when its title or description contains the query as typed (case-insensitive) and, if a location is selected, its location is exactly that label.
/// An empty filter matches every listing.
///
/// ## Example
/// ```rust
/// use stays::{catalog, filter::ListingFilter};
///
/// let lofts = ListingFilter::new().with_query("loft").apply(catalog::all());
/// assert_eq!(lofts.len(), 1);
/// assert_eq!(lofts[0].slug, "richards");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub query: String,
    pub location: Option<String>,
    pub only_available: bool,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restrict to a location label. An empty label clears the location filter.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        self.location = if location.is_empty() {
            None
        } else {
            Some(location)
        };
        self
    }

    pub fn only_available(mut self, only_available: bool) -> Self {
        self.only_available = only_available;
        self
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if self.only_available && !listing.available {
            return false;
        }

        if let Some(location) = &self.location
            && listing.location != location
        {
            return false;
        }

        if self.query.is_empty() {
            return true;
        }

        // Whitespace is part of the query, "loft " and "loft" are different searches.
        let query = self.query.to_lowercase();
        listing.title.to_lowercase().contains(&query)
            || listing.description.to_lowercase().contains(&query)
    }

    /// Matching listings, in catalog order.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        let results = listings
            .iter()
            .filter(|listing| self.matches(listing))
            .collect::<Vec<_>>();

        debug!(
            query = self.query.as_str(),
            location = self.location.as_deref().unwrap_or(""),
            matched = results.len(),
            total = listings.len();
            "filtered listings"
        );

        results
    }
}

/// URL-safe form of a location label, e.g. `Downtown, Vancouver` becomes `downtown-vancouver`.
pub fn location_slug(location: &str) -> String {
    slugify(location)
}

/// Find the location label a slug was generated from.
pub fn location_from_slug<'a>(slug: &str, locations: &[&'a str]) -> Option<&'a str> {
    locations
        .iter()
        .copied()
        .find(|location| location_slug(location) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{CapacityNotes, Neighborhood};

    const NO_NEIGHBORHOOD: Neighborhood = Neighborhood {
        restaurants: &[],
        walking: &[],
    };

    const NO_NOTES: CapacityNotes = CapacityNotes {
        guests: "",
        bedrooms: "",
        bathrooms: "",
    };

    fn listing(
        id: u32,
        title: &'static str,
        description: &'static str,
        location: &'static str,
        available: bool,
    ) -> Listing {
        Listing {
            id,
            slug: "",
            title,
            description,
            overview: "",
            nightly_price: 100,
            currency: "CAD",
            images: &[],
            bedrooms: 1,
            bathrooms: 1,
            guests: 2,
            capacity_notes: NO_NOTES,
            location,
            amenities: &[],
            features: &[],
            rating: 4.5,
            reviews: 0,
            available,
            neighborhood: NO_NEIGHBORHOOD,
            booking: &[],
        }
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing(1, "Industrial Loft", "Brick walls downtown", "Portland, OR", true),
            listing(2, "Cedar Cabin", "A quiet cabin with a hot tub", "Lake Tahoe, CA", true),
            listing(3, "Beach Bungalow", "Steps from the sand, sunny LOFT bed", "San Diego, CA", false),
        ]
    }

    fn ids(results: &[&Listing]) -> Vec<u32> {
        results.iter().map(|listing| listing.id).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let listings = sample();
        let filter = ListingFilter::new();

        assert_eq!(ids(&filter.apply(&listings)), vec![1, 2, 3]);
    }

    #[test]
    fn test_query_is_case_insensitive_on_title_and_description() {
        let listings = sample();

        assert_eq!(ids(&ListingFilter::new().with_query("CABIN").apply(&listings)), vec![2]);
        assert_eq!(ids(&ListingFilter::new().with_query("hot tub").apply(&listings)), vec![2]);
        assert_eq!(ids(&ListingFilter::new().with_query("loft").apply(&listings)), vec![1, 3]);
    }

    #[test]
    fn test_query_whitespace_is_literal() {
        let listings = sample();

        // Only "sunny LOFT bed" has a space after the word.
        assert_eq!(ids(&ListingFilter::new().with_query("loft ").apply(&listings)), vec![3]);
        assert!(ListingFilter::new().with_query(" cedar").apply(&listings).is_empty());
        assert!(ListingFilter::new().with_query("   ").apply(&listings).is_empty());
        assert_eq!(ids(&ListingFilter::new().with_query("cedar cabin").apply(&listings)), vec![2]);
    }

    #[test]
    fn test_location_is_exact() {
        let listings = sample();

        let filter = ListingFilter::new().with_location("San Diego, CA");
        assert_eq!(ids(&filter.apply(&listings)), vec![3]);

        // Partial or differently cased labels do not match.
        assert!(ListingFilter::new().with_location("San Diego").apply(&listings).is_empty());
        assert!(ListingFilter::new().with_location("san diego, ca").apply(&listings).is_empty());
    }

    #[test]
    fn test_empty_location_clears_filter() {
        let filter = ListingFilter::new().with_location("Portland, OR").with_location("");

        assert_eq!(filter.location, None);
        assert_eq!(filter.apply(&sample()).len(), 3);
    }

    #[test]
    fn test_query_and_location_combine() {
        let listings = sample();
        let filter = ListingFilter::new()
            .with_query("loft")
            .with_location("Portland, OR");

        assert_eq!(ids(&filter.apply(&listings)), vec![1]);
    }

    #[test]
    fn test_no_match_yields_empty_result() {
        assert!(ListingFilter::new().with_query("igloo").apply(&sample()).is_empty());
    }

    #[test]
    fn test_only_available() {
        let filter = ListingFilter::new().only_available(true);

        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2]);
    }

    #[test]
    fn test_location_slugs() {
        assert_eq!(location_slug("Yaletown, Vancouver"), "yaletown-vancouver");

        let locations = ["Yaletown, Vancouver", "Downtown, Vancouver"];
        assert_eq!(
            location_from_slug("downtown-vancouver", &locations),
            Some("Downtown, Vancouver")
        );
        assert_eq!(location_from_slug("kitsilano-vancouver", &locations), None);
    }
}
