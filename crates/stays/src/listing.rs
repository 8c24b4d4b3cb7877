//! Records describing the rental properties.
//!
//! Listings are defined at build time in [`crate::catalog`] and never change afterwards.
use std::fmt;

use serde::Serialize;

use crate::gallery::Gallery;
use crate::image::{ImageRef, resolve_images};

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: u32,
    /// URL segment for the listing's pages, unique across the catalog.
    pub slug: &'static str,
    pub title: &'static str,
    /// One-line summary shown on cards, searched by the listing filter.
    pub description: &'static str,
    /// Longer introduction for the property page.
    pub overview: &'static str,
    /// Price per night in whole units of `currency`.
    pub nightly_price: u32,
    pub currency: &'static str,
    pub images: &'static [&'static str],
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub guests: u8,
    pub capacity_notes: CapacityNotes,
    /// Display label, also used verbatim by the location filter.
    pub location: &'static str,
    pub amenities: &'static [&'static str],
    pub features: &'static [FeatureGroup],
    pub rating: f32,
    pub reviews: u32,
    pub available: bool,
    pub neighborhood: Neighborhood,
    pub booking: &'static [BookingLink],
}

/// Short qualifiers shown under the guest, bedroom and bathroom counts.
#[derive(Debug, Clone, Serialize)]
pub struct CapacityNotes {
    pub guests: &'static str,
    pub bedrooms: &'static str,
    pub bathrooms: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureKind {
    Bedrooms,
    Living,
    Kitchen,
    Amenities,
}

/// A headed list of features, e.g. everything about the kitchen.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureGroup {
    pub kind: FeatureKind,
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Neighborhood {
    pub restaurants: &'static [Restaurant],
    pub walking: &'static [WalkingDistance],
}

#[derive(Debug, Clone, Serialize)]
pub struct Restaurant {
    pub name: &'static str,
    pub cuisine: &'static str,
    pub rating: f32,
    /// 1 to 4, shown as dollar signs.
    pub price_level: u8,
    pub walk_minutes: u16,
}

impl Restaurant {
    pub fn price_symbol(&self) -> String {
        "$".repeat(self.price_level.clamp(1, 4) as usize)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WalkingDistance {
    pub place: &'static str,
    pub minutes: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Airbnb,
    BookingDotCom,
    Direct,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Airbnb => "Airbnb",
            Platform::BookingDotCom => "Booking.com",
            Platform::Direct => "Book Directly - Best Rate",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a guest can book, either a third-party platform or the host directly.
#[derive(Debug, Clone, Serialize)]
pub struct BookingLink {
    pub platform: Platform,
    pub url: &'static str,
}

impl Listing {
    /// A closed gallery over this listing's photos.
    pub fn gallery(&self) -> Gallery {
        Gallery::new(resolve_images(self.images.iter().copied()))
    }

    pub fn cover_image(&self) -> ImageRef {
        self.images
            .first()
            .map(|path| ImageRef::new(*path))
            .unwrap_or_else(ImageRef::placeholder)
    }

    pub fn formatted_price(&self) -> String {
        match self.currency {
            "USD" | "CAD" => format!("${} / night", self.nightly_price),
            code => format!("{} {} / night", self.nightly_price, code),
        }
    }

    pub fn formatted_rating(&self) -> String {
        format!("{:.1}", self.rating)
    }

    pub fn capacity_summary(&self) -> String {
        format!(
            "{} · {} · up to {} guests",
            plural(self.bedrooms, "bedroom", "bedrooms"),
            plural(self.bathrooms, "bathroom", "bathrooms"),
            self.guests
        )
    }

    /// The first `limit` amenities, and how many were left out.
    pub fn amenity_preview(&self, limit: usize) -> (&'static [&'static str], usize) {
        let shown = &self.amenities[..self.amenities.len().min(limit)];
        (shown, self.amenities.len() - shown.len())
    }

    pub fn feature_group(&self, kind: FeatureKind) -> Option<&FeatureGroup> {
        self.features.iter().find(|group| group.kind == kind)
    }

    /// Third-party platforms first, direct booking is shown on its own.
    pub fn platform_bookings(&self) -> impl Iterator<Item = &BookingLink> {
        self.booking
            .iter()
            .filter(|link| link.platform != Platform::Direct)
    }

    pub fn direct_booking(&self) -> Option<&BookingLink> {
        self.booking
            .iter()
            .find(|link| link.platform == Platform::Direct)
    }
}

fn plural(count: u8, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", count, many)
    }
}
