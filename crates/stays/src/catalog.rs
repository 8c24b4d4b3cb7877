//! The properties published on the site.
use log::debug;

use crate::errors::CatalogError;
use crate::listing::{
    BookingLink, CapacityNotes, FeatureGroup, FeatureKind, Listing, Neighborhood, Platform,
    Restaurant, WalkingDistance,
};

/// Direct bookings go to the host's inbox.
pub const DIRECT_BOOKING: &str = "mailto:stay@vancityshortstays.com?subject=Booking%20request";

static LISTINGS: &[Listing] = &[
    Listing {
        id: 1,
        slug: "homer",
        title: "Spacious 3BR Townhouse near Vibrant Yaletown",
        description: "Modern townhouse with stunning views, perfect for families or groups.",
        overview: "Welcome to our spacious 3BR townhouse near vibrant Yaletown! This stylish retreat offers a modern kitchen, cozy living space, and three comfy bedrooms, ideal for families or groups. Located steps from Yaletown's top restaurants, shops, and nightlife, it's perfect for exploring Vancouver. Relax on the private patio or unwind in the bright, open living area. Your perfect getaway awaits!",
        nightly_price: 399,
        currency: "CAD",
        images: &[
            "/photos/homer/HomerLaunder1.jpg",
            "/photos/homer/HomerLaunder2.jpg",
            "/photos/homer/HomerLaunder3.jpg",
            "/photos/homer/HomerLaunder4.jpg",
            "/photos/homer/HomerLaunder5.jpg",
            "/photos/homer/HomerLaunder6.jpg",
            "/photos/homer/HomerLaunder7.jpg",
            "/photos/homer/HomerLaunder8.jpg",
            "/photos/homer/HomerLaunder9.jpg",
            "/photos/homer/HomerLaunder10.jpg",
            "/photos/homer/HomerLaunder11.jpg",
            "/photos/homer/HomerLaunder12.jpg",
            "/photos/homer/HomerLaunder13.jpg",
            "/photos/homer/HomerLaunder14.jpg",
            "/photos/homer/HomerLaunder15.jpg",
            "/photos/homer/HomerLaunder16.jpg",
            "/photos/homer/HomerLaunder17.jpg",
            "/photos/homer/HomerLaunder18.jpg",
            "/photos/homer/HomerLaunder19.jpg",
            "/photos/homer/HomerLaunder20.jpg",
            "/photos/homer/HomerLaunder21.jpg",
            "/photos/homer/HomerLaunder22.jpg",
            "/photos/homer/HomerLaunder23.jpg",
        ],
        bedrooms: 3,
        bathrooms: 3,
        guests: 7,
        capacity_notes: CapacityNotes {
            guests: "Perfect for families",
            bedrooms: "King & Queen beds",
            bathrooms: "Ensuite in master",
        },
        location: "Yaletown, Vancouver",
        amenities: &["Fireplace", "Full Kitchen", "Washer/Dryer", "WiFi", "Parking"],
        features: &[
            FeatureGroup {
                kind: FeatureKind::Bedrooms,
                heading: "Luxurious Bedrooms",
                items: &[
                    "Master suite with king bed and ensuite",
                    "Second bedroom with queen bed",
                    "Third bedroom with two singles",
                    "Premium linens and blackout curtains",
                    "Built-in closets in all rooms",
                ],
            },
            FeatureGroup {
                kind: FeatureKind::Living,
                heading: "Living Space",
                items: &[
                    "Open concept living area",
                    "Floor-to-ceiling windows",
                    "Designer furniture",
                    "Private balcony",
                    "Smart home controls",
                ],
            },
            FeatureGroup {
                kind: FeatureKind::Kitchen,
                heading: "Gourmet Kitchen",
                items: &[
                    "Wolf gas range",
                    "Sub-Zero refrigerator",
                    "Wine fridge",
                    "Nespresso machine",
                    "Full cookware set",
                ],
            },
            FeatureGroup {
                kind: FeatureKind::Amenities,
                heading: "Modern Amenities",
                items: &[
                    "High-speed fiber WiFi",
                    "65\" 4K Smart TV",
                    "Sonos sound system",
                    "Washer/dryer",
                    "Central air conditioning",
                ],
            },
        ],
        rating: 4.9,
        reviews: 42,
        available: true,
        neighborhood: Neighborhood {
            restaurants: &[
                Restaurant {
                    name: "Blue Water Cafe",
                    cuisine: "Seafood",
                    rating: 4.8,
                    price_level: 4,
                    walk_minutes: 3,
                },
                Restaurant {
                    name: "Minami Restaurant",
                    cuisine: "Japanese",
                    rating: 4.7,
                    price_level: 3,
                    walk_minutes: 5,
                },
                Restaurant {
                    name: "Homer St. Cafe",
                    cuisine: "Modern Canadian",
                    rating: 4.6,
                    price_level: 3,
                    walk_minutes: 1,
                },
                Restaurant {
                    name: "Medina Cafe",
                    cuisine: "Mediterranean",
                    rating: 4.9,
                    price_level: 2,
                    walk_minutes: 8,
                },
            ],
            walking: &[
                WalkingDistance {
                    place: "Yaletown-Roundhouse Station",
                    minutes: 4,
                },
                WalkingDistance {
                    place: "Vancouver Seawall",
                    minutes: 7,
                },
                WalkingDistance {
                    place: "Rogers Arena",
                    minutes: 15,
                },
                WalkingDistance {
                    place: "Vancouver City Centre",
                    minutes: 12,
                },
                WalkingDistance {
                    place: "Granville Island",
                    minutes: 20,
                },
            ],
        },
        booking: &[
            BookingLink {
                platform: Platform::Direct,
                url: DIRECT_BOOKING,
            },
            BookingLink {
                platform: Platform::Airbnb,
                url: "https://www.airbnb.com/rooms/1234567",
            },
        ],
    },
    Listing {
        id: 2,
        slug: "howe",
        title: "Stunning 2 Bedroom Duplex in Yaletown with Fireplace",
        description: "Luxurious duplex featuring modern amenities and prime location.",
        overview: "Welcome to our stunning duplex in the heart of downtown Vancouver! This stylish two-level retreat features a cozy gas fireplace, modern amenities, and a fantastic location just 5 minutes from the beach. The spacious layout, complete with two comfortable bedrooms and a fully equipped kitchen, makes it perfect for families or friends. Enjoy easy access to downtown's best attractions, restaurants, and shopping, all while having a peaceful home base to return to.",
        nightly_price: 289,
        currency: "CAD",
        images: &[
            "/photos/howe/1.jpg",
            "/photos/howe/2.jpg",
            "/photos/howe/3.jpg",
            "/photos/howe/4.jpg",
            "/photos/howe/5.jpg",
            "/photos/howe/6.jpg",
            "/photos/howe/7.jpg",
            "/photos/howe/8.jpg",
            "/photos/howe/9.jpg",
            "/photos/howe/10.jpg",
            "/photos/howe/11.jpg",
            "/photos/howe/12.jpg",
            "/photos/howe/13.jpg",
            "/photos/howe/14.jpg",
            "/photos/howe/15.jpg",
            "/photos/howe/16.jpg",
            "/photos/howe/17.jpg",
        ],
        bedrooms: 2,
        bathrooms: 2,
        guests: 5,
        capacity_notes: CapacityNotes {
            guests: "Comfortable space",
            bedrooms: "Queen & Double beds",
            bathrooms: "Modern fixtures",
        },
        location: "Downtown, Vancouver",
        amenities: &["Fireplace", "Full Kitchen", "Washer/Dryer", "WiFi", "City Views"],
        features: &[
            FeatureGroup {
                kind: FeatureKind::Bedrooms,
                heading: "Comfortable Bedrooms",
                items: &[
                    "Master bedroom with queen bed",
                    "Second bedroom with double bed",
                    "Premium linens and pillows",
                    "Built-in closets",
                    "Black-out curtains",
                ],
            },
            FeatureGroup {
                kind: FeatureKind::Living,
                heading: "Living Space",
                items: &[
                    "Spacious duplex layout",
                    "Gas fireplace",
                    "Designer furniture",
                    "Private outdoor space",
                    "City views",
                ],
            },
            FeatureGroup {
                kind: FeatureKind::Kitchen,
                heading: "Fully Equipped Kitchen",
                items: &[
                    "Full-size appliances",
                    "Dishwasher",
                    "Coffee maker",
                    "Complete cookware set",
                    "Dining area for 6",
                ],
            },
            FeatureGroup {
                kind: FeatureKind::Amenities,
                heading: "Modern Amenities",
                items: &[
                    "High-speed WiFi",
                    "55\" Smart TV",
                    "In-unit laundry",
                    "Air conditioning",
                    "Building fitness center",
                ],
            },
        ],
        rating: 4.8,
        reviews: 36,
        available: true,
        neighborhood: Neighborhood {
            restaurants: &[
                Restaurant {
                    name: "Parlour",
                    cuisine: "Pizza & Cocktails",
                    rating: 4.7,
                    price_level: 3,
                    walk_minutes: 4,
                },
                Restaurant {
                    name: "Earls Kitchen",
                    cuisine: "Modern American",
                    rating: 4.6,
                    price_level: 3,
                    walk_minutes: 3,
                },
                Restaurant {
                    name: "Vij's Restaurant",
                    cuisine: "Indian",
                    rating: 4.8,
                    price_level: 3,
                    walk_minutes: 7,
                },
                Restaurant {
                    name: "Joe Fortes",
                    cuisine: "Seafood",
                    rating: 4.7,
                    price_level: 4,
                    walk_minutes: 10,
                },
            ],
            walking: &[
                WalkingDistance {
                    place: "Granville Street",
                    minutes: 2,
                },
                WalkingDistance {
                    place: "Sunset Beach",
                    minutes: 5,
                },
                WalkingDistance {
                    place: "Granville Island",
                    minutes: 15,
                },
                WalkingDistance {
                    place: "Downtown Shopping",
                    minutes: 8,
                },
                WalkingDistance {
                    place: "English Bay Beach",
                    minutes: 12,
                },
            ],
        },
        booking: &[
            BookingLink {
                platform: Platform::Direct,
                url: DIRECT_BOOKING,
            },
            BookingLink {
                platform: Platform::BookingDotCom,
                url: "https://www.booking.com/hotel/ca/stunning-2-bedroom-duplex-in-yaletown-with-fireplace-and-5-min-to-beach.en-gb.html",
            },
        ],
    },
    Listing {
        id: 3,
        slug: "richards",
        title: "Elegant 1BR Loft with City Views",
        description: "Contemporary suite offering comfort and convenience in the heart of the city.",
        overview: "Discover ultimate downtown living in this stylish one-bedroom penthouse! Enjoy breathtaking city views from a sleek, modern living space. The cozy bedroom features a plush queen bed, while the kitchen comes fully equipped for your cooking needs. Perfectly situated just steps from top dining, shopping, and entertainment spots, this penthouse offers an ideal retreat for both business and leisure travelers.",
        nightly_price: 279,
        currency: "CAD",
        images: &[
            "/photos/seymour/1.jpeg",
            "/photos/seymour/2.jpeg",
            "/photos/seymour/3.jpeg",
            "/photos/seymour/4.jpeg",
            "/photos/seymour/5.jpeg",
            "/photos/seymour/6.jpeg",
            "/photos/seymour/7.jpeg",
            "/photos/seymour/8.jpeg",
            "/photos/seymour/9.jpeg",
            "/photos/seymour/10.jpeg",
        ],
        bedrooms: 1,
        bathrooms: 1,
        guests: 2,
        capacity_notes: CapacityNotes {
            guests: "Perfect for couples",
            bedrooms: "Queen bed",
            bathrooms: "Modern fixtures",
        },
        location: "Downtown, Vancouver",
        amenities: &["City Views", "Full Kitchen", "Washer/Dryer", "WiFi"],
        features: &[
            FeatureGroup {
                kind: FeatureKind::Bedrooms,
                heading: "Luxurious Bedroom",
                items: &[
                    "Luxurious queen bed with premium linens",
                    "Blackout curtains for optimal rest",
                    "Built-in closet with organizers",
                    "Smart TV in bedroom",
                    "City views from bedroom window",
                ],
            },
            FeatureGroup {
                kind: FeatureKind::Living,
                heading: "Living Space",
                items: &[
                    "Floor-to-ceiling windows",
                    "Modern designer furniture",
                    "Dedicated workspace",
                    "Smart home controls",
                    "Stunning city views",
                ],
            },
            FeatureGroup {
                kind: FeatureKind::Kitchen,
                heading: "Gourmet Kitchen",
                items: &[
                    "Full-size stainless appliances",
                    "Quartz countertops",
                    "Coffee maker & grinder",
                    "Complete cookware set",
                    "Wine glasses & bar tools",
                ],
            },
            FeatureGroup {
                kind: FeatureKind::Amenities,
                heading: "Modern Amenities",
                items: &[
                    "High-speed fiber WiFi",
                    "55\" 4K Smart TV",
                    "Sonos speaker",
                    "In-suite laundry",
                    "Central air conditioning",
                ],
            },
        ],
        rating: 4.9,
        reviews: 28,
        available: true,
        neighborhood: Neighborhood {
            restaurants: &[
                Restaurant {
                    name: "Joe Fortes",
                    cuisine: "Seafood",
                    rating: 4.7,
                    price_level: 4,
                    walk_minutes: 5,
                },
                Restaurant {
                    name: "Nightingale",
                    cuisine: "Modern Canadian",
                    rating: 4.8,
                    price_level: 3,
                    walk_minutes: 3,
                },
                Restaurant {
                    name: "Glowbal",
                    cuisine: "International",
                    rating: 4.6,
                    price_level: 3,
                    walk_minutes: 7,
                },
                Restaurant {
                    name: "Hydra",
                    cuisine: "Mediterranean",
                    rating: 4.7,
                    price_level: 3,
                    walk_minutes: 6,
                },
            ],
            walking: &[
                WalkingDistance {
                    place: "Vancouver City Centre Station",
                    minutes: 3,
                },
                WalkingDistance {
                    place: "Robson Street Shopping",
                    minutes: 2,
                },
                WalkingDistance {
                    place: "Vancouver Art Gallery",
                    minutes: 5,
                },
                WalkingDistance {
                    place: "Granville Entertainment",
                    minutes: 4,
                },
                WalkingDistance {
                    place: "Canada Place",
                    minutes: 12,
                },
            ],
        },
        booking: &[
            BookingLink {
                platform: Platform::Direct,
                url: DIRECT_BOOKING,
            },
            BookingLink {
                platform: Platform::Airbnb,
                url: "https://www.airbnb.com/rooms/1234567",
            },
            BookingLink {
                platform: Platform::BookingDotCom,
                url: "https://booking.com/",
            },
        ],
    },
];

/// Every listing, in the order they are shown on the site.
pub fn all() -> &'static [Listing] {
    LISTINGS
}

pub fn find(slug: &str) -> Option<&'static Listing> {
    LISTINGS.iter().find(|listing| listing.slug == slug)
}

/// Like [`find`], for callers that need to report a missing listing.
pub fn get(slug: &str) -> Result<&'static Listing, CatalogError> {
    find(slug).ok_or_else(|| CatalogError::UnknownListing {
        slug: slug.to_string(),
    })
}

/// Distinct location labels, in the order they first appear in the catalog.
pub fn locations() -> Vec<&'static str> {
    let mut locations: Vec<&'static str> = Vec::new();
    for listing in LISTINGS {
        if !locations.contains(&listing.location) {
            locations.push(listing.location);
        }
    }

    debug!(count = locations.len(); "collected listing locations");
    locations
}
