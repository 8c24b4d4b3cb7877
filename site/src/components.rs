//! Markup shared between routes.
use maud::{Markup, html};
use maudit::route::RouteExt;
use stays::errors::GalleryError;
use stays::filter::location_slug;
use stays::{Gallery, ImageRef, Listing};

use crate::routes::{
    LocationPage, LocationParams, PhotoPage, PhotoParams, PropertyPage, PropertyParams,
};

pub fn property_url(listing: &Listing) -> String {
    PropertyPage.url(PropertyParams {
        slug: listing.slug.to_string(),
    })
}

/// URL of the lightbox page for the photo at `index` (0-based).
pub fn photo_url(listing: &Listing, index: usize) -> String {
    PhotoPage.url(PhotoParams {
        slug: listing.slug.to_string(),
        photo: index + 1,
    })
}

pub fn location_url(location: &str) -> String {
    LocationPage.url(LocationParams {
        location: location_slug(location),
    })
}

pub fn availability_badge(listing: &Listing) -> Markup {
    html! {
        @if listing.available {
            span.badge.badge-available { "Available" }
        } @else {
            span.badge.badge-booked { "Fully booked" }
        }
    }
}

/// How many amenities a card shows before collapsing the rest into "+N more".
const CARD_AMENITIES: usize = 3;

/// Result count line for the search page, kept in sync with `search.ts`.
pub fn places_label(count: usize) -> String {
    if count == 1 {
        "1 place to stay".to_string()
    } else {
        format!("{} places to stay", count)
    }
}

/// Card shown in listing grids. The data attributes feed the client-side search.
pub fn listing_card(listing: &Listing) -> Markup {
    let cover = listing.cover_image();
    let (amenities, hidden) = listing.amenity_preview(CARD_AMENITIES);

    html! {
        article.listing-card
            data-listing=(listing.slug)
            data-title=(listing.title)
            data-description=(listing.description)
            data-location=(listing.location)
        {
            a href=(property_url(listing)) {
                img src=(cover.path()) alt=(cover.alt_for(listing.title, 0, listing.images.len().max(1))) loading="lazy" onerror="this.onerror=null;this.src='/images/placeholder.svg'";
            }
            div.listing-card-body {
                p.listing-location { (listing.location) }
                h3 { a href=(property_url(listing)) { (listing.title) } }
                p { (listing.description) }
                p.listing-capacity { (listing.capacity_summary()) }
                ul.amenity-chips {
                    @for amenity in amenities {
                        li.chip { (amenity) }
                    }
                    @if hidden > 0 {
                        li.chip.chip-more { "+" (hidden) " more" }
                    }
                }
                div.listing-card-footer {
                    span.price { (listing.formatted_price()) }
                    span.rating aria-label=(format!("Rated {} out of 5", listing.formatted_rating())) { "★ " (listing.formatted_rating()) }
                    (availability_badge(listing))
                }
            }
        }
    }
}

pub fn listing_grid(listings: &[&Listing]) -> Markup {
    html! {
        div.listing-grid {
            @for listing in listings {
                (listing_card(listing))
            }
        }
    }
}

/// Location shortcuts, `current` is highlighted.
pub fn location_pills(locations: &[&str], current: Option<&str>) -> Markup {
    html! {
        ul.location-pills {
            li {
                a.pill.(if current.is_none() { "pill-active" } else { "" }) href="/" { "All locations" }
            }
            @for location in locations {
                li {
                    a.pill.(if current == Some(*location) { "pill-active" } else { "" }) href=(location_url(location)) {
                        (location)
                    }
                }
            }
        }
    }
}

/// Booking panel. Direct booking goes to the host by email, platform links open in a new browsing context.
pub fn booking_buttons(listing: &Listing) -> Markup {
    html! {
        div.booking {
            div.booking-header {
                p.price { (listing.formatted_price()) }
                span.rating { "★ " (listing.formatted_rating()) }
            }
            (availability_badge(listing))
            @if listing.available {
                @if let Some(direct) = listing.direct_booking() {
                    a.btn.btn-primary href=(direct.url) { (direct.platform) }
                }
            }
            @for link in listing.platform_bookings() {
                a.btn.btn-secondary
                    href=(link.url)
                    target="_blank"
                    rel="noopener noreferrer"
                {
                    @if listing.available {
                        "Book on " (link.platform)
                    } @else {
                        "View on " (link.platform)
                    }
                }
            }
            @if listing.available && listing.direct_booking().is_some() {
                p.booking-note { "Best price guarantee when booking direct" }
            }
        }
    }
}

/// Inline photo carousel with a thumbnail strip.
///
/// Works without JavaScript: every photo links to its own lightbox page. `lightbox.ts` takes over when it loads.
pub fn inline_gallery(listing: &Listing, gallery: &Gallery) -> Markup {
    let len = gallery.len();
    let current = gallery.current();

    html! {
        section.gallery data-gallery=(listing.slug) data-length=(len) data-index=(gallery.current_index()) {
            div.gallery-stage {
                a.gallery-open href=(photo_url(listing, gallery.current_index())) {
                    img.gallery-current
                        src=(current.path())
                        alt=(current.alt_for(listing.title, gallery.current_index(), len))
                        onerror="this.onerror=null;this.src='/images/placeholder.svg'";
                }
                @if len > 1 {
                    a.gallery-nav.gallery-prev href=(photo_url(listing, gallery.previous_index())) aria-label="Previous photo" { "‹" }
                    a.gallery-nav.gallery-next href=(photo_url(listing, gallery.next_index())) aria-label="Next photo" { "›" }
                }
                p.gallery-counter { span.gallery-position { (gallery.current_index() + 1) } " / " (len) }
            }
            ol.gallery-thumbs {
                @for (i, image) in gallery.images().iter().enumerate() {
                    li id=(format!("photo-{}", i + 1)) {
                        a.gallery-thumb href=(photo_url(listing, i)) data-index=(i) {
                            img src=(image.path()) alt=(image.alt_for(listing.title, i, len)) loading="lazy";
                        }
                    }
                }
            }
            div.lightbox hidden role="dialog" aria-modal="true" aria-label=(format!("{} photos", listing.title)) {
                button.lightbox-close type="button" aria-label="Close" { "×" }
                button.lightbox-prev type="button" aria-label="Previous photo" { "‹" }
                img.lightbox-image src=(current.path()) alt="";
                button.lightbox-next type="button" aria-label="Next photo" { "›" }
                p.lightbox-counter {}
            }
        }
    }
}

/// One photo of the standalone lightbox page, with wrapping neighbours.
#[derive(Debug, Clone)]
pub struct PhotoView {
    /// 0-based position in the gallery.
    pub index: usize,
    pub len: usize,
    pub image: ImageRef,
    pub alt: String,
    /// Back to the property page, scrolled to this photo.
    pub close_url: String,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
}

/// Open the gallery of `listing` on `photo`, numbered from 1 as in the page URL.
pub fn photo_view(listing: &Listing, photo: usize) -> Result<PhotoView, GalleryError> {
    let mut gallery = listing.gallery();
    let index = photo.checked_sub(1).ok_or(GalleryError::IndexOutOfRange {
        index: photo,
        len: gallery.len(),
    })?;
    gallery.jump_to(index)?;
    gallery.open();

    let len = gallery.len();
    let image = gallery.current().clone();
    let (previous_url, next_url) = if len > 1 {
        (
            Some(photo_url(listing, gallery.previous_index())),
            Some(photo_url(listing, gallery.next_index())),
        )
    } else {
        (None, None)
    };

    Ok(PhotoView {
        index,
        len,
        alt: image.alt_for(listing.title, index, len),
        image,
        close_url: format!("{}#photo-{}", property_url(listing), index + 1),
        previous_url,
        next_url,
    })
}

/// Lightbox markup for a [`PhotoView`]. `photo-keys.ts` binds the arrow keys and Escape to these links.
pub fn photo_lightbox(listing: &Listing, view: &PhotoView) -> Markup {
    html! {
        div.lightbox.lightbox-page role="dialog" aria-label=(view.alt) {
            a.lightbox-close href=(view.close_url) aria-label="Close" { "×" }
            @if let Some(previous_url) = &view.previous_url {
                a.lightbox-prev href=(previous_url) rel="prev" aria-label="Previous photo" { "‹" }
            }
            figure {
                img.lightbox-image src=(view.image.path()) alt=(view.alt) onerror="this.onerror=null;this.src='/images/placeholder.svg'";
                figcaption {
                    a href=(property_url(listing)) { (listing.title) }
                    span.lightbox-counter { (view.index + 1) " / " (view.len) }
                }
            }
            @if let Some(next_url) = &view.next_url {
                a.lightbox-next href=(next_url) rel="next" aria-label="Next photo" { "›" }
            }
        }
    }
}
