//! Domain of the vacation rental site: the listing catalog, the photo gallery and the listing filter.
//!
//! Nothing in this crate renders HTML, see the `stays-website` crate for the pages themselves.

pub mod catalog;
pub mod errors;
pub mod filter;
pub mod gallery;
pub mod image;
pub mod listing;

pub use filter::ListingFilter;
pub use gallery::Gallery;
pub use image::ImageRef;
pub use listing::Listing;
