mod index;
mod listings_json;
mod locations;
mod not_found;
mod photos;
mod property;

pub use index::Index;
pub use listings_json::ListingsIndex;
pub use locations::{LocationPage, LocationParams};
pub use not_found::NotFound;
pub use photos::{PhotoPage, PhotoParams};
pub use property::{PropertyPage, PropertyParams};
