//! Error types for the listing catalog and the photo gallery.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors bubbling out of `main` are printed with Debug, show the Display message instead.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Photo {index} does not exist, this gallery only has {len} photos (valid range is 0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No listing with slug `{slug}` in the catalog")]
    UnknownListing { slug: String },
    #[error("No listing is located in `{location}`")]
    UnknownLocation { location: String },
}

impl_debug_for_error!(GalleryError, CatalogError);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_shows_message() {
        let err = GalleryError::IndexOutOfRange { index: 12, len: 10 };

        assert_eq!(format!("{:?}", err), format!("{}", err));
        assert!(err.to_string().contains("only has 10 photos"));
    }
}
