//! References to listing photos.
use serde::Serialize;

/// Served from the site's static directory, used whenever a listing has no usable photo.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.svg";

/// Path to a photo, as referenced from the generated HTML.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.trim().is_empty() {
            return Self::placeholder();
        }

        Self(path)
    }

    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_IMAGE.to_string())
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_IMAGE
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    /// Alt text for the photo at `position` (0-based) in a sequence of `len` photos.
    ///
    /// ```rust
    /// use stays::image::ImageRef;
    ///
    /// let image = ImageRef::new("/photos/howe/3.jpg");
    /// assert_eq!(image.alt_for("Howe Street Duplex", 2, 17), "Howe Street Duplex, photo 3 of 17");
    /// ```
    pub fn alt_for(&self, title: &str, position: usize, len: usize) -> String {
        if self.is_placeholder() {
            return format!("{}, no photo available", title);
        }

        format!("{}, photo {} of {}", title, position + 1, len)
    }
}

/// Turn a list of paths into image references. Blank paths degrade to the placeholder.
pub fn resolve_images<I, S>(paths: I) -> Vec<ImageRef>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    paths.into_iter().map(ImageRef::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_path_becomes_placeholder() {
        assert!(ImageRef::new("").is_placeholder());
        assert!(ImageRef::new("   ").is_placeholder());
        assert!(!ImageRef::new("/photos/richards/1.jpeg").is_placeholder());
    }

    #[test]
    fn test_resolve_images_keeps_order() {
        let images = resolve_images(["/a.jpg", "", "/c.jpg"]);

        assert_eq!(images.len(), 3);
        assert_eq!(images[0].path(), "/a.jpg");
        assert_eq!(images[1].path(), PLACEHOLDER_IMAGE);
        assert_eq!(images[2].path(), "/c.jpg");
    }

    #[test]
    fn test_alt_text() {
        let image = ImageRef::new("/photos/richards/4.jpeg");
        assert_eq!(image.alt_for("Harbor Loft", 3, 8), "Harbor Loft, photo 4 of 8");

        let placeholder = ImageRef::placeholder();
        assert_eq!(
            placeholder.alt_for("Harbor Loft", 0, 1),
            "Harbor Loft, no photo available"
        );
    }
}
