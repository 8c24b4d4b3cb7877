//! Photo gallery and lightbox state.
//!
//! A [`Gallery`] is an ordered, never empty sequence of photos with a cursor and a visibility flag.
//! Navigation is cyclic: stepping past the last photo lands on the first one and vice versa, so there is no terminal state.
//!
//! ## Example
//! ```rust
//! use stays::gallery::Gallery;
//! use stays::image::resolve_images;
//!
//! let mut gallery = Gallery::new(resolve_images(["/1.jpg", "/2.jpg", "/3.jpg"]));
//! gallery.open();
//! gallery.previous();
//! assert_eq!(gallery.current_index(), 2);
//!
//! // Closing keeps the cursor where it was.
//! gallery.close();
//! gallery.open();
//! assert_eq!(gallery.current().path(), "/3.jpg");
//! ```
use log::trace;

use crate::errors::GalleryError;
use crate::image::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<ImageRef>,
    index: usize,
    open: bool,
}

impl Gallery {
    /// Create a closed gallery positioned on the first photo.
    ///
    /// An empty list of photos results in a gallery holding only the placeholder image.
    pub fn new(images: Vec<ImageRef>) -> Self {
        let images = if images.is_empty() {
            vec![ImageRef::placeholder()]
        } else {
            images
        };

        Self {
            images,
            index: 0,
            open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`, a gallery holds at least the placeholder.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &ImageRef {
        &self.images[self.index]
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        trace!(index = self.index; "gallery opened");
        self.open = true;
    }

    /// Hide the lightbox. The current photo is kept so that reopening resumes where the visitor left off.
    pub fn close(&mut self) {
        trace!(index = self.index; "gallery closed");
        self.open = false;
    }

    pub fn next(&mut self) {
        self.index = self.next_index();
        trace!(index = self.index; "gallery moved forward");
    }

    pub fn previous(&mut self) {
        self.index = self.previous_index();
        trace!(index = self.index; "gallery moved back");
    }

    /// Index the gallery would land on after [`Gallery::next`], without moving.
    pub fn next_index(&self) -> usize {
        self.offset(1)
    }

    /// Index the gallery would land on after [`Gallery::previous`], without moving.
    pub fn previous_index(&self) -> usize {
        self.offset(-1)
    }

    /// Move to the photo at `index`. Out of range indices are rejected and leave the gallery untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        self.index = index;
        trace!(index = self.index; "gallery jumped");
        Ok(())
    }

    /// Move to the photo at `index`, clamping to the last photo when out of range.
    pub fn jump_to_clamped(&mut self, index: usize) {
        self.index = index.min(self.len() - 1);
        trace!(index = self.index, requested = index; "gallery jumped");
    }

    /// Jump (clamped) to `index` and show the lightbox, as a thumbnail click does.
    pub fn open_at(&mut self, index: usize) {
        self.jump_to_clamped(index);
        self.open();
    }

    fn offset(&self, delta: isize) -> usize {
        let len = self.len() as isize;
        ((self.index as isize + delta + len) % len) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{PLACEHOLDER_IMAGE, resolve_images};

    fn gallery_of(len: usize) -> Gallery {
        Gallery::new(resolve_images(
            (0..len).map(|i| format!("/images/test/{:02}.jpg", i + 1)),
        ))
    }

    #[test]
    fn test_new_gallery_is_closed_on_first_photo() {
        let gallery = gallery_of(4);

        assert!(!gallery.is_open());
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.current().path(), "/images/test/01.jpg");
    }

    #[test]
    fn test_empty_gallery_falls_back_to_placeholder() {
        let mut gallery = Gallery::new(Vec::new());

        assert_eq!(gallery.len(), 1);
        assert!(!gallery.is_empty());
        assert_eq!(gallery.current().path(), PLACEHOLDER_IMAGE);

        gallery.next();
        assert_eq!(gallery.current_index(), 0);
        gallery.previous();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut gallery = gallery_of(10);
        gallery.previous();
        assert_eq!(gallery.current_index(), 9);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut gallery = gallery_of(3);
        gallery.next();
        gallery.next();
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_next_then_previous_is_identity() {
        for len in 1..=6 {
            for start in 0..len {
                let mut gallery = gallery_of(len);
                gallery.jump_to(start).unwrap();

                gallery.next();
                gallery.previous();
                assert_eq!(gallery.current_index(), start);

                gallery.previous();
                gallery.next();
                assert_eq!(gallery.current_index(), start);
            }
        }
    }

    #[test]
    fn test_index_stays_in_bounds() {
        // Deterministic walk mixing both directions.
        let moves = [1, 1, -1, 1, 1, 1, -1, -1, -1, -1, -1, 1, -1, -1, 1, 1, 1, 1, 1, 1, 1];

        for len in 1..=7 {
            for start in 0..len {
                let mut gallery = gallery_of(len);
                gallery.jump_to(start).unwrap();

                for step in moves {
                    if step > 0 {
                        gallery.next();
                    } else {
                        gallery.previous();
                    }
                    assert!(gallery.current_index() < len);
                }
            }
        }
    }

    #[test]
    fn test_peek_does_not_move() {
        let gallery = gallery_of(5);

        assert_eq!(gallery.next_index(), 1);
        assert_eq!(gallery.previous_index(), 4);
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_close_keeps_current_photo() {
        let mut gallery = gallery_of(6);
        gallery.open();
        gallery.next();
        gallery.next();
        gallery.close();

        assert!(!gallery.is_open());
        assert_eq!(gallery.current_index(), 2);

        gallery.open();
        assert!(gallery.is_open());
        assert_eq!(gallery.current_index(), 2);
    }

    #[test]
    fn test_jump_to_rejects_out_of_range() {
        let mut gallery = gallery_of(3);
        gallery.jump_to(1).unwrap();

        assert_eq!(
            gallery.jump_to(3),
            Err(GalleryError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(gallery.current_index(), 1);
    }

    #[test]
    fn test_jump_to_clamped() {
        let mut gallery = gallery_of(3);

        gallery.jump_to_clamped(42);
        assert_eq!(gallery.current_index(), 2);

        gallery.jump_to_clamped(0);
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_open_at() {
        let mut gallery = gallery_of(8);
        gallery.open_at(5);

        assert!(gallery.is_open());
        assert_eq!(gallery.current_index(), 5);
    }
}
