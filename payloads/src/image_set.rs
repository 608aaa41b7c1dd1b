//! Form-side bookkeeping for a property's image gallery.
//!
//! An edit form shows one ordered strip of previews: the images already
//! persisted on the backend, followed by files the user just picked. The
//! two provenances behave differently on removal (a freshly picked file
//! owns a temporary display handle that must be released; a persisted URL
//! owns nothing), so entries are tagged rather than kept in two parallel
//! lists with offset arithmetic.
//!
//! The handle type `H` is supplied by the caller. Release is expressed
//! through ownership: `remove_at` hands the entry back, and dropping a
//! `New` entry drops its handle, so a handle whose `Drop` revokes the
//! underlying resource is released exactly once.

use crate::MAX_PROPERTY_IMAGES;
use thiserror::Error;

/// A single preview entry, tagged with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageEntry<H> {
    /// Already persisted on the backend; the URL as the backend sent it.
    Existing(String),
    /// Picked locally in this form session, not yet uploaded.
    New(H),
}

impl<H> ImageEntry<H> {
    pub fn is_existing(&self) -> bool {
        matches!(self, Self::Existing(_))
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Self::New(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageSetError {
    #[error("You can only upload up to {MAX_PROPERTY_IMAGES} images.")]
    LimitExceeded,
    #[error("No image at position {0}.")]
    IndexOutOfRange(usize),
}

/// The ordered image strip of one property form session.
///
/// Existing entries always precede new ones: loads seed the existing
/// entries and `add_files` only appends, while removal preserves order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSet<H> {
    entries: Vec<ImageEntry<H>>,
}

impl<H> Default for ImageSet<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> ImageSet<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the strip with the URLs already persisted on the backend.
    pub fn from_existing(urls: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: urls.into_iter().map(ImageEntry::Existing).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once the strip has reached the upload cap.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_PROPERTY_IMAGES
    }

    pub fn existing_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_existing()).count()
    }

    pub fn new_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_new()).count()
    }

    pub fn entries(&self) -> &[ImageEntry<H>] {
        &self.entries
    }

    /// Append freshly picked files.
    ///
    /// The whole batch is rejected when it would push the strip past
    /// [`MAX_PROPERTY_IMAGES`]; a partial add never happens.
    pub fn add_files(
        &mut self,
        handles: Vec<H>,
    ) -> Result<(), ImageSetError> {
        if self.entries.len() + handles.len() > MAX_PROPERTY_IMAGES {
            return Err(ImageSetError::LimitExceeded);
        }
        self.entries.extend(handles.into_iter().map(ImageEntry::New));
        Ok(())
    }

    /// Remove the entry at `index`, returning it to the caller.
    ///
    /// Dropping a returned `New` entry drops its display handle; an
    /// `Existing` entry owns no local resource.
    pub fn remove_at(
        &mut self,
        index: usize,
    ) -> Result<ImageEntry<H>, ImageSetError> {
        if index >= self.entries.len() {
            return Err(ImageSetError::IndexOutOfRange(index));
        }
        Ok(self.entries.remove(index))
    }

    /// The persisted URLs still retained, in order. Sent back to the
    /// backend on update so it knows which images to keep.
    pub fn existing_urls(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                ImageEntry::Existing(url) => Some(url.clone()),
                ImageEntry::New(_) => None,
            })
            .collect()
    }

    /// Handles of the not-yet-uploaded files, in order.
    pub fn new_handles(&self) -> impl Iterator<Item = &H> {
        self.entries.iter().filter_map(|entry| match entry {
            ImageEntry::New(handle) => Some(handle),
            ImageEntry::Existing(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Test handle whose drop is observable, standing in for an object-URL
    /// owner.
    #[derive(Debug, Clone)]
    struct Tracked {
        released: Rc<Cell<u32>>,
    }

    impl PartialEq for Tracked {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.released, &other.released)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn tracked() -> (Tracked, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        (
            Tracked {
                released: released.clone(),
            },
            released,
        )
    }

    fn seeded(existing: usize) -> ImageSet<Tracked> {
        ImageSet::from_existing(
            (0..existing).map(|i| format!("/uploads/{i}.jpg")),
        )
    }

    #[test]
    fn length_tracks_both_provenances() {
        let mut set = seeded(2);
        let (a, _ra) = tracked();
        let (b, _rb) = tracked();
        set.add_files(vec![a, b]).unwrap();

        assert_eq!(set.len(), 4);
        assert_eq!(set.existing_count(), 2);
        assert_eq!(set.new_count(), 2);
        assert_eq!(set.len(), set.existing_count() + set.new_count());
    }

    #[test]
    fn rejected_batch_leaves_the_set_unchanged() {
        // 8 existing + 3 selected exceeds the cap of 10.
        let mut set = seeded(8);
        let handles: Vec<Tracked> = (0..3).map(|_| tracked().0).collect();

        assert_eq!(set.add_files(handles), Err(ImageSetError::LimitExceeded));
        assert_eq!(set.len(), 8);
        assert_eq!(set.new_count(), 0);
    }

    #[test]
    fn fills_exactly_to_the_cap() {
        let mut set = seeded(8);
        let handles: Vec<Tracked> = (0..2).map(|_| tracked().0).collect();
        set.add_files(handles).unwrap();
        assert_eq!(set.len(), 10);
        assert!(set.is_full());
    }

    #[test]
    fn removing_below_the_boundary_removes_an_existing_url() {
        let mut set = seeded(2);
        let (handle, _released) = tracked();
        set.add_files(vec![handle]).unwrap();

        let removed = set.remove_at(1).unwrap();
        assert!(removed.is_existing());
        assert_eq!(set.existing_count(), 1);
        assert_eq!(set.new_count(), 1);
        assert_eq!(set.existing_urls(), ["/uploads/0.jpg"]);
    }

    #[test]
    fn removing_a_new_entry_releases_exactly_one_handle() {
        let mut set = seeded(2);
        let (first, first_released) = tracked();
        let (second, second_released) = tracked();
        set.add_files(vec![first, second]).unwrap();

        let removed = set.remove_at(2).unwrap();
        assert!(removed.is_new());
        drop(removed);

        assert_eq!(first_released.get(), 1);
        assert_eq!(second_released.get(), 0);
        assert_eq!(set.len(), 2 + 1);
    }

    #[test]
    fn out_of_range_removal_fails_without_mutation() {
        let mut set = seeded(1);
        assert_eq!(
            set.remove_at(1),
            Err(ImageSetError::IndexOutOfRange(1))
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn teardown_releases_every_outstanding_handle_once() {
        let (a, released_a) = tracked();
        let (b, released_b) = tracked();
        let mut set = seeded(1);
        set.add_files(vec![a, b]).unwrap();

        drop(set);
        assert_eq!(released_a.get(), 1);
        assert_eq!(released_b.get(), 1);
    }

    #[test]
    fn existing_entries_stay_ahead_of_new_ones() {
        let mut set = seeded(2);
        let (a, _ra) = tracked();
        set.add_files(vec![a]).unwrap();
        set.remove_at(0).unwrap();
        let (b, _rb) = tracked();
        set.add_files(vec![b]).unwrap();

        let boundary = set
            .entries()
            .iter()
            .position(|entry| entry.is_new())
            .unwrap();
        assert!(
            set.entries()[..boundary].iter().all(ImageEntry::is_existing)
        );
        assert!(set.entries()[boundary..].iter().all(ImageEntry::is_new));
    }
}
