// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared texture handles referenced by pattern paints.
//!
//! A [`Texture`] is a view onto a [`TextureSource`]. Both are reference
//! counted handles: cloning them shares the underlying resource, and any
//! holder can observe whether it has been destroyed. Styles never destroy
//! textures on their own; see [`DestroyOptions`](crate::DestroyOptions).

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_RESOURCE_ID: AtomicU32 = AtomicU32::new(1);

fn next_id() -> u32 {
    NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug)]
struct SourceData {
    id: u32,
    width: u32,
    height: u32,
    destroyed: Cell<bool>,
}

/// Backing pixel storage shared by one or more [`Texture`]s.
#[derive(Clone)]
pub struct TextureSource {
    inner: Rc<SourceData>,
}

impl TextureSource {
    /// Creates a new source with the given pixel dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Rc::new(SourceData {
                id: next_id(),
                width,
                height,
                destroyed: Cell::new(false),
            }),
        }
    }

    /// Unique id of this source.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.inner.id
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Returns `true` once [`destroy`](Self::destroy) has been called on any handle.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.inner.destroyed.get()
    }

    /// Releases the source. Calling this more than once is a no-op.
    pub fn destroy(&self) {
        if !self.inner.destroyed.replace(true) {
            let id = self.inner.id;
            log::trace!(target: "understory_text_style", "texture source {id} destroyed");
        }
    }
}

impl PartialEq for TextureSource {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for TextureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureSource")
            .field("id", &self.inner.id)
            .field("width", &self.inner.width)
            .field("height", &self.inner.height)
            .field("destroyed", &self.inner.destroyed.get())
            .finish()
    }
}

#[derive(Debug)]
struct TextureData {
    id: u32,
    source: TextureSource,
    destroyed: Cell<bool>,
}

/// A texture handle used by [`Pattern`](crate::Pattern) paints.
///
/// Equality is identity: two handles are equal when they share the same
/// underlying texture.
#[derive(Clone)]
pub struct Texture {
    inner: Rc<TextureData>,
}

impl Texture {
    /// Creates a texture covering the whole of `source`.
    #[must_use]
    pub fn new(source: TextureSource) -> Self {
        Self {
            inner: Rc::new(TextureData {
                id: next_id(),
                source,
                destroyed: Cell::new(false),
            }),
        }
    }

    /// Unique id of this texture.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.inner.id
    }

    /// The backing source.
    #[must_use]
    pub fn source(&self) -> &TextureSource {
        &self.inner.source
    }

    /// Returns `true` once the texture has been destroyed.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.inner.destroyed.get()
    }

    /// Releases the texture, and its source too when `destroy_source` is set.
    ///
    /// Every handle sharing this texture observes the change.
    pub fn destroy(&self, destroy_source: bool) {
        if !self.inner.destroyed.replace(true) {
            log::trace!(target: "understory_text_style", "texture {} destroyed", self.inner.id);
        }
        if destroy_source {
            self.inner.source.destroy();
        }
    }

    /// Number of live handles to this texture.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.inner.id)
            .field("source", &self.inner.source)
            .field("destroyed", &self.inner.destroyed.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = TextureSource::new(4, 4);
        let b = TextureSource::new(4, 4);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn destroy_without_source_keeps_source_alive() {
        let source = TextureSource::new(8, 2);
        let texture = Texture::new(source.clone());
        let shared = texture.clone();

        texture.destroy(false);
        assert!(shared.is_destroyed());
        assert!(!source.is_destroyed());

        shared.destroy(true);
        assert!(source.is_destroyed());
    }

    #[test]
    fn handle_count_tracks_clones() {
        let texture = Texture::new(TextureSource::new(1, 1));
        assert_eq!(texture.handle_count(), 1);
        let other = texture.clone();
        assert_eq!(other.handle_count(), 2);
    }
}
