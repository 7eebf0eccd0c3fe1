//! Previous/active/next neighbourhood of the active index.

use super::types::WrapMode;

/// Indices a card carousel draws around the active item.
///
/// `previous`/`next` are `None` when the sequence has a single item, and at
/// the ends of a clamped carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peek {
    pub previous: Option<usize>,
    pub active: usize,
    pub next: Option<usize>,
}

/// [`Peek`] resolved against the caller's item slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeekItems<'a, T> {
    pub previous: Option<&'a T>,
    pub active: &'a T,
    pub next: Option<&'a T>,
}

impl Peek {
    /// Compute the neighbourhood of `active` in a sequence of `len` items.
    /// Returns `None` for an empty sequence or an out-of-range index.
    pub fn around(
        active: usize,
        len: usize,
        wrap_mode: WrapMode,
    ) -> Option<Self> {
        if active >= len {
            return None;
        }
        if len == 1 {
            return Some(Self {
                previous: None,
                active,
                next: None,
            });
        }
        let (previous, next) = match wrap_mode {
            WrapMode::Circular => (
                Some((active + len - 1) % len),
                Some((active + 1) % len),
            ),
            WrapMode::Clamped => (
                active.checked_sub(1),
                (active + 1 < len).then_some(active + 1),
            ),
        };
        Some(Self {
            previous,
            active,
            next,
        })
    }

    /// Map indices onto `items`. Returns `None` if the slice is shorter than
    /// the sequence the peek was computed for.
    pub fn resolve<'a, T>(&self, items: &'a [T]) -> Option<PeekItems<'a, T>> {
        let active = items.get(self.active)?;
        let previous = match self.previous {
            Some(i) => Some(items.get(i)?),
            None => None,
        };
        let next = match self.next {
            Some(i) => Some(items.get(i)?),
            None => None,
        };
        Some(PeekItems {
            previous,
            active,
            next,
        })
    }
}
