// SPDX-License-Identifier: MPL-2.0
//! Circular slide navigation over a list of known length.
//!
//! The navigator only tracks an index; the list itself lives in the fetch
//! controller. Callers report the list length on every move so the index can
//! never point past the end of the data it is paired with.

use serde::{Deserialize, Serialize};

/// What happens to the current index when a new page replaces the list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IndexOnReload {
    /// Keep the position, pulled back onto the last slide when the list shrank.
    #[default]
    Clamp,
    /// Always start again from the first slide.
    Reset,
}

/// Current-slide pointer with wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideNavigator {
    current: usize,
}

impl SlideNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw index. Meaningless while the list is empty.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Moves to the next slide, wrapping from the last to the first.
    ///
    /// No-op when `len == 0`.
    pub fn next(&mut self, len: usize) -> usize {
        if len == 0 {
            return self.current;
        }
        self.current = if self.current >= len - 1 {
            0
        } else {
            self.current + 1
        };
        self.current
    }

    /// Moves to the previous slide, wrapping from the first to the last.
    ///
    /// No-op when `len == 0`.
    pub fn previous(&mut self, len: usize) -> usize {
        if len == 0 {
            return self.current;
        }
        self.current = if self.current == 0 || self.current >= len {
            len - 1
        } else {
            self.current - 1
        };
        self.current
    }

    /// Jumps straight to `index`.
    ///
    /// Indices outside `0..len` are ignored and `false` is returned.
    pub fn jump_to(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.current = index;
        true
    }

    /// Re-fits the index after the list was replaced by one of `new_len` items.
    pub fn refit(&mut self, new_len: usize, policy: IndexOnReload) {
        self.current = match policy {
            IndexOnReload::Reset => 0,
            IndexOnReload::Clamp => self.current.min(new_len.saturating_sub(1)),
        };
    }
}
