// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronous observer list.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

use crate::style::TextStyle;

/// Handle returned by [`TextStyle::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

type Callback = Box<dyn FnMut(&TextStyle)>;

/// Observers in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u32,
    entries: SmallVec<[(ObserverId, Callback); 2]>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        match self.entries.iter().position(|(entry, _)| *entry == id) {
            Some(index) => {
                drop(self.entries.remove(index));
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&mut self, style: &TextStyle) {
        for (_, callback) in &mut self.entries {
            callback(style);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish()
    }
}
