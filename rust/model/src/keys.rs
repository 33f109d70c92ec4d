// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key types for arena-based document storage.
//!
//! Every element gets a unique, type-safe key for O(1) lookup in its
//! document's arena. Keys are created by `slotmap::SlotMap` and remain
//! valid even after other elements are removed (generational indices).

use slotmap::new_key_type;

new_key_type! {
    /// Key for an element within one document's arena.
    pub struct ElementId;

    /// Key for an open document within an [`Application`](crate::Application).
    pub struct DocumentKey;

    /// Key for a link instance placed inside a document.
    pub struct LinkKey;
}

/// Composite identity of a wall reached by a ray cast: the element id
/// plus the link instance it was reached through, if any.
///
/// Equality and hashing cover the full `(link, element)` pair, which is
/// exactly the key intersection deduplication collapses on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRef {
    /// Link instance the element came through, `None` for host-owned elements.
    pub link: Option<LinkKey>,
    /// The element id inside its owning document.
    pub element: ElementId,
}

impl ElementRef {
    /// Reference to an element owned by the host document itself.
    pub fn host(element: ElementId) -> Self {
        Self {
            link: None,
            element,
        }
    }

    /// Reference to an element reached through a link instance.
    pub fn linked(link: LinkKey, element: ElementId) -> Self {
        Self {
            link: Some(link),
            element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn reference_equality_is_by_pair() {
        let mut elements: SlotMap<ElementId, ()> = SlotMap::with_key();
        let mut links: SlotMap<LinkKey, ()> = SlotMap::with_key();
        let e0 = elements.insert(());
        let e1 = elements.insert(());
        let l0 = links.insert(());

        assert_eq!(ElementRef::host(e0), ElementRef::host(e0));
        assert_ne!(ElementRef::host(e0), ElementRef::host(e1));
        assert_ne!(ElementRef::host(e0), ElementRef::linked(l0, e0));
        assert_eq!(ElementRef::linked(l0, e0), ElementRef::linked(l0, e0));
    }
}
