// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fail-fast resolution of the command's collaborators.
//!
//! Each lookup that yields nothing is a fatal precondition: the command
//! aborts before any transaction opens, the user fixes the model and
//! re-runs. No retries.

use mep_lite_model::{Application, Document, DocumentKey, ElementId};

use crate::error::{Error, Precondition, Result};

/// Find the companion MEP document by title substring.
pub fn resolve_mep_document(
    app: &Application,
    active: DocumentKey,
    marker: &str,
) -> Result<DocumentKey> {
    app.find_document(active, marker)
        .ok_or(Error::Precondition(Precondition::MepDocumentNotFound))
}

/// Find the hole family symbol by (family name, type name).
pub fn resolve_hole_symbol(
    doc: &Document,
    family_name: &str,
    type_name: &str,
) -> Result<ElementId> {
    doc.family_symbols()
        .find(|(_, symbol)| symbol.name == type_name && symbol.family_name == family_name)
        .map(|(id, _)| id)
        .ok_or(Error::Precondition(Precondition::HoleFamilyNotFound))
}

/// Find the first non-template 3D view.
pub fn resolve_view_3d(doc: &Document) -> Result<ElementId> {
    doc.views_3d()
        .find(|(_, view)| !view.is_template)
        .map(|(id, _)| id)
        .ok_or(Error::Precondition(Precondition::View3dNotFound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mep_lite_model::{Element, FamilySymbolData, ParameterSet, ViewData};

    #[test]
    fn symbol_match_requires_both_names() {
        let mut doc = Document::new("AR");
        doc.insert(Element::FamilySymbol(FamilySymbolData {
            name: "Standard".into(),
            family_name: "Round Wall Opening".into(),
            is_active: false,
            defaults: ParameterSet::new(),
        }));

        // Family name differs from the configured one.
        assert!(matches!(
            resolve_hole_symbol(&doc, "Rectangular Wall Opening", "Standard"),
            Err(Error::Precondition(Precondition::HoleFamilyNotFound))
        ));
        assert!(resolve_hole_symbol(&doc, "Round Wall Opening", "Standard").is_ok());
    }

    #[test]
    fn template_views_are_skipped() {
        let mut doc = Document::new("AR");
        doc.insert(Element::View3d(ViewData {
            name: "Template".into(),
            is_template: true,
        }));
        assert!(matches!(
            resolve_view_3d(&doc),
            Err(Error::Precondition(Precondition::View3dNotFound))
        ));

        let working = doc.insert(Element::View3d(ViewData {
            name: "{3D}".into(),
            is_template: false,
        }));
        assert_eq!(resolve_view_3d(&doc).unwrap(), working);
    }
}
