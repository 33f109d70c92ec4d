// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Documents and the application that owns them.
//!
//! A [`Document`] is an arena of typed elements plus a per-category index
//! and a set of link instances pointing at other open documents. The
//! [`Application`] owns all open documents and resolves companion
//! documents by title substring, the way the placement command locates
//! its MEP model.

use nalgebra::Vector3;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::element::{
    Category, Element, FamilyInstanceData, FamilySymbolData, LevelData, MepCurveData, ViewData,
    WallData,
};
use crate::error::{Error, Result};
use crate::keys::{DocumentKey, ElementId, LinkKey};
use crate::parameters::{BuiltInParameter, ParameterValue};
use crate::transaction::Transaction;

/// Another document inserted into this one, optionally displaced by a
/// translation offset.
#[derive(Debug, Clone)]
pub struct LinkInstance {
    pub source: DocumentKey,
    pub offset: Vector3<f64>,
}

/// An in-memory BIM document.
#[derive(Debug)]
pub struct Document {
    title: String,
    elements: SlotMap<ElementId, Element>,
    by_category: FxHashMap<Category, Vec<ElementId>>,
    links: SlotMap<LinkKey, LinkInstance>,
}

impl Document {
    /// Creates an empty document with the given display title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: SlotMap::with_key(),
            by_category: FxHashMap::default(),
            links: SlotMap::with_key(),
        }
    }

    /// The document's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Inserts an element, indexing it by category.
    pub fn insert(&mut self, element: Element) -> ElementId {
        let category = element.category();
        let id = self.elements.insert(element);
        self.by_category.entry(category).or_default().push(id);
        id
    }

    /// Removes an element and drops it from the category index.
    /// Used by transaction rollback.
    pub(crate) fn remove(&mut self, id: ElementId) -> Option<Element> {
        let element = self.elements.remove(id)?;
        if let Some(ids) = self.by_category.get_mut(&element.category()) {
            ids.retain(|&e| e != id);
        }
        Some(element)
    }

    /// Looks up an element by id.
    pub fn get(&self, id: ElementId) -> Result<&Element> {
        self.elements.get(id).ok_or(Error::ElementNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.elements.get_mut(id).ok_or(Error::ElementNotFound(id))
    }

    /// Number of elements in a category.
    pub fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).map_or(0, Vec::len)
    }

    /// Ids of all elements in a category, in insertion order.
    pub fn elements_of(&self, category: Category) -> impl Iterator<Item = ElementId> + '_ {
        self.by_category
            .get(&category)
            .into_iter()
            .flat_map(|ids| ids.iter().copied())
    }

    /// All walls with their data.
    pub fn walls(&self) -> impl Iterator<Item = (ElementId, &WallData)> + '_ {
        self.elements_of(Category::Wall)
            .filter_map(move |id| match self.elements.get(id) {
                Some(Element::Wall(data)) => Some((id, data)),
                _ => None,
            })
    }

    /// All ducts with their centerline data.
    pub fn ducts(&self) -> impl Iterator<Item = (ElementId, &MepCurveData)> + '_ {
        self.elements_of(Category::Duct)
            .filter_map(move |id| match self.elements.get(id) {
                Some(Element::Duct(data)) => Some((id, data)),
                _ => None,
            })
    }

    /// All pipes with their centerline data.
    pub fn pipes(&self) -> impl Iterator<Item = (ElementId, &MepCurveData)> + '_ {
        self.elements_of(Category::Pipe)
            .filter_map(move |id| match self.elements.get(id) {
                Some(Element::Pipe(data)) => Some((id, data)),
                _ => None,
            })
    }

    /// All 3D views, template views included.
    pub fn views_3d(&self) -> impl Iterator<Item = (ElementId, &ViewData)> + '_ {
        self.elements_of(Category::View3d)
            .filter_map(move |id| match self.elements.get(id) {
                Some(Element::View3d(data)) => Some((id, data)),
                _ => None,
            })
    }

    /// All family symbols.
    pub fn family_symbols(&self) -> impl Iterator<Item = (ElementId, &FamilySymbolData)> + '_ {
        self.elements_of(Category::FamilySymbol)
            .filter_map(move |id| match self.elements.get(id) {
                Some(Element::FamilySymbol(data)) => Some((id, data)),
                _ => None,
            })
    }

    /// All placed family instances.
    pub fn family_instances(&self) -> impl Iterator<Item = (ElementId, &FamilyInstanceData)> + '_ {
        self.elements_of(Category::FamilyInstance)
            .filter_map(move |id| match self.elements.get(id) {
                Some(Element::FamilyInstance(data)) => Some((id, data)),
                _ => None,
            })
    }

    /// Typed accessor for a wall.
    pub fn wall(&self, id: ElementId) -> Result<&WallData> {
        match self.get(id)? {
            Element::Wall(data) => Ok(data),
            _ => Err(Error::WrongCategory(id, Category::Wall.as_str())),
        }
    }

    /// Typed accessor for a level.
    pub fn level(&self, id: ElementId) -> Result<&LevelData> {
        match self.get(id)? {
            Element::Level(data) => Ok(data),
            _ => Err(Error::WrongCategory(id, Category::Level.as_str())),
        }
    }

    /// Typed accessor for a 3D view.
    pub fn view_3d(&self, id: ElementId) -> Result<&ViewData> {
        match self.get(id)? {
            Element::View3d(data) => Ok(data),
            _ => Err(Error::WrongCategory(id, Category::View3d.as_str())),
        }
    }

    /// Typed accessor for a family symbol.
    pub fn family_symbol(&self, id: ElementId) -> Result<&FamilySymbolData> {
        match self.get(id)? {
            Element::FamilySymbol(data) => Ok(data),
            _ => Err(Error::WrongCategory(id, Category::FamilySymbol.as_str())),
        }
    }

    pub(crate) fn family_symbol_mut(&mut self, id: ElementId) -> Result<&mut FamilySymbolData> {
        match self.get_mut(id)? {
            Element::FamilySymbol(data) => Ok(data),
            _ => Err(Error::WrongCategory(id, Category::FamilySymbol.as_str())),
        }
    }

    /// Typed accessor for a placed family instance.
    pub fn family_instance(&self, id: ElementId) -> Result<&FamilyInstanceData> {
        match self.get(id)? {
            Element::FamilyInstance(data) => Ok(data),
            _ => Err(Error::WrongCategory(id, Category::FamilyInstance.as_str())),
        }
    }

    /// Mutable parameter set of a symbol (defaults) or instance.
    pub(crate) fn parameters_mut(
        &mut self,
        id: ElementId,
    ) -> Result<&mut crate::parameters::ParameterSet> {
        match self.get_mut(id)? {
            Element::FamilySymbol(data) => Ok(&mut data.defaults),
            Element::FamilyInstance(data) => Ok(&mut data.parameters),
            _ => Err(Error::WrongCategory(id, "FamilySymbol or FamilyInstance")),
        }
    }

    /// Reads a named parameter from a symbol or instance.
    pub fn parameter(&self, id: ElementId, name: &str) -> Result<&ParameterValue> {
        let params = match self.get(id)? {
            Element::FamilySymbol(data) => &data.defaults,
            Element::FamilyInstance(data) => &data.parameters,
            _ => return Err(Error::WrongCategory(id, "FamilySymbol or FamilyInstance")),
        };
        params.get(name).ok_or_else(|| Error::ParameterNotFound {
            element: id,
            name: name.to_string(),
        })
    }

    /// Reads a named parameter as a length.
    pub fn parameter_length(&self, id: ElementId, name: &str) -> Result<f64> {
        self.parameter(id, name)?
            .as_length()
            .ok_or_else(|| Error::ParameterType {
                element: id,
                name: name.to_string(),
            })
    }

    /// Reads a built-in parameter from a symbol or instance.
    pub fn builtin_parameter(
        &self,
        id: ElementId,
        param: BuiltInParameter,
    ) -> Result<&ParameterValue> {
        let params = match self.get(id)? {
            Element::FamilySymbol(data) => &data.defaults,
            Element::FamilyInstance(data) => &data.parameters,
            _ => return Err(Error::WrongCategory(id, "FamilySymbol or FamilyInstance")),
        };
        params
            .get_builtin(param)
            .ok_or(Error::BuiltInNotFound { element: id, param })
    }

    /// Reads a built-in parameter as a length.
    pub fn builtin_length(&self, id: ElementId, param: BuiltInParameter) -> Result<f64> {
        self.builtin_parameter(id, param)?
            .as_length()
            .ok_or_else(|| Error::ParameterType {
                element: id,
                name: format!("{param:?}"),
            })
    }

    /// Inserts a link instance pointing at another open document.
    pub fn add_link(&mut self, source: DocumentKey, offset: Vector3<f64>) -> LinkKey {
        self.links.insert(LinkInstance { source, offset })
    }

    /// All link instances in this document.
    pub fn links(&self) -> impl Iterator<Item = (LinkKey, &LinkInstance)> + '_ {
        self.links.iter()
    }

    /// Opens a journaled mutation scope. Dropping the scope without
    /// committing rolls back every mutation made through it.
    pub fn start_transaction(&mut self, name: &str) -> Transaction<'_> {
        Transaction::new(self, name)
    }
}

/// The set of open documents.
#[derive(Debug, Default)]
pub struct Application {
    documents: SlotMap<DocumentKey, Document>,
}

impl Application {
    /// Creates an application with no open documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a document, returning its key.
    pub fn open(&mut self, document: Document) -> DocumentKey {
        self.documents.insert(document)
    }

    /// Read access to an open document.
    pub fn document(&self, key: DocumentKey) -> Result<&Document> {
        self.documents.get(key).ok_or(Error::DocumentNotFound)
    }

    /// Write access to an open document.
    pub fn document_mut(&mut self, key: DocumentKey) -> Result<&mut Document> {
        self.documents.get_mut(key).ok_or(Error::DocumentNotFound)
    }

    /// All open documents.
    pub fn documents(&self) -> impl Iterator<Item = (DocumentKey, &Document)> + '_ {
        self.documents.iter()
    }

    /// First open document other than `active` whose title contains
    /// `marker`. Enumeration order is arena order, not contractual.
    pub fn find_document(&self, active: DocumentKey, marker: &str) -> Option<DocumentKey> {
        self.documents
            .iter()
            .find(|(key, doc)| *key != active && doc.title.contains(marker))
            .map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn wall_between(level: ElementId) -> Element {
        Element::Wall(WallData {
            start: Point3::new(0.0, 0.0, 0.0),
            end: Point3::new(4.0, 0.0, 0.0),
            thickness: 0.2,
            height: 3.0,
            level,
        })
    }

    #[test]
    fn category_index_tracks_inserts_and_removes() {
        let mut doc = Document::new("AR");
        let level = doc.insert(Element::Level(LevelData {
            name: "L1".into(),
            elevation: 0.0,
        }));
        let w0 = doc.insert(wall_between(level));
        let w1 = doc.insert(wall_between(level));

        assert_eq!(doc.count(Category::Wall), 2);
        assert_eq!(doc.walls().count(), 2);

        doc.remove(w0);
        assert_eq!(doc.count(Category::Wall), 1);
        assert_eq!(doc.walls().next().map(|(id, _)| id), Some(w1));
    }

    #[test]
    fn typed_accessor_rejects_wrong_category() {
        let mut doc = Document::new("AR");
        let level = doc.insert(Element::Level(LevelData {
            name: "L1".into(),
            elevation: 0.0,
        }));
        assert!(matches!(
            doc.wall(level),
            Err(Error::WrongCategory(_, "Wall"))
        ));

        let wall = doc.insert(wall_between(level));
        match doc.level(wall) {
            Err(Error::WrongCategory(id, expected)) => {
                assert_eq!(id, wall);
                assert_eq!(expected, Category::Level.as_str());
            }
            other => panic!("expected wrong-category error, got {other:?}"),
        }
    }

    #[test]
    fn find_document_matches_by_title_marker() {
        let mut app = Application::new();
        let ar = app.open(Document::new("Project_AR"));
        let mep = app.open(Document::new("Project_MEP_Ducts"));

        assert_eq!(app.find_document(ar, "MEP"), Some(mep));
        assert_eq!(app.find_document(ar, "EL"), None);
        // The active document never matches itself.
        assert_eq!(app.find_document(mep, "MEP"), None);
    }
}
