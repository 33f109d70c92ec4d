// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # MEP-Lite Document Model
//!
//! In-memory BIM document model for wall-penetration placement.
//!
//! The original hole-placement tool lived inside a proprietary modeling
//! host and leaned on its document, element, and transaction machinery.
//! This crate provides that collaborator surface explicitly: documents
//! are arenas of typed elements with stable generational ids, multiple
//! documents can be open at once and linked into each other, and all
//! mutation goes through journaled [`Transaction`] scopes with
//! all-or-nothing rollback.
//!
//! ## Example
//!
//! ```
//! use mep_lite_model::{Application, Document, Element, LevelData};
//!
//! let mut app = Application::new();
//! let mut doc = Document::new("AR_Building");
//! doc.insert(Element::Level(LevelData {
//!     name: "Level 1".into(),
//!     elevation: 0.0,
//! }));
//! let key = app.open(doc);
//! assert_eq!(app.document(key).unwrap().title(), "AR_Building");
//! ```

pub mod document;
pub mod element;
pub mod error;
pub mod keys;
pub mod parameters;
pub mod transaction;

pub use document::{Application, Document, LinkInstance};
pub use element::{
    Category, Element, FamilyInstanceData, FamilySymbolData, LevelData, MepCurveData,
    StructuralType, ViewData, WallData,
};
pub use error::{Error, Result};
pub use keys::{DocumentKey, ElementId, ElementRef, LinkKey};
pub use parameters::{BuiltInParameter, ParameterSet, ParameterValue};
pub use transaction::Transaction;
