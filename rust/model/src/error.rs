// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for document model operations.

use crate::keys::ElementId;
use crate::parameters::BuiltInParameter;

/// Result type alias for document model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying or mutating documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced document was not found in the application.
    #[error("document not found")]
    DocumentNotFound,

    /// A referenced element was not found in the document's arena.
    #[error("element not found: {0:?}")]
    ElementNotFound(ElementId),

    /// An element exists but is not of the expected category.
    #[error("element {0:?} is not a {1}")]
    WrongCategory(ElementId, &'static str),

    /// A named parameter lookup failed on a symbol or instance.
    #[error("parameter not found on element {element:?}: {name}")]
    ParameterNotFound {
        element: ElementId,
        name: String,
    },

    /// A built-in parameter is not present on the element.
    #[error("built-in parameter {param:?} not present on element {element:?}")]
    BuiltInNotFound {
        element: ElementId,
        param: BuiltInParameter,
    },

    /// A parameter holds a value of the wrong kind (e.g. text where a
    /// length is required).
    #[error("parameter {name} on element {element:?} is not a length")]
    ParameterType {
        element: ElementId,
        name: String,
    },

    /// A family symbol must be activated before instances can be placed.
    #[error("family symbol {0:?} is not active")]
    SymbolNotActive(ElementId),
}
