// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Journaled mutation scopes with all-or-nothing rollback.
//!
//! All document mutation goes through a [`Transaction`]. Each operation
//! records an inverse in the journal; `commit` discards the journal,
//! while dropping an uncommitted transaction replays the inverses in
//! reverse order. An error propagating out of a placement loop therefore
//! leaves the document exactly as it was before the transaction started.

use nalgebra::Point3;

use crate::document::Document;
use crate::element::{Element, FamilyInstanceData, StructuralType};
use crate::error::{Error, Result};
use crate::keys::ElementId;
use crate::parameters::{BuiltInParameter, ParameterValue};

enum Op {
    Created(ElementId),
    NamedParam {
        element: ElementId,
        name: String,
        previous: ParameterValue,
    },
    BuiltinParam {
        element: ElementId,
        param: BuiltInParameter,
        previous: ParameterValue,
    },
    SymbolActivated(ElementId),
}

/// An exclusive, journaled mutation scope over one document.
pub struct Transaction<'d> {
    doc: &'d mut Document,
    name: String,
    journal: Vec<Op>,
    committed: bool,
}

impl<'d> Transaction<'d> {
    pub(crate) fn new(doc: &'d mut Document, name: &str) -> Self {
        Self {
            doc,
            name: name.to_string(),
            journal: Vec::new(),
            committed: false,
        }
    }

    /// The transaction's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read access to the document under mutation.
    pub fn document(&self) -> &Document {
        self.doc
    }

    /// Activates a family symbol if it is not active yet. Idempotent.
    pub fn activate_symbol(&mut self, symbol: ElementId) -> Result<()> {
        let data = self.doc.family_symbol_mut(symbol)?;
        if !data.is_active {
            data.is_active = true;
            self.journal.push(Op::SymbolActivated(symbol));
        }
        Ok(())
    }

    /// Places a new instance of `symbol` hosted on a wall.
    ///
    /// The symbol must be active; its default parameters are copied onto
    /// the instance. `host` must be a wall and `level` a level of this
    /// document.
    pub fn create_family_instance(
        &mut self,
        location: Point3<f64>,
        symbol: ElementId,
        host: ElementId,
        level: ElementId,
        structural: StructuralType,
    ) -> Result<ElementId> {
        let defaults = {
            let data = self.doc.family_symbol(symbol)?;
            if !data.is_active {
                return Err(Error::SymbolNotActive(symbol));
            }
            data.defaults.clone()
        };
        self.doc.wall(host)?;
        self.doc.level(level)?;

        let id = self.doc.insert(Element::FamilyInstance(FamilyInstanceData {
            symbol,
            host,
            level,
            location,
            structural,
            parameters: defaults,
        }));
        self.journal.push(Op::Created(id));
        Ok(id)
    }

    /// Writes a named length parameter. The parameter must already be
    /// defined on the element; a miss is an error that aborts the
    /// enclosing batch.
    pub fn set_parameter(&mut self, element: ElementId, name: &str, value: f64) -> Result<()> {
        let params = self.doc.parameters_mut(element)?;
        let previous = params
            .replace(name, ParameterValue::Length(value))
            .ok_or_else(|| Error::ParameterNotFound {
                element,
                name: name.to_string(),
            })?;
        self.journal.push(Op::NamedParam {
            element,
            name: name.to_string(),
            previous,
        });
        Ok(())
    }

    /// Writes a built-in length parameter.
    pub fn set_builtin(
        &mut self,
        element: ElementId,
        param: BuiltInParameter,
        value: f64,
    ) -> Result<()> {
        let params = self.doc.parameters_mut(element)?;
        let previous = params
            .replace_builtin(param, ParameterValue::Length(value))
            .ok_or(Error::BuiltInNotFound { element, param })?;
        self.journal.push(Op::BuiltinParam {
            element,
            param,
            previous,
        });
        Ok(())
    }

    /// Commits the transaction, making all journaled mutations durable.
    pub fn commit(mut self) {
        self.committed = true;
        self.journal.clear();
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        // Replay inverses newest-first.
        while let Some(op) = self.journal.pop() {
            match op {
                Op::Created(id) => {
                    self.doc.remove(id);
                }
                Op::NamedParam {
                    element,
                    name,
                    previous,
                } => {
                    if let Ok(params) = self.doc.parameters_mut(element) {
                        params.replace(&name, previous);
                    }
                }
                Op::BuiltinParam {
                    element,
                    param,
                    previous,
                } => {
                    if let Ok(params) = self.doc.parameters_mut(element) {
                        params.replace_builtin(param, previous);
                    }
                }
                Op::SymbolActivated(id) => {
                    if let Ok(data) = self.doc.family_symbol_mut(id) {
                        data.is_active = false;
                    }
                }
            }
        }
    }
}
