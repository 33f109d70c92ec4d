// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The placement command.
//!
//! Control flows strictly top to bottom: resolve documents/view/family,
//! collect ducts and pipes, activate the hole symbol in one transaction,
//! then cast, deduplicate, and instantiate inside a second transaction.
//! There is no per-element transaction; a failure partway through the
//! batch rolls back every hole created so far.

use mep_lite_geometry::{clip_to_length, dedup_by_reference, ReferenceIntersector};
use mep_lite_model::{Application, BuiltInParameter, DocumentKey, StructuralType};

use crate::collector::{collect_mep_curves, MepCategory, MepCurve};
use crate::config::PlacementConfig;
use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::report::PlacementReport;
use crate::resolver;

/// Fixed title of the precondition dialog.
pub const DIALOG_TITLE: &str = "Error";

/// Final status of the placement command.
#[derive(Debug)]
pub enum CommandOutcome {
    /// All holes placed and committed.
    Succeeded(PlacementReport),
    /// A precondition was not met; the user was notified and nothing
    /// was mutated.
    Cancelled,
    /// A failure during collection or placement; the batch transaction
    /// rolled back.
    Failed(Error),
}

impl CommandOutcome {
    /// `true` for [`CommandOutcome::Succeeded`].
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Succeeded(_))
    }
}

/// Place one opening per distinct wall crossing of every duct and pipe
/// in the companion MEP document.
pub fn add_holes(
    app: &mut Application,
    active: DocumentKey,
    config: &PlacementConfig,
    notifier: &dyn Notifier,
) -> CommandOutcome {
    match run(app, active, config) {
        Ok(report) => {
            tracing::info!(
                ducts = report.ducts,
                pipes = report.pipes,
                holes = report.holes_created,
                "placement committed"
            );
            CommandOutcome::Succeeded(report)
        }
        Err(Error::Precondition(precondition)) => {
            notifier.error(DIALOG_TITLE, precondition.message());
            CommandOutcome::Cancelled
        }
        Err(err) => {
            tracing::error!(error = %err, "placement failed, batch rolled back");
            CommandOutcome::Failed(err)
        }
    }
}

fn run(
    app: &mut Application,
    active: DocumentKey,
    config: &PlacementConfig,
) -> Result<PlacementReport> {
    let span = tracing::info_span!("add_holes", marker = %config.link_marker);
    let _guard = span.enter();

    // Resolve collaborators, read-only. Any miss aborts before the
    // first transaction opens.
    let mep_key = resolver::resolve_mep_document(app, active, &config.link_marker)?;
    let (symbol, view) = {
        let doc = app.document(active)?;
        (
            resolver::resolve_hole_symbol(doc, &config.family_name, &config.type_name)?,
            resolver::resolve_view_3d(doc)?,
        )
    };
    let curves = collect_mep_curves(app.document(mep_key)?)?;
    let intersector = ReferenceIntersector::for_view(app, active, view)?;
    tracing::debug!(
        curves = curves.len(),
        walls = intersector.target_count(),
        "collected placement inputs"
    );

    // Transaction 1: the symbol must be active before instances can be
    // placed.
    {
        let doc = app.document_mut(active)?;
        let mut txn = doc.start_transaction("Activate hole symbol");
        txn.activate_symbol(symbol)?;
        txn.commit();
    }

    // Transaction 2: the whole batch. An error anywhere in the loop
    // unwinds through `?`, dropping the transaction and rolling back
    // every hole created so far.
    let mut report = PlacementReport {
        ducts: curves
            .iter()
            .filter(|c| c.category == MepCategory::Duct)
            .count(),
        pipes: curves
            .iter()
            .filter(|c| c.category == MepCategory::Pipe)
            .count(),
        holes_created: 0,
    };

    let doc = app.document_mut(active)?;
    let mut txn = doc.start_transaction("Place wall openings");
    tracing::debug!(transaction = txn.name(), "batch transaction opened");
    for curve in &curves {
        report.holes_created +=
            place_holes_for_curve(&mut txn, &intersector, curve, symbol, config)?;
    }
    txn.commit();

    Ok(report)
}

/// Cast one centerline, clip and deduplicate its hits, and place one
/// hole per surviving crossing. Returns the number of holes created.
fn place_holes_for_curve(
    txn: &mut mep_lite_model::Transaction<'_>,
    intersector: &ReferenceIntersector,
    curve: &MepCurve,
    symbol: mep_lite_model::ElementId,
    config: &PlacementConfig,
) -> Result<usize> {
    let hits = intersector.find(curve.start, curve.direction);
    let hits = dedup_by_reference(clip_to_length(hits, curve.length));

    let mut created = 0;
    for hit in hits {
        if hit.reference.link.is_some() {
            return Err(Error::LinkedWallHost {
                element: hit.reference.element,
            });
        }
        let wall_id = hit.reference.element;
        let level = txn.document().wall(wall_id)?.level;

        let point = curve.start + curve.direction.into_inner() * hit.proximity;
        let hole = txn.create_family_instance(
            point,
            symbol,
            wall_id,
            level,
            StructuralType::NonStructural,
        )?;

        // Square opening of side = diameter, centered on the centerline.
        txn.set_parameter(hole, &config.width_param, curve.diameter)?;
        txn.set_parameter(hole, &config.height_param, curve.diameter)?;
        let default_offset = txn
            .document()
            .builtin_length(hole, BuiltInParameter::ElevationFromLevel)?;
        txn.set_builtin(
            hole,
            BuiltInParameter::ElevationFromLevel,
            default_offset - curve.diameter / 2.0,
        )?;

        tracing::trace!(
            element = ?curve.id,
            wall = ?wall_id,
            proximity = hit.proximity,
            "placed opening"
        );
        created += 1;
    }
    Ok(created)
}
