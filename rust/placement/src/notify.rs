// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User notification seam.
//!
//! The original tool surfaced fatal preconditions through modal dialogs.
//! Here the dialog is a collaborator trait; the default sink routes the
//! fixed messages to the tracing subscriber.

/// Collaborator for surfacing fatal precondition messages to the user.
pub trait Notifier {
    /// Show a blocking error message with a title.
    fn error(&self, title: &str, message: &str);
}

/// Routes messages to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, title: &str, message: &str) {
        tracing::error!(title, message, "placement precondition failed");
    }
}
