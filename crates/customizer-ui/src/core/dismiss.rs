//! Click-outside and Escape dismissal for the parameters panel.

use crate::core::state::FormAction;

/// Key reported by `KeyboardEvent.key` for the Escape key.
pub const ESCAPE_KEY: &str = "Escape";

/// Document-level events observed while the form is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentEvent<'a> {
    /// Pointer pressed somewhere in the document. `inside_root` is `None`
    /// when the form's root node is not attached yet.
    PointerDown {
        /// Whether the event target sits inside the form root.
        inside_root: Option<bool>,
    },
    /// Key pressed anywhere in the document.
    KeyDown {
        /// Value of `KeyboardEvent.key`.
        key: &'a str,
    },
}

/// Decide whether `event` should close the panel.
///
/// Only an open panel is ever dismissed, so the result is `None` whenever
/// `opened` is false.
#[must_use]
pub fn dismissal(opened: bool, event: DocumentEvent<'_>) -> Option<FormAction> {
    if !opened {
        return None;
    }
    let close = match event {
        DocumentEvent::PointerDown { inside_root } => inside_root == Some(false),
        DocumentEvent::KeyDown { key } => key == ESCAPE_KEY,
    };
    close.then_some(FormAction::Dismiss)
}
