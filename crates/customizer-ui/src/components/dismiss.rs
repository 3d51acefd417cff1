//! Document-level listeners that close the parameters panel.

use crate::core::dismiss::{DocumentEvent, dismissal};
use crate::core::state::FormAction;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;

/// Keep one `mousedown` and one `keydown` listener on the document while mounted.
///
/// Both listeners capture `opened`, so they are dropped and registered again
/// whenever the flag changes, and dropped for good on unmount.
#[hook]
pub(crate) fn use_document_dismiss(root: NodeRef, opened: bool, on_action: Callback<FormAction>) {
    use_effect_with_deps(
        move |opened| {
            let opened = *opened;
            let document = gloo::utils::document();
            let pointer = EventListener::new(&document, "mousedown", {
                let on_action = on_action.clone();
                move |event| {
                    let inside_root = root.cast::<Node>().map(|root| {
                        let target = event
                            .target()
                            .and_then(|target| target.dyn_into::<Node>().ok());
                        root.contains(target.as_ref())
                    });
                    if let Some(action) =
                        dismissal(opened, DocumentEvent::PointerDown { inside_root })
                    {
                        on_action.emit(action);
                    }
                }
            });
            let keyboard = EventListener::new(&document, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = event.key();
                if let Some(action) = dismissal(opened, DocumentEvent::KeyDown { key: &key }) {
                    on_action.emit(action);
                }
            });
            move || {
                drop(pointer);
                drop(keyboard);
            }
        },
        opened,
    );
}
