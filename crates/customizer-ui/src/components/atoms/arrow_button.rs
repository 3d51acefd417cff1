//! Trigger that slides the parameters panel in and out.

use yew::prelude::*;

/// Props for the panel trigger.
#[derive(Properties, PartialEq)]
pub(crate) struct ArrowButtonProps {
    /// Whether the panel is currently open.
    pub opened: bool,
    /// Accessible label for the current state.
    pub aria_label: AttrValue,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ArrowButton)]
pub(crate) fn arrow_button(props: &ArrowButtonProps) -> Html {
    let classes = classes!("arrow-button", props.opened.then_some("arrow-button--open"));
    let arrow_classes = classes!(
        "arrow-button__arrow",
        props.opened.then_some("arrow-button__arrow--open")
    );
    html! {
        <button
            class={classes}
            type="button"
            aria-label={props.aria_label.clone()}
            aria-expanded={props.opened.to_string()}
            onclick={props.onclick.clone()}
        >
            <svg
                class={arrow_classes}
                width="28"
                height="28"
                viewBox="0 0 24 24"
                aria-hidden="true"
            >
                <path
                    d="M9 5l7 7-7 7"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        </button>
    }
}
