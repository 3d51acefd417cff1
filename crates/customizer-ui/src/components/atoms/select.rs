//! Titled dropdown over a fixed option catalog.

use crate::core::options::ArticleOption;
use yew::prelude::*;

/// Props for the catalog dropdown.
#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    /// Caption rendered above the control.
    pub title: AttrValue,
    /// Currently selected option.
    pub selected: ArticleOption,
    /// Catalog the user picks from.
    pub options: &'static [ArticleOption],
    /// Receives the raw `value` of the picked option.
    #[prop_or_default]
    pub onchange: Callback<AttrValue>,
}

#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                onchange.emit(target.value().into());
            }
        })
    };

    html! {
        <label class="select">
            <span class="select__title">{props.title.clone()}</span>
            <select
                class={classes!("select__control", props.selected.class_name)}
                value={props.selected.value}
                onchange={onchange}
            >
                {for props.options.iter().map(|option| {
                    let selected = option.value == props.selected.value;
                    html! {
                        <option
                            class={classes!("select__option", option.option_class_name)}
                            value={option.value}
                            selected={selected}
                        >
                            {option.title}
                        </option>
                    }
                })}
            </select>
        </label>
    }
}
