//! Titled group of radio inputs over a fixed option catalog.

use crate::core::options::ArticleOption;
use yew::prelude::*;

/// Props for the radio group.
#[derive(Properties, PartialEq)]
pub(crate) struct RadioGroupProps {
    /// Shared `name` attribute of the inputs.
    pub name: AttrValue,
    /// Caption rendered above the group.
    pub title: AttrValue,
    /// Currently selected option.
    pub selected: ArticleOption,
    /// Catalog the user picks from.
    pub options: &'static [ArticleOption],
    /// Receives the raw `value` of the picked option.
    #[prop_or_default]
    pub onchange: Callback<AttrValue>,
}

#[function_component(RadioGroup)]
pub(crate) fn radio_group(props: &RadioGroupProps) -> Html {
    html! {
        <fieldset class="radio-group">
            <legend class="radio-group__title">{props.title.clone()}</legend>
            <div class="radio-group__items">
                {for props.options.iter().map(|option| {
                    let onclick = {
                        let onchange = props.onchange.clone();
                        let value = option.value;
                        Callback::from(move |_| onchange.emit(AttrValue::from(value)))
                    };
                    html! {
                        <label class={classes!("radio-group__item", option.class_name)}>
                            <input
                                type="radio"
                                class="radio-group__input"
                                name={props.name.clone()}
                                value={option.value}
                                checked={option.value == props.selected.value}
                                onclick={onclick}
                            />
                            <span>{option.title}</span>
                        </label>
                    }
                })}
            </div>
        </fieldset>
    }
}
