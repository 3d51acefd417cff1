use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub r#type: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            class={classes!("button", props.class.clone())}
            r#type={props.r#type.clone()}
            onclick={props.onclick.clone()}
        >
            <span class="button__title">{props.title.clone()}</span>
        </button>
    }
}
