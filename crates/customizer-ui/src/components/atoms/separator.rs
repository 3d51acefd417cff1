use yew::prelude::*;

#[function_component(Separator)]
pub(crate) fn separator() -> Html {
    html! { <div class="separator" role="separator" /> }
}
