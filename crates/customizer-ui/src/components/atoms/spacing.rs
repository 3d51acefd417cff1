use yew::prelude::*;

/// Props for the vertical spacer.
#[derive(Properties, PartialEq)]
pub(crate) struct SpacingProps {
    /// Height in pixels.
    #[prop_or(0)]
    pub size: u32,
}

#[function_component(Spacing)]
pub(crate) fn spacing(props: &SpacingProps) -> Html {
    html! { <div class="spacing" style={format!("height: {}px", props.size)} /> }
}
