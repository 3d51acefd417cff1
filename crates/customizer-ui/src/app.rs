//! Host page: applies the chosen article style and mounts the form.

use crate::components::article::Article;
use crate::components::article_params_form::ArticleParamsForm;
use crate::core::state::ArticleState;
use gloo::console;
use yew::prelude::*;

#[function_component(CustomizerApp)]
pub(crate) fn customizer_app() -> Html {
    let applied = use_state(ArticleState::default);
    let on_change = {
        let applied = applied.clone();
        Callback::from(move |style: ArticleState| {
            match serde_json::to_string(&style) {
                Ok(json) => console::debug!("article style applied", json),
                Err(err) => console::error!("article style not serializable", err.to_string()),
            }
            applied.set(style);
        })
    };

    html! {
        <main class="main" style={applied.style_attribute()}>
            <ArticleParamsForm default_state={ArticleState::default()} on_change={on_change} />
            <Article />
        </main>
    }
}

/// Mount the customizer on `#root`, falling back to `<body>`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CustomizerApp>::with_root(root).render();
    } else {
        yew::Renderer::<CustomizerApp>::new().render();
    }
}
