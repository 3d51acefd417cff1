//! Slide-out form for choosing the article's font, colors, and layout.

use crate::components::atoms::{ArrowButton, Button, RadioGroup, Select, Separator, Spacing};
use crate::components::dismiss::use_document_dismiss;
use crate::core::labels::FormLabels;
use crate::core::options::StyleField;
use crate::core::state::{ArticleState, FormAction, ParamsFormState};
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for ParamsFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (next, _) = self.step(&action);
        if next == *self { self } else { Rc::new(next) }
    }
}

/// Props for the article parameters form.
#[derive(Properties, PartialEq)]
pub(crate) struct ArticleParamsFormProps {
    /// Initial draft contents and the reset target.
    pub default_state: ArticleState,
    /// Receives the settings on apply and on reset.
    pub on_change: Callback<ArticleState>,
    /// Captions for titles, buttons, and the trigger.
    #[prop_or_default]
    pub labels: FormLabels,
}

#[function_component(ArticleParamsForm)]
pub(crate) fn article_params_form(props: &ArticleParamsFormProps) -> Html {
    let state = {
        let default_state = props.default_state;
        use_reducer(move || ParamsFormState::new(&default_state))
    };
    let root_ref = use_node_ref();

    let run = {
        let state = state.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |action: FormAction| {
            let (_, emitted) = state.step(&action);
            if let Some(style) = emitted {
                on_change.emit(style);
            }
            state.dispatch(action);
        })
    };

    use_document_dismiss(root_ref.clone(), state.opened, run.clone());

    let on_toggle = {
        let run = run.clone();
        Callback::from(move |_| run.emit(FormAction::Toggle))
    };
    let on_submit = {
        let run = run.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            run.emit(FormAction::Submit);
        })
    };
    let on_reset = {
        let run = run.clone();
        let default_state = props.default_state;
        Callback::from(move |event: MouseEvent| {
            // Native form reset would desync the controlled inputs from the draft.
            event.prevent_default();
            run.emit(FormAction::Reset(default_state));
        })
    };
    let on_field = |field: StyleField| {
        let run = run.clone();
        Callback::from(move |value: AttrValue| match field.find_option(&value) {
            Ok(option) => run.emit(FormAction::Change(field, option)),
            Err(err) => console::warn!("style control rejected", err.to_string()),
        })
    };

    let labels = &props.labels;
    let opened = state.opened;
    let style = state.style;
    let select = |field: StyleField| {
        html! {
            <Select
                title={labels.title(field)}
                selected={style.get(field)}
                options={field.options()}
                onchange={on_field(field)}
            />
        }
    };

    html! {
        <div class="article-params" ref={root_ref}>
            <ArrowButton
                opened={opened}
                aria_label={labels.toggle_label(opened)}
                onclick={on_toggle}
            />
            <aside class={classes!(
                "article-params__container",
                opened.then_some("article-params__container--open")
            )}>
                <form class="article-params__form" onsubmit={on_submit}>
                    {select(StyleField::FontFamily)}
                    <Spacing size={50} />
                    <RadioGroup
                        name={StyleField::FontSize.key()}
                        title={labels.title(StyleField::FontSize)}
                        selected={style.font_size}
                        options={StyleField::FontSize.options()}
                        onchange={on_field(StyleField::FontSize)}
                    />
                    <Spacing size={50} />
                    {select(StyleField::FontColor)}
                    <Spacing size={50} />
                    <Separator />
                    <Spacing size={50} />
                    {select(StyleField::BackgroundColor)}
                    <Spacing size={50} />
                    {select(StyleField::ContentWidth)}
                    <div class="article-params__bottom">
                        <Button title={labels.reset} r#type="reset" onclick={on_reset} />
                        <Button title={labels.apply} r#type="submit" />
                    </div>
                </form>
            </aside>
        </div>
    }
}
