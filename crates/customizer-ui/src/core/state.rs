//! Applied article style and the form's private draft.
//!
//! # Design
//! - Every transition returns a new value; nothing is mutated in place.
//! - The draft never aliases the host's record: transfers are full copies.
//! - Which record reaches the host callback is decided by [`FormAction::emitted`].

use crate::core::options::{
    ArticleOption, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_FAMILY_OPTIONS,
    FONT_SIZE_OPTIONS, StyleField,
};
use serde::Serialize;

/// Style settings applied to the article page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleState {
    /// Selected font family.
    pub font_family: ArticleOption,
    /// Selected font size.
    pub font_size: ArticleOption,
    /// Selected font color.
    pub font_color: ArticleOption,
    /// Selected background color.
    pub background_color: ArticleOption,
    /// Selected content width.
    pub content_width: ArticleOption,
}

impl Default for ArticleState {
    fn default() -> Self {
        Self {
            font_family: FONT_FAMILY_OPTIONS[0],
            font_size: FONT_SIZE_OPTIONS[0],
            font_color: FONT_COLORS[0],
            background_color: BACKGROUND_COLORS[0],
            content_width: CONTENT_WIDTH_OPTIONS[0],
        }
    }
}

impl ArticleState {
    /// Option currently held by `field`.
    #[must_use]
    pub const fn get(&self, field: StyleField) -> ArticleOption {
        match field {
            StyleField::FontFamily => self.font_family,
            StyleField::FontSize => self.font_size,
            StyleField::FontColor => self.font_color,
            StyleField::BackgroundColor => self.background_color,
            StyleField::ContentWidth => self.content_width,
        }
    }

    /// Copy of the settings with `field` replaced by `option`.
    #[must_use]
    pub const fn with_field(self, field: StyleField, option: ArticleOption) -> Self {
        match field {
            StyleField::FontFamily => Self {
                font_family: option,
                ..self
            },
            StyleField::FontSize => Self {
                font_size: option,
                ..self
            },
            StyleField::FontColor => Self {
                font_color: option,
                ..self
            },
            StyleField::BackgroundColor => Self {
                background_color: option,
                ..self
            },
            StyleField::ContentWidth => Self {
                content_width: option,
                ..self
            },
        }
    }

    /// CSS custom properties for the host page, in field order.
    #[must_use]
    pub fn css_variables(&self) -> [(&'static str, &'static str); 5] {
        StyleField::all().map(|field| (field.css_variable(), self.get(field).value))
    }

    /// Inline `style` attribute carrying [`Self::css_variables`].
    #[must_use]
    pub fn style_attribute(&self) -> String {
        self.css_variables()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect()
    }
}

/// Draft state owned by the parameters form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamsFormState {
    /// Working copy of the style settings.
    pub style: ArticleState,
    /// Whether the slide-out panel is visible.
    pub opened: bool,
}

impl ParamsFormState {
    /// Fresh draft copied from the host defaults; the panel starts closed.
    #[must_use]
    pub const fn new(default: &ArticleState) -> Self {
        Self {
            style: *default,
            opened: false,
        }
    }

    /// Replace one field, keeping the other fields and the open flag.
    #[must_use]
    pub const fn with_field(self, field: StyleField, option: ArticleOption) -> Self {
        Self {
            style: self.style.with_field(field, option),
            opened: self.opened,
        }
    }

    /// Flip the open flag.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            opened: !self.opened,
            ..self
        }
    }

    /// Replace the whole draft with `default`. The panel is left open.
    #[must_use]
    pub const fn reset_to(default: &ArticleState) -> Self {
        Self {
            style: *default,
            opened: true,
        }
    }

    /// Close the panel; a closed panel is returned unchanged.
    #[must_use]
    pub const fn dismissed(self) -> Self {
        if self.opened { self.toggled() } else { self }
    }

    /// Apply `action` and return the next draft.
    #[must_use]
    pub const fn transition(self, action: &FormAction) -> Self {
        match action {
            FormAction::Change(field, option) => self.with_field(*field, *option),
            FormAction::Submit => self,
            FormAction::Reset(default) => Self::reset_to(default),
            FormAction::Toggle => self.toggled(),
            FormAction::Dismiss => self.dismissed(),
        }
    }

    /// Run `action`: the next draft plus the settings owed to the host callback.
    ///
    /// The emitted record is computed against the draft *before* the
    /// transition, so apply sends exactly what the user saw.
    #[must_use]
    pub const fn step(self, action: &FormAction) -> (Self, Option<ArticleState>) {
        (self.transition(action), action.emitted(&self))
    }
}

/// Every input the parameters form reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    /// A selector or radio group picked a new option for a field.
    Change(StyleField, ArticleOption),
    /// The form was submitted ("apply").
    Submit,
    /// Revert to the given defaults.
    Reset(ArticleState),
    /// The trigger control was clicked.
    Toggle,
    /// An outside pointer-down or Escape press asked the panel to close.
    Dismiss,
}

impl FormAction {
    /// Settings forwarded to the host callback when `self` runs against `state`.
    #[must_use]
    pub const fn emitted(&self, state: &ParamsFormState) -> Option<ArticleState> {
        match self {
            Self::Submit => Some(state.style),
            Self::Reset(default) => Some(*default),
            Self::Change(..) | Self::Toggle | Self::Dismiss => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARIAL: ArticleOption = ArticleOption::new("Arial", "Arial", "arial");
    const SIZE_18: ArticleOption = ArticleOption::new("18", "18", "size-18");
    const SIZE_24: ArticleOption = ArticleOption::new("24", "24", "size-24");
    const BLACK: ArticleOption = ArticleOption::new("black", "black", "font-black");
    const WHITE: ArticleOption = ArticleOption::new("white", "white", "bg-white");
    const WIDTH_600: ArticleOption = ArticleOption::new("600px", "600px", "width-600");

    fn scenario_defaults() -> ArticleState {
        ArticleState {
            font_family: ARIAL,
            font_size: SIZE_18,
            font_color: BLACK,
            background_color: WHITE,
            content_width: WIDTH_600,
        }
    }

    fn run(
        state: ParamsFormState,
        action: FormAction,
        emitted: &mut Vec<ArticleState>,
    ) -> ParamsFormState {
        let (next, style) = state.step(&action);
        emitted.extend(style);
        next
    }

    #[test]
    fn default_uses_first_catalog_entries() {
        let state = ArticleState::default();
        for field in StyleField::all() {
            assert_eq!(state.get(field), field.options()[0]);
        }
    }

    #[test]
    fn new_draft_copies_defaults_and_starts_closed() {
        let defaults = ArticleState::default();
        let draft = ParamsFormState::new(&defaults);
        assert_eq!(draft.style, defaults);
        assert!(!draft.opened);
    }

    #[test]
    fn field_change_touches_only_that_field() {
        let base = ParamsFormState::new(&ArticleState::default()).toggled();
        for field in StyleField::all() {
            for option in field.options() {
                let next = base.transition(&FormAction::Change(field, *option));
                assert_eq!(next.style.get(field), *option);
                assert_eq!(next.opened, base.opened);
                for other in StyleField::all().into_iter().filter(|f| *f != field) {
                    assert_eq!(next.style.get(other), base.style.get(other));
                }
            }
        }
    }

    #[test]
    fn submit_emits_current_draft_once_without_changing_visibility() {
        let mut emitted = Vec::new();
        let draft = ParamsFormState::new(&ArticleState::default())
            .toggled()
            .with_field(StyleField::FontColor, FONT_COLORS[3]);
        let next = run(draft, FormAction::Submit, &mut emitted);
        assert_eq!(emitted, vec![draft.style]);
        assert_eq!(next, draft);
    }

    #[test]
    fn reset_emits_defaults_and_forces_open() {
        let defaults = ArticleState::default();
        for opened in [false, true] {
            let mut emitted = Vec::new();
            let draft = ParamsFormState {
                style: defaults.with_field(StyleField::ContentWidth, CONTENT_WIDTH_OPTIONS[1]),
                opened,
            };
            let next = run(draft, FormAction::Reset(defaults), &mut emitted);
            assert_eq!(emitted, vec![defaults]);
            assert_eq!(next.style, defaults);
            assert!(next.opened);
        }
    }

    #[test]
    fn toggle_flips_only_the_open_flag() {
        let mut emitted = Vec::new();
        let draft = ParamsFormState::new(&ArticleState::default());
        let opened = run(draft, FormAction::Toggle, &mut emitted);
        assert!(opened.opened);
        assert_eq!(opened.style, draft.style);
        let closed = run(opened, FormAction::Toggle, &mut emitted);
        assert_eq!(closed, draft);
        assert!(emitted.is_empty());
    }

    #[test]
    fn dismiss_closes_open_panel_and_ignores_closed_one() {
        let closed = ParamsFormState::new(&ArticleState::default());
        assert_eq!(closed.transition(&FormAction::Dismiss), closed);
        let open = closed.toggled();
        assert_eq!(open.transition(&FormAction::Dismiss), closed);
        assert_eq!(FormAction::Dismiss.emitted(&open), None);
    }

    #[test]
    fn style_attribute_lists_every_variable() {
        let style = ArticleState::default().style_attribute();
        assert_eq!(
            style,
            "--font-family: Open Sans;--font-size: 18px;--font-color: #000000;\
             --bg-color: #FFFFFF;--container-width: 1394px;"
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ArticleState::default()).expect("serialize");
        assert_eq!(json["fontFamily"]["value"], "Open Sans");
        assert_eq!(json["backgroundColor"]["optionClassName"], "option-white");
        assert!(json["contentWidth"].get("optionClassName").is_none());
    }

    #[test]
    fn step_emits_only_for_submit_and_reset() {
        let defaults = ArticleState::default();
        let draft = ParamsFormState::new(&defaults)
            .toggled()
            .with_field(StyleField::FontFamily, FONT_FAMILY_OPTIONS[2]);

        let (next, emitted) = draft.step(&FormAction::Submit);
        assert_eq!(next, draft);
        assert_eq!(emitted, Some(draft.style));

        let (next, emitted) = draft.step(&FormAction::Reset(defaults));
        assert_eq!(next, ParamsFormState::reset_to(&defaults));
        assert_eq!(emitted, Some(defaults));

        let change = FormAction::Change(StyleField::FontSize, FONT_SIZE_OPTIONS[2]);
        for action in [change, FormAction::Toggle, FormAction::Dismiss] {
            let (next, emitted) = draft.step(&action);
            assert_eq!(next, draft.transition(&action));
            assert_eq!(emitted, None);
        }
    }

    #[test]
    fn open_edit_apply_reset_scenario() {
        let defaults = scenario_defaults();
        let mut emitted = Vec::new();

        let state = ParamsFormState::new(&defaults);
        assert!(!state.opened);

        let state = run(state, FormAction::Toggle, &mut emitted);
        assert!(state.opened);

        let state = run(
            state,
            FormAction::Change(StyleField::FontSize, SIZE_24),
            &mut emitted,
        );
        let state = run(state, FormAction::Submit, &mut emitted);
        assert_eq!(
            emitted,
            vec![ArticleState {
                font_size: SIZE_24,
                ..defaults
            }]
        );

        let state = run(state, FormAction::Reset(defaults), &mut emitted);
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[1], defaults);
        assert!(state.opened);
        assert_eq!(state.style, defaults);
    }
}
