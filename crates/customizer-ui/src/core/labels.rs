//! Display labels for the article parameters form.

use crate::core::options::StyleField;

/// Fixed captions rendered by the form. Passed as a prop so hosts can relabel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormLabels {
    /// Font family selector title.
    pub font_family: &'static str,
    /// Font size radio group title.
    pub font_size: &'static str,
    /// Font color selector title.
    pub font_color: &'static str,
    /// Background color selector title.
    pub background_color: &'static str,
    /// Content width selector title.
    pub content_width: &'static str,
    /// Reset button caption.
    pub reset: &'static str,
    /// Apply button caption.
    pub apply: &'static str,
    /// Accessible label of the trigger while the panel is closed.
    pub open_panel: &'static str,
    /// Accessible label of the trigger while the panel is open.
    pub close_panel: &'static str,
}

impl Default for FormLabels {
    fn default() -> Self {
        Self {
            font_family: "Шрифт",
            font_size: "Размер шрифта",
            font_color: "Цвет шрифта",
            background_color: "Цвет фона",
            content_width: "Ширина контента",
            reset: "Сбросить",
            apply: "Применить",
            open_panel: "Открыть форму параметров статьи",
            close_panel: "Закрыть форму параметров статьи",
        }
    }
}

impl FormLabels {
    /// Title for the control editing `field`.
    #[must_use]
    pub const fn title(&self, field: StyleField) -> &'static str {
        match field {
            StyleField::FontFamily => self.font_family,
            StyleField::FontSize => self.font_size,
            StyleField::FontColor => self.font_color,
            StyleField::BackgroundColor => self.background_color,
            StyleField::ContentWidth => self.content_width,
        }
    }

    /// Accessible label for the trigger in the given open state.
    #[must_use]
    pub const fn toggle_label(&self, opened: bool) -> &'static str {
        if opened {
            self.close_panel
        } else {
            self.open_panel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FormLabels;
    use crate::core::options::StyleField;

    #[test]
    fn default_titles_match_fields() {
        let labels = FormLabels::default();
        assert_eq!(labels.title(StyleField::FontFamily), "Шрифт");
        assert_eq!(labels.title(StyleField::FontSize), "Размер шрифта");
        assert_eq!(labels.title(StyleField::FontColor), "Цвет шрифта");
        assert_eq!(labels.title(StyleField::BackgroundColor), "Цвет фона");
        assert_eq!(labels.title(StyleField::ContentWidth), "Ширина контента");
        assert_eq!(labels.reset, "Сбросить");
        assert_eq!(labels.apply, "Применить");
    }

    #[test]
    fn toggle_label_follows_open_state() {
        let labels = FormLabels::default();
        assert_ne!(labels.toggle_label(true), labels.toggle_label(false));
        assert_eq!(labels.toggle_label(false), labels.open_panel);
    }
}
