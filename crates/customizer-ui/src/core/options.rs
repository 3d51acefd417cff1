//! Option catalogs for every article style field.
//!
//! # Design
//! - Catalogs are `'static` slices so options stay `Copy` and comparable by value.
//! - The first entry of each catalog is the default applied style.
//! - Raw control values are resolved back to catalog entries in one place.

use crate::core::error::StyleError;
use serde::Serialize;
use std::fmt;

/// A single selectable choice for one style field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleOption {
    /// Label shown in selectors and radio groups.
    pub title: &'static str,
    /// Machine value written into the page styles.
    pub value: &'static str,
    /// CSS class applied to the rendered selection.
    pub class_name: &'static str,
    /// Optional CSS class for the option row inside a dropdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_class_name: Option<&'static str>,
}

impl ArticleOption {
    /// Build an option without a dedicated dropdown row class.
    #[must_use]
    pub const fn new(title: &'static str, value: &'static str, class_name: &'static str) -> Self {
        Self {
            title,
            value,
            class_name,
            option_class_name: None,
        }
    }

    /// Attach a dropdown row class (used by color swatches).
    #[must_use]
    pub const fn with_option_class(self, option_class_name: &'static str) -> Self {
        Self {
            option_class_name: Some(option_class_name),
            ..self
        }
    }
}

/// Font family choices.
pub const FONT_FAMILY_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Open Sans", "Open Sans", "open-sans"),
    ArticleOption::new("Ubuntu", "Ubuntu", "ubuntu"),
    ArticleOption::new("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    ArticleOption::new("Days One", "Days One", "days-one"),
    ArticleOption::new("Merriweather", "Merriweather", "merriweather"),
];

/// Font size choices.
pub const FONT_SIZE_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("18px", "18px", "font-size-18"),
    ArticleOption::new("25px", "25px", "font-size-25"),
    ArticleOption::new("38px", "38px", "font-size-38"),
];

/// Font color choices.
pub const FONT_COLORS: &[ArticleOption] = &[
    ArticleOption::new("Черный", "#000000", "font-black").with_option_class("option-black"),
    ArticleOption::new("Белый", "#FFFFFF", "font-white").with_option_class("option-white"),
    ArticleOption::new("Серый", "#C4C4C4", "font-gray").with_option_class("option-gray"),
    ArticleOption::new("Розовый", "#FEAFE8", "font-pink").with_option_class("option-pink"),
    ArticleOption::new("Ярко-розовый", "#FD24AF", "font-fuchsia")
        .with_option_class("option-fuchsia"),
    ArticleOption::new("Жёлтый", "#FFC802", "font-yellow").with_option_class("option-yellow"),
    ArticleOption::new("Зелёный", "#80D994", "font-green").with_option_class("option-green"),
    ArticleOption::new("Голубой", "#6FC1FD", "font-blue").with_option_class("option-blue"),
    ArticleOption::new("Фиолетовый", "#5F00D8", "font-purple").with_option_class("option-purple"),
];

/// Page background color choices.
pub const BACKGROUND_COLORS: &[ArticleOption] = &[
    ArticleOption::new("Белый", "#FFFFFF", "bg-white").with_option_class("option-white"),
    ArticleOption::new("Черный", "#000000", "bg-black").with_option_class("option-black"),
    ArticleOption::new("Серый", "#C4C4C4", "bg-gray").with_option_class("option-gray"),
    ArticleOption::new("Розовый", "#FEAFE8", "bg-pink").with_option_class("option-pink"),
    ArticleOption::new("Ярко-розовый", "#FD24AF", "bg-fuchsia")
        .with_option_class("option-fuchsia"),
    ArticleOption::new("Жёлтый", "#FFC802", "bg-yellow").with_option_class("option-yellow"),
    ArticleOption::new("Зелёный", "#80D994", "bg-green").with_option_class("option-green"),
    ArticleOption::new("Голубой", "#6FC1FD", "bg-blue").with_option_class("option-blue"),
    ArticleOption::new("Фиолетовый", "#5F00D8", "bg-purple").with_option_class("option-purple"),
];

/// Content column width choices.
pub const CONTENT_WIDTH_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Широкий", "1394px", "width-wide"),
    ArticleOption::new("Узкий", "948px", "width-narrow"),
];

/// The five configurable article style fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleField {
    /// Font family of the article text.
    FontFamily,
    /// Font size of the article text.
    FontSize,
    /// Font color of the article text.
    FontColor,
    /// Page background color.
    BackgroundColor,
    /// Width of the content column.
    ContentWidth,
}

impl StyleField {
    /// All fields in the order the form renders them.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::FontFamily,
            Self::FontSize,
            Self::FontColor,
            Self::BackgroundColor,
            Self::ContentWidth,
        ]
    }

    /// Stable identifier, also used as the form control name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FontFamily => "fontFamilyOption",
            Self::FontSize => "fontSizeOption",
            Self::FontColor => "fontColor",
            Self::BackgroundColor => "backgroundColor",
            Self::ContentWidth => "contentWidth",
        }
    }

    /// Fixed catalog of options allowed for this field.
    #[must_use]
    pub const fn options(self) -> &'static [ArticleOption] {
        match self {
            Self::FontFamily => FONT_FAMILY_OPTIONS,
            Self::FontSize => FONT_SIZE_OPTIONS,
            Self::FontColor => FONT_COLORS,
            Self::BackgroundColor => BACKGROUND_COLORS,
            Self::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    /// CSS custom property the host page reads for this field.
    #[must_use]
    pub const fn css_variable(self) -> &'static str {
        match self {
            Self::FontFamily => "--font-family",
            Self::FontSize => "--font-size",
            Self::FontColor => "--font-color",
            Self::BackgroundColor => "--bg-color",
            Self::ContentWidth => "--container-width",
        }
    }

    /// Resolve a raw control value into its catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownOption`] when the value is not part of this
    /// field's catalog.
    pub fn find_option(self, value: &str) -> Result<ArticleOption, StyleError> {
        self.options()
            .iter()
            .find(|option| option.value == value)
            .copied()
            .ok_or_else(|| StyleError::UnknownOption {
                field: self,
                value: value.to_string(),
            })
    }
}

impl fmt::Display for StyleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
