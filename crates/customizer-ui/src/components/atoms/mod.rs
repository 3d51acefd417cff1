//! Stateless leaf controls composed by the parameters form.

pub(crate) mod arrow_button;
pub(crate) mod button;
pub(crate) mod radio_group;
pub(crate) mod select;
pub(crate) mod separator;
pub(crate) mod spacing;

pub(crate) use arrow_button::ArrowButton;
pub(crate) use button::Button;
pub(crate) use radio_group::RadioGroup;
pub(crate) use select::Select;
pub(crate) use separator::Separator;
pub(crate) use spacing::Spacing;
