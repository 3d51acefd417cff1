pub(crate) mod article;
pub(crate) mod article_params_form;
pub(crate) mod atoms;
pub(crate) mod dismiss;

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod test_support;
