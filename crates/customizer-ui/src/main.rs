#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Article customizer wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    customizer_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "customizer-ui renders the article parameters panel in the browser and has no native mode.\n\
Serve it with `trunk serve` from crates/customizer-ui, or build the wasm bundle with `trunk build`.\n";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    io::stderr().lock().write_all(NATIVE_HINT.as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::{NATIVE_HINT, main};

    #[test]
    fn native_main_prints_trunk_hint() -> std::io::Result<()> {
        assert!(NATIVE_HINT.contains("trunk serve"));
        main()
    }
}
