// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Everything logs through `tracing` macros. [`init`] installs a `fmt`
//! subscriber whose level comes from `RUST_LOG`, or from the build profile
//! when the variable is unset.

use tracing_subscriber::EnvFilter;

/// Default directives: this crate at debug in debug builds, wgpu and the
/// windowing stack kept quiet.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        "info".to_string(),
        if is_dev {
            "iced_folio=debug"
        } else {
            "iced_folio=info"
        }
        .to_string(),
        "wgpu_core=warn".to_string(),
        "wgpu_hal=warn".to_string(),
        "naga=warn".to_string(),
        "cosmic_text=warn".to_string(),
    ]
}

/// Installs the global subscriber. Later calls are no-ops and return `false`.
pub fn init() -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(cfg!(debug_assertions)).join(",")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
