//! Process-wide debug knobs, read once from the environment.
//!
//! Runtime tracing goes through the `tracing` crate and is controlled by
//! whatever subscriber the application installs. The knob here covers the
//! one switch the model itself latches at table creation: padding debug,
//! which renderers use to make padding visible in their output.

use once_cell::sync::Lazy;

static PADDING_DEBUG: Lazy<bool> = Lazy::new(|| {
    std::env::var("TRELLIS_DEBUG_PADDING")
        .map(|v| is_on(&v))
        .unwrap_or(false)
});

/// Value parse shared by all on/off env knobs.
fn is_on(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("on")
}

/// True if `TRELLIS_DEBUG_PADDING` was set when first consulted.
pub(crate) fn padding_debug() -> bool {
    *PADDING_DEBUG
}
