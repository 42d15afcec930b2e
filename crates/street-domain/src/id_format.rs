//! Structural checks for Indian business registration numbers.
//!
//! These validate format only; no registry lookup is made.

use std::sync::LazyLock;

use regex::Regex;

static GSTIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("valid GSTIN pattern")
});

static FSSAI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{14}$").expect("valid FSSAI pattern"));

/// GSTIN: 15 characters, checked after trimming and upper-casing.
pub fn gstin_format_is_valid(gstin: &str) -> bool {
    GSTIN.is_match(&gstin.trim().to_uppercase())
}

/// FSSAI licence number: exactly 14 digits after trimming.
pub fn fssai_format_is_valid(fssai: &str) -> bool {
    FSSAI.is_match(fssai.trim())
}
