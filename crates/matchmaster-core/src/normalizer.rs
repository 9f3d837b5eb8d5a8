//! Canonical normalizer — converts free text to an aggregation key
//!
//! Two entries are "the same item" exactly when their canonical keys are
//! equal. The key ignores case, accents, whitespace and punctuation.
//!
//! # Pipeline
//!
//! `lowercase → NFD → strip U+0300..=U+036F → drop whitespace → keep [a-z0-9]`
//!
//! The order is fixed. Lowercasing first lets characters whose lowercase
//! form decomposes (e.g. `İ` → `i` + U+0307) lose their marks in step 3.
//!
//! # Guarantees
//!
//! - **Idempotent**: `normalize(normalize(x)) == normalize(x)`
//! - **Deterministic**: same input always produces same output
//! - **Closed alphabet**: output contains only `[a-z0-9]`, possibly empty

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

// ── Public API ─────────────────────────────────────────────

/// Normalize raw text to its canonical key.
///
/// ```
/// use matchmaster_core::normalize;
///
/// assert_eq!(normalize("Café au lait!"), "cafeaulait");
/// assert_eq!(normalize("  ice cream "), normalize("IceCream"));
/// assert_eq!(normalize("?!"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    // ── Step 1: Lowercase ──────────────────────────────
    let lower = raw.to_lowercase();

    // ── Step 2 + 3: Decompose, strip combining marks ───
    let stripped = lower.nfd().filter(|c| !COMBINING_MARKS.contains(c));

    // ── Step 4 + 5: Drop whitespace, keep [a-z0-9] ─────
    stripped
        .filter(|c| !c.is_whitespace())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// True when `raw` normalizes to the empty key and will never be matched.
///
/// Empty slots and punctuation-only entries are treated alike.
pub fn is_blank(raw: &str) -> bool {
    normalize(raw).is_empty()
}
