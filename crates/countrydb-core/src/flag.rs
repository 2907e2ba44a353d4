// crates/countrydb-core/src/flag.rs

//! Emoji flag derivation.
//!
//! Unicode renders a pair of regional indicator symbols as a national flag.
//! Each uppercase ASCII letter maps onto the U+1F1E6..U+1F1FF block at a
//! fixed offset, so the flag for an ISO 3166-1 alpha-2 code is just the two
//! shifted letters side by side.

/// Offset from an uppercase ASCII letter to its regional indicator symbol
/// (`'A'` becomes U+1F1E6).
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// Derive the emoji flag for an ISO 3166-1 alpha-2 code.
///
/// Input is uppercased first, so `"tw"` and `"TW"` produce the same glyph.
/// The bundled dataset only ever feeds well-formed two-letter codes through
/// here; a character with no regional indicator mapping is skipped rather
/// than rejected.
///
/// # Examples
///
/// ```
/// use countrydb_core::flag_emoji;
///
/// assert_eq!(flag_emoji("TW"), "🇹🇼");
/// assert_eq!(flag_emoji("de"), "🇩🇪");
/// ```
pub fn flag_emoji(alpha2: &str) -> String {
    let mut flag = String::new();
    for ch in alpha2.chars() {
        let shifted = ch.to_ascii_uppercase() as u32 + REGIONAL_INDICATOR_OFFSET;
        if let Some(symbol) = char::from_u32(shifted) {
            flag.push(symbol);
        }
    }
    flag
}
