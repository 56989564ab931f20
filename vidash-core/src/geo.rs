//! Country-code normalization for geographic view breakdowns.
//!
//! Chart components expect ISO 3166-1 alpha-2 codes while some report rows
//! arrive alpha-3 coded. A small override table handles the codes whose
//! truncation would be wrong, and the remainder fall back to the first two
//! letters uppercased.

/// Alpha-3 codes whose two-letter truncation does not match the alpha-2 form.
const ALPHA3_OVERRIDES: &[(&str, &str)] = &[
    ("IDN", "ID"),
    ("USA", "US"),
    ("GBR", "UK"),
    ("JPN", "JP"),
    ("KOR", "KR"),
];

/// Normalize a country code to its two-letter display form.
///
/// Codes already two letters long (or any other length than three) pass
/// through unchanged apart from uppercasing.
#[must_use]
pub fn to_alpha2(code: &str) -> String {
    let upper = code.trim().to_ascii_uppercase();
    if upper.len() != 3 {
        return upper;
    }
    for (alpha3, alpha2) in ALPHA3_OVERRIDES {
        if upper == *alpha3 {
            return (*alpha2).to_string();
        }
    }
    upper[..2].to_string()
}
