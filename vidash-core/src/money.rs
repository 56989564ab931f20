//! Revenue conversion and display formatting.
//!
//! Upstream analytics report revenue in USD; the dashboard displays rupiah.
//! The rate is a fixed snapshot rather than a live quote, so formatted values
//! stay stable across a session.

/// Fixed USD to IDR conversion rate applied to reported revenue.
const USD_TO_IDR: f64 = 16_000.0;

/// Convert native USD revenue to its rupiah display string.
#[must_use]
pub fn revenue_display(native_usd: f64) -> String {
    let idr = (native_usd * USD_TO_IDR).round().max(0.0) as u64;
    format_idr(idr)
}

/// The display value used when revenue is unavailable or gated.
#[must_use]
pub fn zero_revenue() -> String {
    format_idr(0)
}

/// Format a rupiah amount with dot-grouped thousands, e.g. `Rp 1.234.567`.
#[must_use]
pub fn format_idr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}
