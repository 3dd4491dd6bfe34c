//! # Validation Module
//!
//! Input normalization and validation for the storefront pipeline.
//!
//! Two kinds of user input arrive here, with deliberately different
//! policies:
//!
//! - **Search queries** are validated (length cap) and normalized
//!   (trimmed, lowercased) before reaching the filter predicate.
//! - **Price bounds** are permissive: malformed text degrades to the
//!   unrestricted bound instead of failing, so a typo in the price box
//!   never breaks the page.
//!
//! ## Usage
//! ```rust
//! use pecaaq_core::validation::{parse_price_input, validate_search_query};
//!
//! assert_eq!(validate_search_query("  Filtro ").unwrap(), "filtro");
//!
//! // "250,50" and "250.50" both parse; junk degrades to None (= unbounded)
//! assert!(parse_price_input("250,50").is_some());
//! assert!(parse_price_input("abc").is_none());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_QUERY_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Search Query
// =============================================================================

/// Validates and normalizes a free-text search query.
///
/// ## Rules
/// - Can be empty (empty query = no search restriction)
/// - Maximum 100 characters after trimming
///
/// ## Returns
/// The trimmed, lowercased query string - the exact form the filter
/// predicate and the suggestion matcher expect.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_lowercase())
}

// =============================================================================
// Price Range Input
// =============================================================================

/// Parses a raw price-bound field into Money.
///
/// ## Permissive Policy
/// Non-numeric or empty input returns `None`, which the filter treats as
/// the unrestricted bound (0 for min, +infinity for max). This mirrors the
/// page behavior: a malformed price box never raises an error.
///
/// ## Accepted Forms
/// - `"120"`       → R$ 120,00
/// - `"120.50"`    → R$ 120,50 (dot decimal separator)
/// - `"120,50"`    → R$ 120,50 (comma decimal separator)
/// - `"120,5"`     → R$ 120,50 (single fraction digit)
/// - `"-50"`       → R$ -50,00 (a negative bound is a real bound: as a
///   maximum it excludes every catalog product)
/// - `"12.345"`    → R$ 12,35 (over-precise fractions round to centavos)
///
/// Only non-numeric text degrades. Any parseable decimal - negative,
/// over-precise - is applied as written.
pub fn parse_price_input(input: &str) -> Option<Money> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // Normalize the Brazilian comma separator to a dot, then split into
    // sign, integer, and fraction parts.
    let normalized = input.replace(',', ".");
    let (negative, digits) = match normalized.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, normalized.as_str()),
    };

    let mut parts = digits.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let reais: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };

    // ".5" means 50 centavos, ".05" means 5; a third digit rounds
    let centavos: i64 = match frac_part.len() {
        0 => 0,
        1 => frac_part.parse::<i64>().ok()? * 10,
        2 => frac_part.parse().ok()?,
        _ => {
            let truncated: i64 = frac_part[..2].parse().ok()?;
            let round_up = frac_part.as_bytes()[2] >= b'5';
            truncated + i64::from(round_up)
        }
    };

    let magnitude = reais * 100 + centavos;
    Some(Money::from_centavos(if negative {
        -magnitude
    } else {
        magnitude
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
