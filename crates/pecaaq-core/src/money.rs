//! # Money Module
//!
//! Provides the `Money` type for handling product prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A price-range filter on floats can silently drop boundary products:   │
//! │    250.50 <= 250.50 may fail after float round-trips                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    R$ 250,50 = 25050 centavos - exact comparisons, exact bounds        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pecaaq_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_centavos(12000); // R$ 120,00
//!
//! // Display in Brazilian format
//! assert_eq!(price.to_string(), "R$ 120,00");
//!
//! // Installment display math (3x of R$ 120,00)
//! assert_eq!(price.installment(3).to_string(), "R$ 40,00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (the smallest BRL unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Headroom for arithmetic; catalog prices are never
///   negative, which `Catalog::load` relies on from the seed contract
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives `Ord`**: The price sorts and the range filter compare `Money`
///   values directly, never floats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use pecaaq_core::money::Money;
    ///
    /// let price = Money::from_centavos(4530); // R$ 45,30
    /// assert_eq!(price.centavos(), 4530);
    /// ```
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from reais and centavos.
    ///
    /// ## Example
    /// ```rust
    /// use pecaaq_core::money::Money;
    ///
    /// let price = Money::from_reais(120, 0); // R$ 120,00
    /// assert_eq!(price.centavos(), 12000);
    /// ```
    #[inline]
    pub const fn from_reais(reais: i64, centavos: i64) -> Self {
        Money(reais * 100 + centavos)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-real portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The per-installment value for an `parcels`-way split.
    ///
    /// Rounded division, for display only ("Em até 3x R$ 40,00 sem juros").
    /// No financial logic hangs off this value, so the rounding remainder is
    /// not redistributed. `parcels == 0` yields the price unchanged: the
    /// catalog load contract keeps `parcels >= 1`, but a hand-built product
    /// must not panic the display path.
    ///
    /// ## Example
    /// ```rust
    /// use pecaaq_core::money::Money;
    ///
    /// let price = Money::from_centavos(25050); // R$ 250,50
    /// assert_eq!(price.installment(5).centavos(), 5010); // R$ 50,10
    /// ```
    pub const fn installment(&self, parcels: u32) -> Money {
        let divisor = if parcels == 0 { 1 } else { parcels as i64 };
        Money((self.0 + divisor / 2) / divisor)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in Brazilian format: `R$ 120,00`.
///
/// ## Note
/// The storefront's card template uses this exact form (comma decimal
/// separator, no thousands grouping), matching what the catalog page shows.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            self.reais().abs(),
            self.centavos_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
