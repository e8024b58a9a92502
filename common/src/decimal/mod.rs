//! Decimal type utilities for precise monetary calculations

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Price type with exact decimal precision
pub type Price = Decimal;

/// Amount type with exact decimal precision (typically Price * quantity)
pub type Amount = Decimal;

/// Precision helpers for common operations
pub mod precision {
    use super::*;
    use rust_decimal::RoundingStrategy;

    /// Money precision (2 decimal places)
    pub const MONEY_PRECISION: u32 = 2;

    /// Round an amount to money precision, half-up
    pub fn round_money(amount: Amount) -> Amount {
        amount.round_dp_with_strategy(MONEY_PRECISION, RoundingStrategy::MidpointAwayFromZero)
    }
}
