use std::{fmt, str::FromStr};

use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOMINATOR, MINOR_UNITS_PER_USDC, USDC_DECIMALS},
    error::RaffleError,
};

/// A USDC amount held as integer minor units (1 unit = $0.000001).
///
/// All fee and validation arithmetic goes through this type so that no value
/// ever passes through floating point.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor_units(units: u64) -> Self {
        Money(units)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Money) -> Result<Money> {
        let units = self.0.checked_add(other.0).ok_or(RaffleError::Overflow)?;
        Ok(Money(units))
    }

    pub fn checked_sub(self, other: Money) -> Result<Money> {
        let units = self.0.checked_sub(other.0).ok_or(RaffleError::Underflow)?;
        Ok(Money(units))
    }

    /// Multiplies by a count, e.g. an entry fee by a number of tickets.
    pub fn checked_mul(self, count: u64) -> Result<Money> {
        let units = self.0.checked_mul(count).ok_or(RaffleError::Overflow)?;
        Ok(Money(units))
    }

    /// `floor(self * bps / 10000)`, computed in `u128` so the product never overflows.
    pub fn mul_bps(self, bps: u16) -> Result<Money> {
        let scaled = (self.0 as u128) * (bps as u128) / (BPS_DENOMINATOR as u128);
        let units = u64::try_from(scaled).or(Err(RaffleError::Overflow))?;
        Ok(Money(units))
    }

    /// Parses `"10000.00"`, `"$1.5"` or `"0.25 USDC"` into minor units.
    pub fn from_decimal_str(input: &str) -> Result<Money> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_suffix("USDC").unwrap_or(trimmed).trim_end();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => {
                require!(!fraction.is_empty(), RaffleError::InvalidAmount);
                (whole, fraction)
            }
            None => (trimmed, ""),
        };
        require!(!whole.is_empty(), RaffleError::InvalidAmount);
        require!(
            whole.bytes().all(|b| b.is_ascii_digit()),
            RaffleError::InvalidAmount
        );
        require!(
            fraction.bytes().all(|b| b.is_ascii_digit()),
            RaffleError::InvalidAmount
        );
        require!(
            fraction.len() <= USDC_DECIMALS as usize,
            RaffleError::InvalidAmount
        );

        let whole_units = whole
            .parse::<u64>()
            .or(Err(RaffleError::InvalidAmount))?
            .checked_mul(MINOR_UNITS_PER_USDC)
            .ok_or(RaffleError::InvalidAmount)?;

        // Right-pad the fraction to six digits: "5" is 500_000 minor units.
        let fraction_units = if fraction.is_empty() {
            0
        } else {
            let padding = 10u64.pow(USDC_DECIMALS - fraction.len() as u32);
            fraction.parse::<u64>().or(Err(RaffleError::InvalidAmount))? * padding
        };

        let units = whole_units
            .checked_add(fraction_units)
            .ok_or(RaffleError::InvalidAmount)?;
        Ok(Money(units))
    }

    /// Renders at least two fraction digits, more only when they are significant.
    pub fn to_decimal_string(self) -> String {
        let whole = self.0 / MINOR_UNITS_PER_USDC;
        let fraction = format!(
            "{:0width$}",
            self.0 % MINOR_UNITS_PER_USDC,
            width = USDC_DECIMALS as usize
        );
        let significant = fraction.trim_end_matches('0');
        let shown = if significant.len() < 2 {
            &fraction[..2]
        } else {
            significant
        };
        format!("{whole}.{shown}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} USDC", self.to_decimal_string())
    }
}

impl FromStr for Money {
    type Err = anchor_lang::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Money::from_decimal_str(s)
    }
}
