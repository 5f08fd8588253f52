use std::{fmt, str::FromStr};

use anchor_lang::prelude::*;

use crate::error::RaffleError;

pub const ADDRESS_LEN: usize = 20;

/// A 20-byte contract or wallet address.
///
/// Comparison is over the raw bytes, so two hex spellings that differ only in
/// letter case are the same address.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The zero address, used on chain to mean "no winner".
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    pub fn is_zero(&self) -> bool {
        *self == Address::ZERO
    }

    pub fn to_bytes(self) -> [u8; ADDRESS_LEN] {
        self.0
    }
}

impl FromStr for Address {
    type Err = anchor_lang::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .trim()
            .strip_prefix("0x")
            .or_else(|| s.trim().strip_prefix("0X"))
            .ok_or(RaffleError::InvalidAddress)?;
        require!(
            hex.len() == ADDRESS_LEN * 2 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            RaffleError::InvalidAddress
        );

        let mut bytes = [0u8; ADDRESS_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .or(Err(RaffleError::InvalidAddress))?;
        }
        Ok(Address(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
