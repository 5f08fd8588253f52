use std::{fmt, str::FromStr};

use anchor_lang::prelude::*;

use crate::{error::RaffleError, money::Money, state::Address};

/// Lifecycle status of a raffle. The contract stores the same discriminants in
/// its own status field, but only `Cancelled` and `Claimed` are kept current
/// there; see [`crate::resolve_status`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RaffleStatus {
    Upcoming,
    Active,
    Ended,
    Drawn,
    Cancelled,
    Claimed,
}

impl RaffleStatus {
    pub const ALL: [RaffleStatus; 6] = [
        RaffleStatus::Upcoming,
        RaffleStatus::Active,
        RaffleStatus::Ended,
        RaffleStatus::Drawn,
        RaffleStatus::Cancelled,
        RaffleStatus::Claimed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RaffleStatus::Upcoming => "upcoming",
            RaffleStatus::Active => "active",
            RaffleStatus::Ended => "ended",
            RaffleStatus::Drawn => "drawn",
            RaffleStatus::Cancelled => "cancelled",
            RaffleStatus::Claimed => "claimed",
        }
    }

    /// Cancelled and claimed raffles never change again.
    pub fn is_final(self) -> bool {
        matches!(self, RaffleStatus::Cancelled | RaffleStatus::Claimed)
    }

    /// Tickets may still be sold and the creator may still cancel.
    pub fn is_open(self) -> bool {
        matches!(self, RaffleStatus::Upcoming | RaffleStatus::Active)
    }
}

impl TryFrom<u8> for RaffleStatus {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(RaffleStatus::Upcoming),
            1 => Ok(RaffleStatus::Active),
            2 => Ok(RaffleStatus::Ended),
            3 => Ok(RaffleStatus::Drawn),
            4 => Ok(RaffleStatus::Cancelled),
            5 => Ok(RaffleStatus::Claimed),
            _ => err!(RaffleError::InvalidStatus),
        }
    }
}

impl From<RaffleStatus> for u8 {
    fn from(status: RaffleStatus) -> Self {
        match status {
            RaffleStatus::Upcoming => 0,
            RaffleStatus::Active => 1,
            RaffleStatus::Ended => 2,
            RaffleStatus::Drawn => 3,
            RaffleStatus::Cancelled => 4,
            RaffleStatus::Claimed => 5,
        }
    }
}

impl fmt::Display for RaffleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RaffleStatus {
    type Err = anchor_lang::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        RaffleStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RaffleError::UnknownStatusFilter.into())
    }
}

/// Raffle fields as read from chain. Nothing here is trusted to be current
/// except the values themselves; the status is recomputed on every read.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RawRaffle {
    pub title: String,
    pub description: String,
    pub entry_fee: Money,
    /// Unix timestamp after which no tickets are sold
    pub deadline: i64,
    /// 0 means unlimited
    pub max_participants: u64,
    /// Tickets sold, not unique wallets
    pub current_participants: u64,
    pub contract_status: RaffleStatus,
    pub creator: Address,
    /// Zero address until a winner is drawn
    pub winner: Address,
    pub creator_commission_bps: u16,
}

impl RawRaffle {
    pub fn winner(&self) -> Option<Address> {
        (!self.winner.is_zero()).then_some(self.winner)
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_participants == 0
    }

    pub fn is_full(&self) -> bool {
        !self.is_unlimited() && self.current_participants >= self.max_participants
    }

    pub fn has_ended(&self, now: i64) -> bool {
        self.deadline <= now
    }

    /// Tickets still for sale, or `None` when there is no cap.
    pub fn remaining_capacity(&self) -> Option<u64> {
        if self.is_unlimited() {
            None
        } else {
            Some(self.max_participants.saturating_sub(self.current_participants))
        }
    }

    /// Seconds left before the deadline, 0 once it has passed.
    pub fn seconds_remaining(&self, now: i64) -> u64 {
        u64::try_from(self.deadline.saturating_sub(now)).unwrap_or(0)
    }
}
