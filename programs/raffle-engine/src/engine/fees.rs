use anchor_lang::prelude::*;

use crate::{
    constants::{CREATION_FEE, MAX_CREATOR_COMMISSION_BPS, PLATFORM_FEE_BPS},
    error::RaffleError,
    money::Money,
    state::RawRaffle,
};

/// How a prize pool is divided at claim time.
///
/// `platform_fee + creator_commission + winner_payout == pool_base` always holds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub pool_base: Money,
    pub platform_fee: Money,
    pub creator_commission: Money,
    pub winner_payout: Money,
}

/// Flat anti-spam fee charged when a raffle is created.
pub fn compute_creation_fee() -> Money {
    CREATION_FEE
}

/// The pool the split is computed on.
///
/// Uses the live balance when there is one. A claimed or fully refunded raffle
/// has a drained balance, so the pool is reconstructed from tickets sold.
pub fn compute_pool_base(raw: &RawRaffle, on_chain_balance: Money) -> Result<Money> {
    if !on_chain_balance.is_zero() {
        return Ok(on_chain_balance);
    }
    raw.entry_fee.checked_mul(raw.current_participants)
}

/// Splits a pool into platform fee, creator commission and winner payout.
///
/// The platform fee (2%) comes off the gross pool first; the creator commission
/// is taken from what remains, and the winner gets the rest. Each cut floors, so
/// rounding dust stays with the winner.
pub fn split_fees(pool_base: Money, creator_commission_bps: u16) -> Result<FeeBreakdown> {
    require!(
        creator_commission_bps <= MAX_CREATOR_COMMISSION_BPS,
        RaffleError::CommissionTooHigh
    );

    let platform_fee = pool_base.mul_bps(PLATFORM_FEE_BPS)?;
    let after_platform = pool_base.checked_sub(platform_fee)?;
    let creator_commission = after_platform.mul_bps(creator_commission_bps)?;
    let winner_payout = after_platform.checked_sub(creator_commission)?;

    Ok(FeeBreakdown {
        pool_base,
        platform_fee,
        creator_commission,
        winner_payout,
    })
}

/// Projected pool if every ticket sells. Unlimited raffles have no cap to
/// project from, so they use the tickets sold so far.
pub fn expected_prize_pool(raw: &RawRaffle) -> Result<Money> {
    let tickets = if raw.is_unlimited() {
        raw.current_participants
    } else {
        raw.max_participants
    };
    raw.entry_fee.checked_mul(tickets)
}
