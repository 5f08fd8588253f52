use anchor_lang::prelude::*;

use crate::{
    engine::{
        compute_pool_base, evaluate_actions, expected_prize_pool, resolve_status, split_fees,
        ActionSet, FeeBreakdown,
    },
    money::Money,
    state::{Address, RaffleStatus, RawRaffle},
};

/// Everything a raffle detail route or hook shows for one raffle.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleOverview {
    pub address: Address,
    pub status: RaffleStatus,
    pub fees: FeeBreakdown,
    pub expected_prize_pool: Money,
    /// `None` when the raffle is uncapped
    pub remaining_capacity: Option<u64>,
    pub seconds_remaining: u64,
    pub actions: ActionSet,
}

/// Resolves status, fees and actions for one raffle in a single pass.
pub fn describe_raffle(
    address: Address,
    raw: &RawRaffle,
    on_chain_balance: Money,
    now: i64,
    requested_ticket_count: u64,
) -> Result<RaffleOverview> {
    let status = resolve_status(raw, now);
    let pool_base = compute_pool_base(raw, on_chain_balance)?;

    Ok(RaffleOverview {
        address,
        status,
        fees: split_fees(pool_base, raw.creator_commission_bps)?,
        expected_prize_pool: expected_prize_pool(raw)?,
        remaining_capacity: raw.remaining_capacity(),
        seconds_remaining: raw.seconds_remaining(now),
        actions: evaluate_actions(raw, status, now, requested_ticket_count),
    })
}
