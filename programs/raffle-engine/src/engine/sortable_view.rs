use anchor_lang::prelude::*;

use crate::{
    engine::{
        expected_prize_pool,
        query_list::{paginate, resolve_all},
        ListedRaffle, Page,
    },
    money::Money,
    state::{Address, RaffleStatus, RawRaffle},
};

/// Coarse status buckets used by the explore page tabs.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTab {
    #[default]
    All,
    /// Upcoming or active
    Active,
    Ended,
    /// Drawn, cancelled or claimed
    Completed,
}

impl StatusTab {
    pub fn contains(self, status: RaffleStatus) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Active => status.is_open(),
            StatusTab::Ended => status == RaffleStatus::Ended,
            StatusTab::Completed => matches!(
                status,
                RaffleStatus::Drawn | RaffleStatus::Cancelled | RaffleStatus::Claimed
            ),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    EntryFee,
    ExpectedPrizePool,
    CreatorCommission,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExploreView {
    pub tab: StatusTab,
    pub sort_key: SortKey,
    pub order: SortOrder,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Explore ordering: raffles in `view.tab`, sorted by the chosen key.
///
/// Equal keys keep their input order in both directions. A raffle whose
/// expected prize pool does not fit in `u64` sorts as the largest pool.
pub fn sortable_view(items: &[(RawRaffle, Address)], view: &ExploreView, now: i64) -> Page {
    let mut keyed: Vec<(u64, ListedRaffle)> = resolve_all(items, now)
        .filter(|listed| view.tab.contains(listed.status))
        .map(|listed| (sort_value(&listed.raffle, view.sort_key), listed))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match view.order {
        SortOrder::Ascending => a.cmp(b),
        SortOrder::Descending => b.cmp(a),
    });

    let sorted = keyed.into_iter().map(|(_, listed)| listed).collect();
    paginate(sorted, view.limit, view.offset)
}

fn sort_value(raw: &RawRaffle, key: SortKey) -> u64 {
    match key {
        SortKey::EntryFee => raw.entry_fee.minor_units(),
        SortKey::ExpectedPrizePool => expected_prize_pool(raw)
            .map(Money::minor_units)
            .unwrap_or(u64::MAX),
        SortKey::CreatorCommission => raw.creator_commission_bps as u64,
    }
}
