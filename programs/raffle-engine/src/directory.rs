use anchor_lang::prelude::*;

use crate::{
    engine::{describe_raffle, query_list, sortable_view, ExploreView, ListQuery, Page, RaffleOverview},
    money::Money,
    state::{Address, RawRaffle},
};

/// One consistent read of a raffle and its prize pool balance.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleSnapshot {
    pub raffle: RawRaffle,
    pub balance: Money,
}

/// Chain-read collaborator. Implementations own transport, batching, timeouts
/// and retries; errors they return are passed through untouched.
pub trait RaffleSource {
    /// Known raffle addresses, optionally only those created by `creator`.
    fn raffle_addresses(&self, creator: Option<&Address>) -> Result<Vec<Address>>;

    fn fetch_raffle(&self, address: &Address) -> Result<RaffleSnapshot>;
}

/// Feeds chain snapshots into the engine. The source is handed in at
/// construction, so the engine never reaches for a global client.
pub struct RaffleDirectory<S> {
    source: S,
}

impl<S: RaffleSource> RaffleDirectory<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Lists raffles for `query`, resolved at `now`.
    pub fn list(&self, query: &ListQuery, now: i64) -> Result<Page> {
        let items = self.load(query.creator_filter.as_ref())?;
        let page = query_list(&items, query, now)?;
        msg!(
            "Listed {} of {} raffles (offset {}, limit {})",
            page.items.len(),
            page.total,
            page.offset,
            page.limit
        );
        Ok(page)
    }

    pub fn explore(&self, view: &ExploreView, now: i64) -> Result<Page> {
        let items = self.load(None)?;
        Ok(sortable_view(&items, view, now))
    }

    pub fn overview(
        &self,
        address: &Address,
        now: i64,
        requested_ticket_count: u64,
    ) -> Result<RaffleOverview> {
        let snapshot = self.source.fetch_raffle(address)?;
        describe_raffle(
            *address,
            &snapshot.raffle,
            snapshot.balance,
            now,
            requested_ticket_count,
        )
    }

    /// Fetches every raffle, skipping addresses whose read fails.
    fn load(&self, creator: Option<&Address>) -> Result<Vec<(RawRaffle, Address)>> {
        let addresses = self.source.raffle_addresses(creator)?;

        let mut items = Vec::with_capacity(addresses.len());
        for address in addresses {
            match self.source.fetch_raffle(&address) {
                Ok(snapshot) => items.push((snapshot.raffle, address)),
                Err(error) => msg!("Skipping raffle {}: {}", address, error),
            }
        }
        Ok(items)
    }
}
