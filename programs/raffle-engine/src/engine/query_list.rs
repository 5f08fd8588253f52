use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT},
    engine::resolve_status,
    state::{Address, RaffleStatus, RawRaffle},
};

/// A raffle with its address and the status resolved for the query instant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ListedRaffle {
    pub address: Address,
    pub raffle: RawRaffle,
    pub status: RaffleStatus,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Status label, matched case-insensitively
    pub status_filter: Option<String>,
    pub creator_filter: Option<Address>,
    /// Defaults to 50, at most 200
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<ListedRaffle>,
    /// Matching raffles before pagination
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

/// Filters, sorts and paginates raffles.
///
/// Every status is resolved against the same `now`. Results are ordered by
/// deadline, latest first; raffles sharing a deadline keep their input order.
///
/// # Errors
/// - `UnknownStatusFilter` if the status filter is not a status label
pub fn query_list(items: &[(RawRaffle, Address)], query: &ListQuery, now: i64) -> Result<Page> {
    let status_filter = query
        .status_filter
        .as_deref()
        .map(str::parse::<RaffleStatus>)
        .transpose()?;

    let mut matching: Vec<ListedRaffle> = resolve_all(items, now)
        .filter(|listed| {
            query
                .creator_filter
                .map_or(true, |creator| listed.raffle.creator == creator)
        })
        .filter(|listed| status_filter.map_or(true, |status| listed.status == status))
        .collect();

    // sort_by is stable
    matching.sort_by(|a, b| b.raffle.deadline.cmp(&a.raffle.deadline));

    Ok(paginate(matching, query.limit, query.offset))
}

pub(crate) fn resolve_all(
    items: &[(RawRaffle, Address)],
    now: i64,
) -> impl Iterator<Item = ListedRaffle> + '_ {
    items.iter().map(move |(raffle, address)| ListedRaffle {
        address: *address,
        raffle: raffle.clone(),
        status: resolve_status(raffle, now),
    })
}

pub(crate) fn paginate(items: Vec<ListedRaffle>, limit: Option<u32>, offset: Option<u32>) -> Page {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
    let offset = offset.unwrap_or(0);
    let total = items.len() as u64;

    let items = items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    Page {
        items,
        total,
        limit,
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    const NOW: i64 = 1_700_000_000;

    fn raffle(creator: u8, deadline: i64, contract_status: RaffleStatus) -> RawRaffle {
        RawRaffle {
            title: format!("Raffle {deadline}"),
            description: "A weekly USDC pot".to_string(),
            entry_fee: Money::from_minor_units(1_000_000),
            deadline,
            max_participants: 100,
            current_participants: 10,
            contract_status,
            creator: Address::new([creator; 20]),
            winner: Address::ZERO,
            creator_commission_bps: 0,
        }
    }

    fn collection() -> Vec<(RawRaffle, Address)> {
        vec![
            (raffle(1, NOW + 100, RaffleStatus::Active), Address::new([0xa1; 20])),
            (raffle(2, NOW - 100, RaffleStatus::Active), Address::new([0xa2; 20])),
            (raffle(1, NOW + 300, RaffleStatus::Cancelled), Address::new([0xa3; 20])),
            (raffle(2, NOW + 100, RaffleStatus::Active), Address::new([0xa4; 20])),
            (raffle(1, NOW + 200, RaffleStatus::Active), Address::new([0xa5; 20])),
        ]
    }

    fn addresses(page: &Page) -> Vec<u8> {
        page.items.iter().map(|listed| listed.address.to_bytes()[0]).collect()
    }

    #[test]
    fn test_sorted_by_deadline_desc_stable() {
        let page = query_list(&collection(), &ListQuery::default(), NOW).unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.limit, 50);
        assert_eq!(addresses(&page), vec![0xa3, 0xa5, 0xa1, 0xa4, 0xa2]);
        assert_eq!(page.items[4].status, RaffleStatus::Ended);
        assert_eq!(page.items[0].status, RaffleStatus::Cancelled);
    }

    #[test]
    fn test_filters() {
        let query = ListQuery {
            status_filter: Some("ACTIVE".to_string()),
            creator_filter: Some(Address::new([1; 20])),
            ..ListQuery::default()
        };
        let page = query_list(&collection(), &query, NOW).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(addresses(&page), vec![0xa5, 0xa1]);

        let query = ListQuery {
            status_filter: Some("ended".to_string()),
            ..ListQuery::default()
        };
        let page = query_list(&collection(), &query, NOW).unwrap();
        assert_eq!(addresses(&page), vec![0xa2]);
    }

    #[test]
    fn test_unknown_status_filter() {
        let query = ListQuery {
            status_filter: Some("finished".to_string()),
            ..ListQuery::default()
        };
        assert!(query_list(&collection(), &query, NOW).is_err());
    }

    #[test]
    fn test_pagination_window() {
        let query = ListQuery {
            limit: Some(2),
            offset: Some(1),
            ..ListQuery::default()
        };
        let page = query_list(&collection(), &query, NOW).unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(addresses(&page), vec![0xa5, 0xa1]);

        let query = ListQuery {
            limit: Some(10_000),
            offset: Some(10),
            ..ListQuery::default()
        };
        let page = query_list(&collection(), &query, NOW).unwrap();
        assert_eq!(page.limit, 200);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
    }
}
