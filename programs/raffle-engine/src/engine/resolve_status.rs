use crate::state::{RaffleStatus, RawRaffle};

/// Maps raw raffle fields to the raffle's actual lifecycle status at `now`.
///
/// The contract never flips its own status as time passes, so its status field
/// is only believed for the two explicit terminal values. Everything else is
/// recomputed from the winner and the deadline, first match wins:
/// 1. Cancelled on chain
/// 2. Claimed on chain
/// 3. A winner is set: Drawn
/// 4. The deadline has passed: Ended
/// 5. Otherwise Active
///
/// An assigned winner outranks an elapsed deadline. `Upcoming` is never
/// returned; it only labels raffles not yet seen on chain.
pub fn resolve_status(raw: &RawRaffle, now: i64) -> RaffleStatus {
    match raw.contract_status {
        RaffleStatus::Cancelled => RaffleStatus::Cancelled,
        RaffleStatus::Claimed => RaffleStatus::Claimed,
        _ if raw.winner().is_some() => RaffleStatus::Drawn,
        _ if raw.has_ended(now) => RaffleStatus::Ended,
        _ => RaffleStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{money::Money, state::Address};

    const NOW: i64 = 1_700_000_000;

    fn raffle(contract_status: RaffleStatus, deadline: i64, winner: Address) -> RawRaffle {
        RawRaffle {
            title: "Weekly pot".to_string(),
            description: "A weekly USDC pot".to_string(),
            entry_fee: Money::from_minor_units(1_000_000),
            deadline,
            max_participants: 100,
            current_participants: 50,
            contract_status,
            creator: Address::new([1; 20]),
            winner,
            creator_commission_bps: 500,
        }
    }

    #[test]
    fn test_cancelled_and_claimed_always_win() {
        let winner = Address::new([9; 20]);
        for deadline in [NOW - 1, NOW, NOW + 1] {
            for who in [Address::ZERO, winner] {
                assert_eq!(
                    resolve_status(&raffle(RaffleStatus::Cancelled, deadline, who), NOW),
                    RaffleStatus::Cancelled
                );
                assert_eq!(
                    resolve_status(&raffle(RaffleStatus::Claimed, deadline, who), NOW),
                    RaffleStatus::Claimed
                );
            }
        }
    }

    #[test]
    fn test_winner_outranks_elapsed_deadline() {
        let raw = raffle(RaffleStatus::Active, NOW - 3_600, Address::new([9; 20]));
        assert_eq!(resolve_status(&raw, NOW), RaffleStatus::Drawn);
    }

    #[test]
    fn test_deadline_boundary() {
        let raw = raffle(RaffleStatus::Active, NOW, Address::ZERO);
        assert_eq!(resolve_status(&raw, NOW), RaffleStatus::Ended);
        assert_eq!(resolve_status(&raw, NOW - 1), RaffleStatus::Active);
    }

    #[test]
    fn test_stale_contract_status_is_recomputed() {
        for stale in [RaffleStatus::Upcoming, RaffleStatus::Active, RaffleStatus::Ended, RaffleStatus::Drawn] {
            assert_eq!(
                resolve_status(&raffle(stale, NOW + 60, Address::ZERO), NOW),
                RaffleStatus::Active
            );
            assert_eq!(
                resolve_status(&raffle(stale, NOW - 60, Address::ZERO), NOW),
                RaffleStatus::Ended
            );
        }
    }

    #[test]
    fn test_never_upcoming() {
        let winners = [Address::ZERO, Address::new([9; 20])];
        for status in RaffleStatus::ALL {
            for deadline in [NOW - 1, NOW, NOW + 1] {
                for winner in winners {
                    let resolved = resolve_status(&raffle(status, deadline, winner), NOW);
                    assert_ne!(resolved, RaffleStatus::Upcoming);
                }
            }
        }
    }
}
