use raffle_engine::{
    compute_pool_base, evaluate_actions, resolve_status, split_fees, validate_create_params,
    ActionParams, Address, Money, RaffleStatus, RawRaffle, UnavailableReason,
};

const NOW: i64 = 1_700_000_000;

fn creator() -> Address {
    "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap()
}

// $1.00 entry, 100 max, 50 sold, 5% commission
fn reference_raffle() -> RawRaffle {
    RawRaffle {
        title: "Weekly USDC pot".to_string(),
        description: "Winner takes the pool after fees".to_string(),
        entry_fee: Money::from_minor_units(1_000_000),
        deadline: NOW + 86_400,
        max_participants: 100,
        current_participants: 50,
        contract_status: RaffleStatus::Active,
        creator: creator(),
        winner: Address::ZERO,
        creator_commission_bps: 500,
    }
}

#[test]
fn test_scenario_a_live_balance_split() {
    let raw = reference_raffle();
    let pool = compute_pool_base(&raw, Money::from_minor_units(50_000_000)).unwrap();
    let split = split_fees(pool, raw.creator_commission_bps).unwrap();

    assert_eq!(split.platform_fee.to_string(), "$1.00 USDC");
    assert_eq!(split.creator_commission.to_string(), "$2.45 USDC");
    assert_eq!(split.winner_payout.to_string(), "$46.55 USDC");
}

#[test]
fn test_scenario_b_drained_balance_is_reconstructed() {
    let raw = RawRaffle {
        contract_status: RaffleStatus::Claimed,
        winner: Address::new([7; 20]),
        ..reference_raffle()
    };
    assert_eq!(resolve_status(&raw, NOW), RaffleStatus::Claimed);

    let pool = compute_pool_base(&raw, Money::ZERO).unwrap();
    assert_eq!(pool.minor_units(), 50_000_000);

    let live = split_fees(Money::from_minor_units(50_000_000), 500).unwrap();
    assert_eq!(split_fees(pool, raw.creator_commission_bps).unwrap(), live);
}

#[test]
fn test_scenario_c_elapsed_deadline_without_winner() {
    let raw = RawRaffle {
        deadline: NOW - 1,
        ..reference_raffle()
    };
    let status = resolve_status(&raw, NOW);
    assert_eq!(status, RaffleStatus::Ended);
    let actions = evaluate_actions(&raw, status, NOW, 1);
    assert_eq!(actions.draw, raffle_engine::ActionDecision::Available(ActionParams::Draw));

    let lonely = RawRaffle {
        current_participants: 1,
        ..raw
    };
    let actions = evaluate_actions(&lonely, resolve_status(&lonely, NOW), NOW, 1);
    assert_eq!(actions.draw.reason(), Some(UnavailableReason::NotEnoughTickets));
}

#[test]
fn test_scenario_d_unlimited_raffle_always_joinable() {
    for current_participants in [0, 7, 10_000, 1_000_000] {
        let raw = RawRaffle {
            max_participants: 0,
            current_participants,
            ..reference_raffle()
        };
        let status = resolve_status(&raw, NOW);
        assert_eq!(status, RaffleStatus::Active);
        let join = evaluate_actions(&raw, status, NOW, 2).join;
        assert_eq!(
            join,
            raffle_engine::ActionDecision::Available(ActionParams::Join {
                ticket_count: 2,
                total_cost: Money::from_minor_units(2_000_000),
                max_purchasable: None,
            })
        );
    }
}

#[test]
fn test_winner_then_deadline_resolves_drawn() {
    let raw = RawRaffle {
        deadline: NOW - 3_600,
        winner: Address::new([7; 20]),
        ..reference_raffle()
    };
    let status = resolve_status(&raw, NOW);
    assert_eq!(status, RaffleStatus::Drawn);
    let actions = evaluate_actions(&raw, status, NOW, 1);
    assert!(actions.claim.is_available());
    assert_eq!(actions.available_count(), 1);
}

#[test]
fn test_cancelled_on_chain_wins_over_everything() {
    for winner in [Address::ZERO, Address::new([7; 20])] {
        for deadline in [NOW - 1, NOW + 1] {
            let raw = RawRaffle {
                contract_status: RaffleStatus::Cancelled,
                winner,
                deadline,
                ..reference_raffle()
            };
            let status = resolve_status(&raw, NOW);
            assert_eq!(status, RaffleStatus::Cancelled);
            let actions = evaluate_actions(&raw, status, NOW, 1);
            assert_eq!(actions.available_count(), 1);
            assert!(actions.withdraw_refund.is_available());
        }
    }
}

#[test]
fn test_validated_params_round_trip_decimal_fee() {
    let fee = Money::from_decimal_str("10000.00").unwrap();
    assert_eq!(fee.to_decimal_string(), "10000.00");

    let result = validate_create_params(
        "Big pot",
        "The biggest pot allowed",
        fee,
        NOW + 86_400,
        0,
        1_000,
        NOW,
    );
    assert!(result.ok, "{:?}", result.errors);
}

#[test]
fn test_fee_split_conserves_across_range() {
    let mut pool = 0u64;
    while pool <= 10_000_000_000_000 {
        for bps in [0u16, 1, 250, 333, 500, 999, 1_000] {
            let split = split_fees(Money::from_minor_units(pool), bps).unwrap();
            let sum = split.platform_fee.minor_units()
                + split.creator_commission.minor_units()
                + split.winner_payout.minor_units();
            assert_eq!(sum, pool);
        }
        pool = pool * 3 + 7;
    }
}
