use std::fmt;

use anchor_lang::prelude::*;

use crate::{
    constants::MIN_TICKETS_TO_DRAW,
    money::Money,
    state::{RaffleStatus, RawRaffle},
};

/// Why an action cannot be taken right now. Not an error: callers show the
/// reason next to a disabled control.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnavailableReason {
    CancelledOrClaimed,
    DrawAlreadyInitiated,
    DeadlinePassed,
    RaffleFull,
    InvalidTicketCount,
    TicketCountTooLarge,
    NotActive,
    NotEnoughTickets,
    DeadlineNotReached,
    AlreadyClaimed,
    NoWinnerDrawn,
    DrawInProgress,
    AlreadyFinalized,
    NotCancelled,
}

impl UnavailableReason {
    pub fn as_str(self) -> &'static str {
        match self {
            UnavailableReason::CancelledOrClaimed => "raffle is cancelled or claimed",
            UnavailableReason::DrawAlreadyInitiated => "draw already initiated",
            UnavailableReason::DeadlinePassed => "deadline passed",
            UnavailableReason::RaffleFull => "raffle is full",
            UnavailableReason::InvalidTicketCount => "ticket count must be at least 1",
            UnavailableReason::TicketCountTooLarge => "total cost of requested tickets is too large",
            UnavailableReason::NotActive => "draw already initiated or raffle not active",
            UnavailableReason::NotEnoughTickets => "need at least 2 tickets sold",
            UnavailableReason::DeadlineNotReached => "deadline not reached and raffle not full",
            UnavailableReason::AlreadyClaimed => "prize already claimed",
            UnavailableReason::NoWinnerDrawn => "no winner drawn yet",
            UnavailableReason::DrawInProgress => "draw in progress",
            UnavailableReason::AlreadyFinalized => "raffle already drawn, cancelled or claimed",
            UnavailableReason::NotCancelled => "raffle not cancelled",
        }
    }
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments the calldata encoder needs for an available action.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionParams {
    Join {
        ticket_count: u64,
        total_cost: Money,
        /// Most tickets one purchase could take, `None` when uncapped
        max_purchasable: Option<u64>,
    },
    Draw,
    Claim,
    Cancel,
    WithdrawRefund,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionDecision {
    Available(ActionParams),
    Unavailable { reason: UnavailableReason },
}

impl ActionDecision {
    pub fn is_available(&self) -> bool {
        matches!(self, ActionDecision::Available(_))
    }

    pub fn reason(&self) -> Option<UnavailableReason> {
        match self {
            ActionDecision::Available(_) => None,
            ActionDecision::Unavailable { reason } => Some(*reason),
        }
    }

    fn unavailable(reason: UnavailableReason) -> Self {
        ActionDecision::Unavailable { reason }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionSet {
    pub join: ActionDecision,
    pub draw: ActionDecision,
    pub claim: ActionDecision,
    pub cancel: ActionDecision,
    pub withdraw_refund: ActionDecision,
}

impl ActionSet {
    pub fn available_count(&self) -> usize {
        [
            self.join,
            self.draw,
            self.claim,
            self.cancel,
            self.withdraw_refund,
        ]
        .iter()
        .filter(|decision| decision.is_available())
        .count()
    }
}

/// Decides which of the five raffle actions can be taken at `now`.
///
/// `status` is the resolved status from [`crate::resolve_status`].
/// `requested_ticket_count` is expected to be clamped to the remaining
/// capacity by the caller; the gate only reports a full raffle, it never
/// shrinks a request. A request whose total cost does not fit in `u64` only
/// makes join unavailable.
pub fn evaluate_actions(
    raw: &RawRaffle,
    status: RaffleStatus,
    now: i64,
    requested_ticket_count: u64,
) -> ActionSet {
    ActionSet {
        join: evaluate_join(raw, status, now, requested_ticket_count),
        draw: evaluate_draw(raw, status, now),
        claim: evaluate_claim(status),
        cancel: evaluate_cancel(status),
        withdraw_refund: evaluate_withdraw_refund(status),
    }
}

fn evaluate_join(
    raw: &RawRaffle,
    status: RaffleStatus,
    now: i64,
    requested_ticket_count: u64,
) -> ActionDecision {
    let reason = match status {
        status if status.is_final() => Some(UnavailableReason::CancelledOrClaimed),
        RaffleStatus::Drawn => Some(UnavailableReason::DrawAlreadyInitiated),
        RaffleStatus::Ended => Some(UnavailableReason::DeadlinePassed),
        _ if raw.has_ended(now) => Some(UnavailableReason::DeadlinePassed),
        _ if raw.is_full() => Some(UnavailableReason::RaffleFull),
        _ if requested_ticket_count == 0 => Some(UnavailableReason::InvalidTicketCount),
        _ => None,
    };
    if let Some(reason) = reason {
        return ActionDecision::unavailable(reason);
    }

    match raw.entry_fee.checked_mul(requested_ticket_count) {
        Ok(total_cost) => ActionDecision::Available(ActionParams::Join {
            ticket_count: requested_ticket_count,
            total_cost,
            max_purchasable: raw.remaining_capacity(),
        }),
        Err(_) => ActionDecision::unavailable(UnavailableReason::TicketCountTooLarge),
    }
}

fn evaluate_draw(raw: &RawRaffle, status: RaffleStatus, now: i64) -> ActionDecision {
    // Ended is the resolved form of an active raffle past its deadline
    if !matches!(
        status,
        RaffleStatus::Upcoming | RaffleStatus::Active | RaffleStatus::Ended
    ) {
        return ActionDecision::unavailable(UnavailableReason::NotActive);
    }
    if raw.current_participants < MIN_TICKETS_TO_DRAW {
        return ActionDecision::unavailable(UnavailableReason::NotEnoughTickets);
    }
    if !raw.has_ended(now) && !raw.is_full() {
        return ActionDecision::unavailable(UnavailableReason::DeadlineNotReached);
    }
    ActionDecision::Available(ActionParams::Draw)
}

fn evaluate_claim(status: RaffleStatus) -> ActionDecision {
    match status {
        RaffleStatus::Drawn => ActionDecision::Available(ActionParams::Claim),
        RaffleStatus::Claimed => ActionDecision::unavailable(UnavailableReason::AlreadyClaimed),
        _ => ActionDecision::unavailable(UnavailableReason::NoWinnerDrawn),
    }
}

fn evaluate_cancel(status: RaffleStatus) -> ActionDecision {
    match status {
        RaffleStatus::Upcoming | RaffleStatus::Active => {
            ActionDecision::Available(ActionParams::Cancel)
        }
        RaffleStatus::Ended => ActionDecision::unavailable(UnavailableReason::DrawInProgress),
        _ => ActionDecision::unavailable(UnavailableReason::AlreadyFinalized),
    }
}

fn evaluate_withdraw_refund(status: RaffleStatus) -> ActionDecision {
    match status {
        RaffleStatus::Cancelled => ActionDecision::Available(ActionParams::WithdrawRefund),
        _ => ActionDecision::unavailable(UnavailableReason::NotCancelled),
    }
}
