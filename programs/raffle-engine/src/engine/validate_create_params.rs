use anchor_lang::prelude::*;

use crate::{
    constants::{
        MAX_CREATOR_COMMISSION_BPS, MAX_DESCRIPTION_LEN, MAX_DURATION, MAX_ENTRY_FEE,
        MAX_PARTICIPANTS, MAX_TITLE_LEN, MIN_DESCRIPTION_LEN, MIN_ENTRY_FEE, MIN_PARTICIPANTS,
        MIN_TITLE_LEN,
    },
    error::RaffleError,
    money::Money,
};

/// One rejected field.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    /// Error code name, e.g. `EntryFeeTooLow`
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &str, error: RaffleError) -> Self {
        ValidationIssue {
            field: field.to_string(),
            code: format!("{error:?}"),
            message: error.to_string(),
        }
    }

    /// True when this issue was raised for `error`.
    pub fn is(&self, error: RaffleError) -> bool {
        self.code == format!("{error:?}")
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<ValidationIssue>,
}

/// Raffle creation inputs, grouped for callers that build calldata.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateRaffleParams {
    pub title: String,
    pub description: String,
    pub entry_fee: Money,
    pub deadline: i64,
    pub max_participants: u64,
    pub creator_commission_bps: u16,
}

impl CreateRaffleParams {
    pub fn validate(&self, now: i64) -> ValidationResult {
        validate_create_params(
            &self.title,
            &self.description,
            self.entry_fee,
            self.deadline,
            self.max_participants,
            self.creator_commission_bps,
            now,
        )
    }

    /// Server-side gate before calldata is built: any issue rejects the whole set.
    pub fn ensure_valid(&self, now: i64) -> Result<()> {
        let result = self.validate(now);
        require!(result.ok, RaffleError::InvalidCreateParams);
        Ok(())
    }
}

/// Checks raffle creation inputs against the contract's acceptance rules.
///
/// Every rule is evaluated; the result lists all violations so a form can show
/// them together.
///
/// # Rules
/// 1. Title is 3 to 100 characters
/// 2. Description is 10 to 500 characters
/// 3. Entry fee is between $0.01 and $10,000
/// 4. Max participants is 0 (unlimited) or between 2 and 10,000
/// 5. Deadline is in the future and at most 365 days away
/// 6. Creator commission is at most 1000 bps
pub fn validate_create_params(
    title: &str,
    description: &str,
    entry_fee: Money,
    deadline: i64,
    max_participants: u64,
    creator_commission_bps: u16,
    now: i64,
) -> ValidationResult {
    let mut errors = Vec::new();

    let title_len = title.chars().count();
    if title_len < MIN_TITLE_LEN {
        errors.push(ValidationIssue::new("title", RaffleError::TitleTooShort));
    } else if title_len > MAX_TITLE_LEN {
        errors.push(ValidationIssue::new("title", RaffleError::TitleTooLong));
    }

    let description_len = description.chars().count();
    if description_len < MIN_DESCRIPTION_LEN {
        errors.push(ValidationIssue::new(
            "description",
            RaffleError::DescriptionTooShort,
        ));
    } else if description_len > MAX_DESCRIPTION_LEN {
        errors.push(ValidationIssue::new(
            "description",
            RaffleError::DescriptionTooLong,
        ));
    }

    // Price checks
    if entry_fee.minor_units() < MIN_ENTRY_FEE {
        errors.push(ValidationIssue::new("entry_fee", RaffleError::EntryFeeTooLow));
    } else if entry_fee.minor_units() > MAX_ENTRY_FEE {
        errors.push(ValidationIssue::new(
            "entry_fee",
            RaffleError::EntryFeeTooHigh,
        ));
    }

    // Participant cap checks, 0 is unlimited
    if max_participants != 0 && max_participants < MIN_PARTICIPANTS {
        errors.push(ValidationIssue::new(
            "max_participants",
            RaffleError::MinParticipantsTooLow,
        ));
    } else if max_participants > MAX_PARTICIPANTS {
        errors.push(ValidationIssue::new(
            "max_participants",
            RaffleError::MaxParticipantsTooHigh,
        ));
    }

    // Time checks
    if deadline <= now {
        errors.push(ValidationIssue::new(
            "deadline",
            RaffleError::DeadlineMustBeInFuture,
        ));
    } else if deadline > now.saturating_add(MAX_DURATION) {
        errors.push(ValidationIssue::new("deadline", RaffleError::DeadlineTooFar));
    }

    if creator_commission_bps > MAX_CREATOR_COMMISSION_BPS {
        errors.push(ValidationIssue::new(
            "creator_commission_bps",
            RaffleError::CommissionTooHigh,
        ));
    }

    ValidationResult {
        ok: errors.is_empty(),
        errors,
    }
}
