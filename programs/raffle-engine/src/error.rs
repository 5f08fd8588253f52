use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Subtraction would produce a negative amount")]
    Underflow,
    #[msg("Amount is not a valid 6-decimal USDC value")]
    InvalidAmount,
    #[msg("Address must be 0x followed by 40 hex characters")]
    InvalidAddress,
    #[msg("Unknown raffle status discriminant")]
    InvalidStatus,
    #[msg("Unknown raffle status filter")]
    UnknownStatusFilter,
    #[msg("Title must be at least 3 characters")]
    TitleTooShort,
    #[msg("Title must be at most 100 characters")]
    TitleTooLong,
    #[msg("Description must be at least 10 characters")]
    DescriptionTooShort,
    #[msg("Description must be at most 500 characters")]
    DescriptionTooLong,
    #[msg("Entry fee must be at least $0.01 USDC")]
    EntryFeeTooLow,
    #[msg("Entry fee must be at most $10,000 USDC")]
    EntryFeeTooHigh,
    #[msg("Max participants must be 0 (unlimited) or at least 2")]
    MinParticipantsTooLow,
    #[msg("Max participants must be at most 10,000")]
    MaxParticipantsTooHigh,
    #[msg("Deadline must be in the future")]
    DeadlineMustBeInFuture,
    #[msg("Deadline must be within 365 days")]
    DeadlineTooFar,
    #[msg("Creator commission must be at most 1000 bps (10%)")]
    CommissionTooHigh,
    #[msg("Raffle creation parameters failed validation")]
    InvalidCreateParams,
}
