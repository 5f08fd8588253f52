pub mod constants;
pub mod directory;
pub mod engine;
pub mod error;
pub mod money;
pub mod state;

pub use directory::{RaffleDirectory, RaffleSnapshot, RaffleSource};
pub use engine::{
    compute_creation_fee, compute_pool_base, describe_raffle, evaluate_actions,
    expected_prize_pool, query_list, resolve_status, sortable_view, split_fees,
    validate_create_params, ActionDecision, ActionParams, ActionSet, CreateRaffleParams,
    ExploreView, FeeBreakdown, ListQuery, ListedRaffle, Page, RaffleOverview, SortKey, SortOrder,
    StatusTab, UnavailableReason, ValidationIssue, ValidationResult,
};
pub use error::RaffleError;
pub use money::Money;
pub use state::{Address, RaffleStatus, RawRaffle};
