use crate::money::Money;

// Fees
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const PLATFORM_FEE_BPS: u16 = 200; // 2%
pub const CREATION_FEE: Money = Money::from_minor_units(1_000_000); // $1.00
pub const MAX_CREATOR_COMMISSION_BPS: u16 = 1_000; // 10%

// Money format
pub const USDC_DECIMALS: u32 = 6;
pub const MINOR_UNITS_PER_USDC: u64 = 1_000_000;

// Constants for validation
pub const MIN_TITLE_LEN: usize = 3;
pub const MAX_TITLE_LEN: usize = 100;
pub const MIN_DESCRIPTION_LEN: usize = 10;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MIN_ENTRY_FEE: u64 = 10_000; // $0.01
pub const MAX_ENTRY_FEE: u64 = 10_000_000_000; // $10,000
pub const MIN_PARTICIPANTS: u64 = 2;
pub const MAX_PARTICIPANTS: u64 = 10_000;
pub const MAX_DURATION: i64 = 365 * 24 * 60 * 60; // 365 days in seconds

// Draw needs at least this many tickets sold
pub const MIN_TICKETS_TO_DRAW: u64 = 2;

// Pagination
pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const MAX_PAGE_LIMIT: u32 = 200;
