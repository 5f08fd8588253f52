pub mod describe_raffle;
pub mod evaluate_actions;
pub mod fees;
pub mod query_list;
pub mod resolve_status;
pub mod sortable_view;
pub mod validate_create_params;

pub use describe_raffle::*;
pub use evaluate_actions::*;
pub use fees::*;
pub use query_list::*;
pub use resolve_status::*;
pub use sortable_view::*;
pub use validate_create_params::*;
