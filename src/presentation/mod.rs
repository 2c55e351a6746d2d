//! Text rendering and input validation for the ledger.
//!
//! Nothing here mutates a ledger; it consumes [`crate::controller::Snapshot`]s.

pub mod format;
pub mod input;
pub mod render;

pub use format::{
    format_amount, format_net_budget, format_percentage, period_label, FormatOptions,
};
pub use input::{parse_input, EntryInput, InputError};
pub use render::render_snapshot;
