//! Dasha (planetary period) calculations.
//!
//! Two nakshatra-based systems are supported:
//! - Vimshottari: 9 graha lords, 120-year cycle
//! - Yogini: 8 yogini lords, 36-year cycle
//!
//! Both are built as a tree five levels deep (maha through pran), each level
//! a proportional subdivision of the one above.

pub mod balance;
pub mod cycle;
pub mod query;
pub mod subperiod;
pub mod tree;
pub mod types;
pub mod validate;

pub use balance::{birth_balance, maha_sequence};
pub use cycle::{LordCycle, VIMSHOTTARI, YOGINI, YoginiStart};
pub use query::{active_stack, find_active_period};
pub use tree::{DashaConfig, dasha_tree};
pub use types::{
    ALL_DASHA_LEVELS, ALL_YOGINIS, DAYS_PER_YEAR, DashaLevel, DashaLord, DashaPeriod, DashaSystem,
    DashaTree, SECONDS_PER_YEAR, Yogini,
};
pub use validate::validate_tree;
