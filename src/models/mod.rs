//! Core data models for the holdings screen
//!
//! This module contains the data structures of the screening domain:
//! investment records, market values, severity ranks and area selectors.

pub mod area;
pub mod money;
pub mod record;
pub mod severity;

pub use area::{AreaGroup, AreaSelector};
pub use money::Money;
pub use record::{columns, HoldingsTable, InvestmentRecord};
pub use severity::Severity;
