//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `basic` - Date sequencing, result shape, and engine purity
//! - `builder` - Builder DSL and the serde boundary contract
//! - `cash_flows` - Contributions and withdrawals without growth
//! - `growth` - Compounding, fee drag, contribution growth, inflation
//! - `milestones` - Goal detection and surfacing

mod cash_flows;
