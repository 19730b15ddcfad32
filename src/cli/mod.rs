//! Terminal presentation of rate lookups

pub mod chart;
pub mod check;
pub mod interactive;
pub mod pairs;
pub mod setup;
pub mod ui;
