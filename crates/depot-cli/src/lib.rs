//! CLI library components for the Umuti Depot toolkit.

pub mod logging;
