pub mod calculator;
pub mod config;
pub mod del;
pub mod edit;
pub mod ledger;
pub mod log;
pub mod reconciler;
pub mod summary;
