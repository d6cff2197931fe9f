//! Command implementations for the sumbench CLI

pub mod check;
pub mod run;
pub mod version;
