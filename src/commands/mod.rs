//! Command implementations for the crosspost CLI

pub mod completions;
pub mod convert;
pub mod platforms;
pub mod run;
pub mod version;
