//! Data-access functions: one store operation per call on a caller-provided connection.

pub mod karts;
pub mod race_results;
pub mod racers;
pub mod races;
pub mod tracks;
pub mod worker_assignments;
pub mod workers;

pub use karts::*;
pub use race_results::*;
pub use racers::*;
pub use races::*;
pub use tracks::*;
pub use worker_assignments::*;
pub use workers::*;
