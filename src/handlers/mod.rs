//! HTTP handlers, one module per resource.

pub mod karts;
pub mod race_results;
pub mod racers;
pub mod races;
pub mod tracks;
pub mod workers;
