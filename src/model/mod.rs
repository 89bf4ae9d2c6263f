//! Entity shapes. Each entity has a `*Base` input shape without the identifier and a
//! persisted shape that flattens the base next to the store-assigned `id`.

mod kart;
mod race;
mod race_result;
mod racer;
mod track;
mod worker;
mod worker_assignment;

pub use kart::{Kart, KartBase, KartUpdate};
pub use race::{Race, RaceBase};
pub use race_result::{RaceResult, RaceResultBase};
pub use racer::{Racer, RacerBase};
pub use track::{Track, TrackBase};
pub use worker::{Worker, WorkerBase};
pub use worker_assignment::{WorkerAssignment, WorkerAssignmentBase};

/// Store-assigned surrogate key (PostgreSQL `SERIAL`).
pub type Id = i32;
