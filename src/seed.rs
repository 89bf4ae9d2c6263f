//! Demonstration data inserted on first start.

use crate::error::AppError;
use crate::model::{KartBase, RaceBase, RaceResultBase, RacerBase, TrackBase};
use crate::service;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Tracks already existed; nothing was written.
    Skipped,
    Seeded,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn clock(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap_or_default()
}

pub fn demo_tracks() -> [TrackBase; 2] {
    [
        TrackBase {
            name: "Monaco Circuit".into(),
            state: true,
            open: true,
            length: 1.5,
        },
        TrackBase {
            name: "Speed Track".into(),
            state: true,
            open: false,
            length: 2.3,
        },
    ]
}

pub fn demo_karts() -> [KartBase; 2] {
    [
        KartBase {
            model: "SuperKart X1".into(),
            state: true,
            tires: "Soft".into(),
            tires_change_date: date(2025, 1, 1),
            rain: false,
        },
        KartBase {
            model: "RacingKart Pro".into(),
            state: true,
            tires: "Hard".into(),
            tires_change_date: date(2025, 1, 5),
            rain: true,
        },
    ]
}

pub fn demo_racers() -> [RacerBase; 2] {
    [
        RacerBase {
            name: "Ivan Petrov".into(),
            club_card: true,
            date_of_birth: date(1995, 5, 15),
            date_of_registration: date(2023, 1, 10),
            best_time: clock(1, 25, 30),
        },
        RacerBase {
            name: "Anna Smirnova".into(),
            club_card: true,
            date_of_birth: date(1998, 8, 20),
            date_of_registration: date(2023, 3, 15),
            best_time: clock(1, 23, 45),
        },
    ]
}

/// Race date of the demo race and the lap durations for racer/kart pairs 1 and 2.
const DEMO_RACE_DATE: (i32, u32, u32) = (2025, 12, 15);
const DEMO_DURATIONS: [(u32, u32, u32); 2] = [(1, 28, 15), (1, 26, 30)];

/// Insert demo rows when the tracks table is empty. Runs in a single transaction.
pub async fn seed_database(pool: &PgPool) -> Result<SeedOutcome, AppError> {
    let mut tx = pool.begin().await?;
    if service::count_tracks(&mut tx).await? > 0 {
        tracing::debug!("tracks present, skipping demo data");
        return Ok(SeedOutcome::Skipped);
    }

    let mut tracks = Vec::new();
    for track in demo_tracks() {
        tracks.push(service::create_track(&mut tx, &track).await?);
    }
    let mut karts = Vec::new();
    for kart in demo_karts() {
        karts.push(service::create_kart(&mut tx, &kart).await?);
    }
    let mut racers = Vec::new();
    for racer in demo_racers() {
        racers.push(service::create_racer(&mut tx, &racer).await?);
    }

    let (y, m, d) = DEMO_RACE_DATE;
    let race = service::create_race(
        &mut tx,
        &RaceBase {
            track_id: tracks[0].id,
            race_date: Some(date(y, m, d)),
        },
    )
    .await?;

    for ((racer, kart), (h, min, s)) in racers.iter().zip(karts.iter()).zip(DEMO_DURATIONS) {
        service::create_race_racer_kart(
            &mut tx,
            &RaceResultBase {
                race_id: race.id,
                racer_id: racer.id,
                kart_id: kart.id,
                duration: clock(h, min, s),
            },
        )
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        tracks = tracks.len(),
        karts = karts.len(),
        racers = racers.len(),
        "demo data inserted"
    );
    Ok(SeedOutcome::Seeded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_fixture_matches_club_defaults() {
        let tracks = demo_tracks();
        assert_eq!(tracks[0].name, "Monaco Circuit");
        assert!(tracks[0].open);
        assert!(!tracks[1].open);
        assert_eq!(tracks[1].length, 2.3);

        let karts = demo_karts();
        assert_eq!(karts[0].tires, "Soft");
        assert!(karts[1].rain);

        let racers = demo_racers();
        assert_eq!(racers[1].name, "Anna Smirnova");
        assert_eq!(racers[1].best_time, NaiveTime::from_hms_opt(1, 23, 45).unwrap());
    }

    #[test]
    fn fixture_dates_are_valid() {
        let (y, m, d) = DEMO_RACE_DATE;
        assert_ne!(date(y, m, d), NaiveDate::default());
        for (h, m, s) in DEMO_DURATIONS {
            assert_ne!(clock(h, m, s), NaiveTime::default());
        }
    }
}
