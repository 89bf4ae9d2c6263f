//! Club resource routes.

use crate::handlers::{karts, race_results, racers, races, tracks, workers};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn club_routes(state: AppState) -> Router {
    Router::new()
        .route("/karts", get(karts::list_karts).post(karts::create_kart))
        .route(
            "/karts/:id",
            get(karts::get_kart)
                .put(karts::update_kart)
                .delete(karts::delete_kart),
        )
        .route("/karts/:id/results", get(karts::kart_results))
        .route("/tracks", get(tracks::list_tracks).post(tracks::create_track))
        .route("/tracks/:id", get(tracks::get_track))
        .route("/tracks/:id/races", get(tracks::track_races))
        .route("/races", get(races::list_races).post(races::create_race))
        .route("/races/:id", get(races::get_race))
        .route("/races/:id/results", get(race_results::results_of_race))
        .route("/races/:id/workers", get(workers::race_workers))
        .route("/racers", get(racers::list_racers).post(racers::create_racer))
        .route("/racers/:id", get(racers::get_racer))
        .route("/racers/:id/history", get(racers::racer_history))
        .route(
            "/race-results",
            get(race_results::list_race_results).post(race_results::create_race_result),
        )
        .route("/workers", get(workers::list_workers).post(workers::create_worker))
        .route("/workers/:id", get(workers::get_worker))
        .route("/workers/:id/races", get(workers::worker_races))
        .route("/worker-assignments", post(workers::create_worker_assignment))
        .with_state(state)
}
