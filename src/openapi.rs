//! OpenAPI document served at `/openapi.json`.

use crate::handlers::{karts, race_results, racers, races, tracks, workers};
use crate::model::{
    Kart, KartBase, KartUpdate, Race, RaceBase, RaceResult, RaceResultBase, Racer, RacerBase,
    Track, TrackBase, Worker, WorkerAssignment, WorkerAssignmentBase, WorkerBase,
};
use crate::response::MessageBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kart Club API",
        description = "Tracks, karts, racers, workers, races and race results of a karting club"
    ),
    paths(
        karts::list_karts,
        karts::get_kart,
        karts::create_kart,
        karts::update_kart,
        karts::delete_kart,
        karts::kart_results,
        tracks::list_tracks,
        tracks::get_track,
        tracks::create_track,
        tracks::track_races,
        races::list_races,
        races::get_race,
        races::create_race,
        racers::list_racers,
        racers::get_racer,
        racers::create_racer,
        racers::racer_history,
        race_results::list_race_results,
        race_results::create_race_result,
        race_results::results_of_race,
        workers::list_workers,
        workers::get_worker,
        workers::create_worker,
        workers::create_worker_assignment,
        workers::worker_races,
        workers::race_workers,
    ),
    components(schemas(
        Kart, KartBase, KartUpdate,
        Track, TrackBase,
        Race, RaceBase,
        Racer, RacerBase,
        RaceResult, RaceResultBase,
        Worker, WorkerBase,
        WorkerAssignment, WorkerAssignmentBase,
        MessageBody,
    )),
    tags(
        (name = "karts"),
        (name = "tracks"),
        (name = "races"),
        (name = "racers"),
        (name = "race results"),
        (name = "workers"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_club_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/karts",
            "/karts/{id}",
            "/tracks/{id}/races",
            "/races/{id}/results",
            "/racers/{id}/history",
            "/race-results",
            "/worker-assignments",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
