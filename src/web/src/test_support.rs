use crate::routes::ServerRoutes;
use crate::LeagueAppData;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use league_core::{EntityStore, InMemoryStore, LeagueId, LeagueTable, NewLeague, NewTeam, TeamId};
use serde_json::Value;
use tower::ServiceExt;

pub struct Fixture {
    pub data: LeagueAppData,
    pub league_id: LeagueId,
    pub teams: Vec<TeamId>,
}

/// One league running through 2030 with `teams` rostered teams.
pub fn fixture(teams: usize) -> Fixture {
    let mut store = InMemoryStore::new();

    let league_id = store
        .insert_league(NewLeague {
            name: String::from("Test League"),
            sport: String::from("football"),
            season: String::from("2030"),
            start_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
            status: Default::default(),
        })
        .unwrap()
        .id;

    let teams = (1..=teams)
        .map(|n| {
            let team_id = store
                .insert_team(NewTeam {
                    name: format!("Team {}", n),
                    sport: String::from("football"),
                })
                .unwrap()
                .id;

            LeagueTable::add_team(&mut store, league_id, team_id).unwrap();
            team_id
        })
        .collect();

    Fixture {
        data: LeagueAppData::new(store),
        league_id,
        teams,
    }
}

pub async fn send(
    data: &LeagueAppData,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app: Router = ServerRoutes::create().with_state(data.clone());

    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
