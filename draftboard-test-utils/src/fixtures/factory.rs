//! JSON record factories.
//!
//! Records carry only the fields the client needs to decode them plus the natural key
//! fields, everything else is left to the client's serde defaults. An `id` of `0` is left
//! out so the record can be used as a create request body.

use serde_json::{json, Map, Value};

fn with_id(id: i32, mut record: Value) -> Value {
    if id != 0 {
        if let Value::Object(map) = &mut record {
            map.insert("id".to_string(), json!(id));
        }
    }

    record
}

/// Wrap `data` in a `{ success, data, pagination }` envelope
///
/// # Arguments
/// - `data` - Body to wrap
/// - `pagination` - Optional `(page, limit, total, pages)`
pub fn envelope(data: Value, pagination: Option<(u32, u32, u32, u32)>) -> Value {
    let mut map = Map::new();
    map.insert("success".to_string(), json!(true));
    map.insert("data".to_string(), data);

    if let Some((page, limit, total, pages)) = pagination {
        map.insert(
            "pagination".to_string(),
            json!({ "page": page, "limit": limit, "total": total, "pages": pages }),
        );
    }

    Value::Object(map)
}

pub fn team(id: i32, name: &str) -> Value {
    with_id(
        id,
        json!({
            "name": name,
            "city": "Philadelphia",
            "state": "PA",
            "conference": "NFC",
            "division": "NFC East",
            "stadium": "Lincoln Financial Field"
        }),
    )
}

pub fn player(id: i32, first_name: &str, last_name: &str, university: &str) -> Value {
    with_id(
        id,
        json!({
            "firstName": first_name,
            "lastName": last_name,
            "age": 22,
            "height": 73.0,
            "weight": 215.0,
            "handSize": 9.5,
            "armLength": 32.0,
            "homeCity": "Houston",
            "homeState": "TX",
            "university": university,
            "yearEnteredLeague": 2024,
            "position": "QB"
        }),
    )
}

/// Player with a team and position, for roster filters
pub fn player_on_team(id: i32, last_name: &str, team_id: i32, position: &str) -> Value {
    let mut record = player(id, "Test", last_name, "State");
    record["teamId"] = json!(team_id);
    record["position"] = json!(position);
    record
}

pub fn player_award(id: i32, player_id: i32, name: &str, year_awarded: i32) -> Value {
    with_id(
        id,
        json!({
            "playerId": player_id,
            "name": name,
            "yearAwarded": year_awarded
        }),
    )
}

pub fn combine_score(id: i32, player_id: i32, forty_yard_dash: f64) -> Value {
    with_id(
        id,
        json!({
            "playerId": player_id,
            "fortyYardDash": forty_yard_dash,
            "benchPress": 20.0,
            "verticalJump": 36.0,
            "broadJump": 120.0,
            "threeCone": 7.0,
            "shuttleRun": 4.2,
            "year": 2024
        }),
    )
}

pub fn draft_pick(
    id: i32,
    draft_year: i32,
    round: i32,
    pick_number: i32,
    player_id: Option<i32>,
    team_id: i32,
) -> Value {
    let mut record = json!({
        "draftYear": draft_year,
        "round": round,
        "pickNumber": pick_number,
        "teamId": team_id
    });

    if let Some(player_id) = player_id {
        record["playerId"] = json!(player_id);
    }

    with_id(id, record)
}

pub fn schedule(id: i32, team_id: i32, season_year: i32) -> Value {
    with_id(
        id,
        json!({
            "teamId": team_id,
            "oppTeamId": team_id + 1,
            "seasonYear": season_year,
            "homeOrAway": "H"
        }),
    )
}

pub fn player_team(id: i32, player_id: i32, team_id: i32) -> Value {
    with_id(
        id,
        json!({
            "playerId": player_id,
            "teamId": team_id,
            "currentTeam": true
        }),
    )
}

pub fn draft_selection(id: i32, pick_number: i32, player_id: i32, team_id: i32) -> Value {
    with_id(
        id,
        json!({
            "draftYear": 2024,
            "draftRound": (pick_number + 31) / 32,
            "pickNumber": pick_number,
            "playerId": player_id,
            "teamId": team_id,
            "position": "QB"
        }),
    )
}
