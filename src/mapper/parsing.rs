use chrono::{DateTime, Local};
use serde::Deserialize;
use serde_json::Value;

use super::error::MapError;
use super::types::{CrewMember, GeoPosition, PassPrediction};

/// The pass service's second event is the one reported, not the first.
pub const PASS_INDEX: usize = 1;

#[derive(Deserialize)]
struct AstrosPayload {
    #[serde(default)]
    people: Option<Vec<RawCrewMember>>,
}

#[derive(Deserialize)]
struct RawCrewMember {
    name: String,
    craft: String,
}

#[derive(Deserialize)]
struct IssNowPayload {
    iss_position: RawPosition,
}

#[derive(Deserialize)]
struct RawPosition {
    latitude: Degrees,
    longitude: Degrees,
}

// The service sends degrees as strings; plain numbers are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum Degrees {
    Text(String),
    Number(f64),
}

#[derive(Deserialize)]
struct IssPassPayload {
    #[serde(default)]
    response: Vec<RawPass>,
}

#[derive(Deserialize)]
struct RawPass {
    risetime: i64,
    #[serde(default)]
    duration: Option<u64>,
}

pub fn parse_crew(raw: &Value) -> Result<Vec<CrewMember>, MapError> {
    let payload = AstrosPayload::deserialize(raw)?;

    Ok(payload
        .people
        .unwrap_or_default()
        .into_iter()
        .map(|p| CrewMember {
            name: p.name,
            craft: p.craft,
        })
        .collect())
}

pub fn parse_position(raw: &Value) -> Result<GeoPosition, MapError> {
    let payload = IssNowPayload::deserialize(raw)?;
    let latitude = to_degrees("latitude", payload.iss_position.latitude)?;
    let longitude = to_degrees("longitude", payload.iss_position.longitude)?;
    Ok(GeoPosition::new(latitude, longitude))
}

pub fn parse_pass_time(raw: &Value) -> Result<PassPrediction, MapError> {
    let payload = IssPassPayload::deserialize(raw)?;
    let found = payload.response.len();
    let event = payload
        .response
        .get(PASS_INDEX)
        .ok_or(MapError::NotEnoughPasses {
            needed: PASS_INDEX + 1,
            found,
        })?;

    let rise_time = DateTime::from_timestamp(event.risetime, 0)
        .ok_or(MapError::InvalidTimestamp(event.risetime))?
        .with_timezone(&Local);

    Ok(PassPrediction {
        rise_time_epoch: event.risetime,
        rise_time,
        duration_s: event.duration,
    })
}

fn to_degrees(field: &'static str, value: Degrees) -> Result<f64, MapError> {
    let parsed = match value {
        Degrees::Number(n) => Some(n),
        Degrees::Text(ref s) => s.trim().parse::<f64>().ok(),
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(MapError::InvalidCoordinate {
            field,
            value: match value {
                Degrees::Text(s) => s,
                Degrees::Number(n) => n.to_string(),
            },
        }),
    }
}
