use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FeedError;

/// Kind of activity a workout post records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Run,
    Ride,
    Swim,
    Walk,
    Hike,
    Strength,
    Yoga,
    /// Anything the client does not know about yet.
    #[default]
    #[serde(other)]
    Other,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Run => "Run",
            ActivityKind::Ride => "Ride",
            ActivityKind::Swim => "Swim",
            ActivityKind::Walk => "Walk",
            ActivityKind::Hike => "Hike",
            ActivityKind::Strength => "Strength",
            ActivityKind::Yoga => "Yoga",
            ActivityKind::Other => "Workout",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "run" | "running" => Some(ActivityKind::Run),
            "ride" | "bike" | "cycling" => Some(ActivityKind::Ride),
            "swim" | "swimming" => Some(ActivityKind::Swim),
            "walk" | "walking" => Some(ActivityKind::Walk),
            "hike" | "hiking" => Some(ActivityKind::Hike),
            "strength" | "lift" | "gym" => Some(ActivityKind::Strength),
            "yoga" => Some(ActivityKind::Yoga),
            _ => None,
        }
    }
}

/// Workout summary attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workout {
    #[serde(default)]
    pub activity: ActivityKind,
    pub duration_secs: u32,
    /// Distance in meters, absent for activities without one.
    #[serde(default)]
    pub distance_m: Option<u32>,
}

impl Workout {
    /// One-line summary, e.g. `Run · 30 min · 5.2 km`.
    pub fn summary(&self) -> String {
        let minutes = self.duration_secs / 60;
        let duration = if minutes >= 60 {
            format!("{}h {:02}m", minutes / 60, minutes % 60)
        } else {
            format!("{} min", minutes)
        };

        match self.distance_m {
            Some(meters) => format!(
                "{} · {} · {:.1} km",
                self.activity.label(),
                duration,
                meters as f64 / 1000.0
            ),
            None => format!("{} · {}", self.activity.label(), duration),
        }
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Parses the compose sheet's workout line: `<activity> <duration> [<distance>km]`.
///
/// Durations accept `45m`, `1h` and `1h30m`.
impl FromStr for Workout {
    type Err = FeedError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| FeedError::InvalidWorkout {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let mut tokens = input.split_whitespace();
        let activity = tokens
            .next()
            .ok_or_else(|| invalid("missing activity"))
            .and_then(|t| ActivityKind::parse(t).ok_or_else(|| invalid("unknown activity")))?;

        let duration_secs = tokens
            .next()
            .ok_or_else(|| invalid("missing duration"))
            .and_then(|t| parse_duration(t).map_err(invalid))?;

        let distance_m = match tokens.next() {
            Some(t) => Some(parse_distance(t).map_err(invalid)?),
            None => None,
        };

        if tokens.next().is_some() {
            return Err(invalid("unexpected trailing text"));
        }

        Ok(Workout {
            activity,
            duration_secs,
            distance_m,
        })
    }
}

const BAD_DURATION: &str = "duration must look like 45m or 1h30m";
const BAD_DISTANCE: &str = "distance must look like 5.2km";

fn parse_duration(token: &str) -> Result<u32, &'static str> {
    let token = token.to_ascii_lowercase();
    let (hours, rest) = match token.split_once('h') {
        Some((h, rest)) => (h.parse::<u32>().map_err(|_| BAD_DURATION)?, rest),
        None => (0, token.as_str()),
    };
    let minutes = match rest {
        "" => 0,
        m => m
            .strip_suffix('m')
            .ok_or(BAD_DURATION)?
            .parse::<u32>()
            .map_err(|_| BAD_DURATION)?,
    };
    let total = hours
        .checked_mul(3600)
        .zip(minutes.checked_mul(60))
        .and_then(|(h, m)| h.checked_add(m))
        .ok_or("duration too long")?;
    if total == 0 {
        return Err(BAD_DURATION);
    }
    Ok(total)
}

fn parse_distance(token: &str) -> Result<u32, &'static str> {
    let km: f64 = token
        .to_ascii_lowercase()
        .strip_suffix("km")
        .ok_or(BAD_DISTANCE)?
        .parse()
        .map_err(|_| BAD_DISTANCE)?;
    if !(km > 0.0 && km.is_finite()) {
        return Err(BAD_DISTANCE);
    }
    let meters = (km * 1000.0).round();
    if meters > f64::from(u32::MAX) {
        return Err("distance too long");
    }
    Ok(meters as u32)
}
