#![cfg(feature = "system-factions")]

//! Faction sentiment. A read-only view of the committed state; nothing here
//! feeds back into the model.

use serde::Serialize;

use crate::game::state::Indicators;
use crate::mechanics::control::Band;
use crate::params::ParameterSet;

pub const SCORE: Band = Band::new(0.0, 100.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactionId {
    Workers,
    Business,
    Banks,
    Opposition,
}

#[derive(Clone, Copy, Debug)]
pub struct Faction {
    pub id: FactionId,
    pub name: &'static str,
    pub focus: &'static str,
    pub base: f64,
}

pub const FACTIONS: [Faction; 4] = [
    Faction { id: FactionId::Workers, name: "Workers & unions", focus: "jobs and purchasing power", base: 55.0 },
    Faction { id: FactionId::Business, name: "Business & exporters", focus: "growth and funding costs", base: 50.0 },
    Faction { id: FactionId::Banks, name: "Banks & finance", focus: "inflation expectations and credibility", base: 48.0 },
    Faction { id: FactionId::Opposition, name: "Opposition", focus: "social stability and public opinion", base: 42.0 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Supportive,
    Wary,
    Discontent,
}

impl Mood {
    pub fn from_score(score: f64) -> Self {
        if score > 65.0 {
            Mood::Supportive
        } else if score > 45.0 {
            Mood::Wary
        } else {
            Mood::Discontent
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sentiment {
    pub id: FactionId,
    pub score: f64,
    pub mood: Mood,
}

#[inline]
pub fn score(p: &ParameterSet, faction: &Faction, now: &Indicators) -> f64 {
    SCORE.apply(faction.base + 0.6 * now.approval - 0.4 * (now.pi - p.pi_star).abs() - 0.2 * now.u)
}

pub fn sentiment(p: &ParameterSet, now: &Indicators) -> Vec<Sentiment> {
    FACTIONS
        .iter()
        .map(|f| {
            let score = score(p, f, now);
            Sentiment { id: f.id, score, mood: Mood::from_score(score) }
        })
        .collect()
}
