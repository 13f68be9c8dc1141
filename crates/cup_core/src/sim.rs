//! Probabilistic match simulation.
//!
//! All draws go through a caller-supplied `rand::Rng`, so a seeded
//! generator makes every simulated tournament reproducible.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CupError;
use crate::team::TeamRecord;

/// Replay ceiling for the knockout tie-break loop.
///
/// The loop terminates almost surely under either goal model; the ceiling
/// only guards degenerate inputs (two teams that can never outscore each
/// other).
pub const MAX_REPLAYS: u32 = 10_000;

/// How a match's goal counts are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalModel {
    /// Each side draws uniformly from `0..=power`.
    #[default]
    PowerRange,
    /// Both sides draw from a shared band scaled to half the power gap,
    /// keeping scorelines close for evenly matched teams.
    PowerGap,
}

impl GoalModel {
    fn draw<R: Rng>(self, rng: &mut R, home: &TeamRecord, away: &TeamRecord) -> (u32, u32) {
        match self {
            GoalModel::PowerRange => {
                (rng.gen_range(0..=home.power), rng.gen_range(0..=away.power))
            }
            GoalModel::PowerGap => {
                let band = (home.power.abs_diff(away.power) / 2).max(1);
                (rng.gen_range(0..=band), rng.gen_range(0..=band))
            }
        }
    }
}

/// Which side of a knockout match won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Draw one group-match score. Equal goals are a valid draw.
pub fn group_score<R: Rng>(
    rng: &mut R,
    home: &TeamRecord,
    away: &TeamRecord,
    model: GoalModel,
) -> (u32, u32) {
    model.draw(rng, home, away)
}

/// Apply a finished group match to both records.
///
/// Win: +3 points and +1 win, opponent +1 loss. Draw: +1 point and +1 draw
/// each. Goal difference moves by the same delta in opposite directions,
/// so each match is zero-sum.
pub fn apply_group_result(
    home: &mut TeamRecord,
    away: &mut TeamRecord,
    home_goals: u32,
    away_goals: u32,
) {
    home.record_result(home_goals, away_goals);
    away.record_result(away_goals, home_goals);
}

/// Redraw until one side scores strictly more. No draws in knockout play.
pub fn knockout_winner<R: Rng>(
    rng: &mut R,
    home: &TeamRecord,
    away: &TeamRecord,
    model: GoalModel,
) -> Result<Side, CupError> {
    for _ in 0..MAX_REPLAYS {
        let (home_goals, away_goals) = model.draw(rng, home, away);
        if home_goals > away_goals {
            return Ok(Side::Home);
        }
        if away_goals > home_goals {
            return Ok(Side::Away);
        }
    }
    Err(CupError::NoDecision {
        attempts: MAX_REPLAYS,
    })
}
