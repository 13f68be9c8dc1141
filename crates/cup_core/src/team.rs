//! Team registry entry and per-match bookkeeping.

use serde::{Deserialize, Serialize};

/// One team's identity, fixed strength, and accumulated statistics.
///
/// `points == 3 * wins + draws` holds after every applied group result.
/// Knockout play never touches the statistics fields; a team either
/// advances or is removed from the surviving set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    /// Fixed strength; upper bound of the team's goal draw.
    pub power: u32,
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goal_difference: i32,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, power: u32) -> Self {
        Self {
            name: name.into(),
            power,
            points: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            goal_difference: 0,
        }
    }

    /// Standings key: points, then goal difference, then raw power.
    pub fn ranking_key(&self) -> (u32, i32, u32) {
        (self.points, self.goal_difference, self.power)
    }

    /// Record this team's side of a finished group match.
    ///
    /// A win is worth 3 points, a draw 1. Goal difference moves by the
    /// signed goal delta.
    pub fn record_result(&mut self, scored: u32, conceded: u32) {
        self.goal_difference += scored as i32 - conceded as i32;
        if scored > conceded {
            self.points += 3;
            self.wins += 1;
        } else if scored == conceded {
            self.points += 1;
            self.draws += 1;
        } else {
            self.losses += 1;
        }
        debug_assert_eq!(self.points, 3 * self.wins + self.draws);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_record_is_zeroed() {
        let team = TeamRecord::new("Brazil", 5);
        assert_eq!(team.points, 0);
        assert_eq!(team.goal_difference, 0);
        assert_eq!(team.ranking_key(), (0, 0, 5));
    }

    #[test]
    fn win_draw_loss_bookkeeping() {
        let mut team = TeamRecord::new("Brazil", 5);
        team.record_result(3, 1);
        assert_eq!((team.points, team.wins), (3, 1));
        team.record_result(2, 2);
        assert_eq!((team.points, team.draws), (4, 1));
        team.record_result(0, 2);
        assert_eq!((team.points, team.losses), (4, 1));
        assert_eq!(team.goal_difference, 2 + 0 - 2);
        assert_eq!(team.points, 3 * team.wins + team.draws);
    }
}
