//! Single-elimination state machine over the surviving qualifiers.

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CupError;
use crate::ledger::MatchLedger;
use crate::sim::{self, GoalModel, Side};
use crate::team::TeamRecord;

/// Pairing topology for the elimination phase.
///
/// The two topologies produce different tournaments for the same input;
/// callers pick one, they are never mixed within a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnockoutFormat {
    /// Always pair the front two survivors. The winner stays at the front
    /// and faces the next team in order, producing a survivor-vs-next
    /// ladder rather than a seeded bracket.
    #[default]
    Ladder,
    /// Fixed bracket: consecutive pairs (0,1), (2,3), ... per stage;
    /// winners form the next stage's sequence at half the size.
    Bracket,
}

/// Goal counts written to the ledger for knockout matches.
///
/// Reporting only. The state machine needs nothing beyond win/lose, so the
/// recorded "goals" are a presentation choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnockoutGoals {
    /// Record every knockout match as 0-0.
    #[default]
    Zeros,
    /// Record each side's power as its goal count.
    Power,
}

impl KnockoutGoals {
    fn as_goals(self, winner: &TeamRecord, loser: &TeamRecord) -> (u32, u32) {
        match self {
            KnockoutGoals::Zeros => (0, 0),
            KnockoutGoals::Power => (winner.power, loser.power),
        }
    }
}

/// Human-readable label for a knockout round of `n` teams.
pub fn stage_name(n: usize) -> String {
    match n {
        2 => "Final".to_string(),
        4 => "Semifinals".to_string(),
        8 => "Quarterfinals".to_string(),
        16 => "Round of 16".to_string(),
        _ => format!("Round of {}", n),
    }
}

/// The set of teams still alive, consumed match by match until one remains.
#[derive(Debug, Clone)]
pub struct KnockoutStage {
    teams: Vec<TeamRecord>,
    format: KnockoutFormat,
    goals: KnockoutGoals,
    model: GoalModel,
}

impl KnockoutStage {
    /// Ladder pairing, 0-0 reporting, power-range scoring.
    pub fn new(teams: Vec<TeamRecord>) -> Self {
        Self::with_config(
            teams,
            KnockoutFormat::default(),
            KnockoutGoals::default(),
            GoalModel::default(),
        )
    }

    pub fn with_config(
        teams: Vec<TeamRecord>,
        format: KnockoutFormat,
        goals: KnockoutGoals,
        model: GoalModel,
    ) -> Self {
        Self {
            teams,
            format,
            goals,
            model,
        }
    }

    pub fn format(&self) -> KnockoutFormat {
        self.format
    }

    /// Read-only snapshot of the surviving teams, in pairing order.
    pub fn remaining(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Terminal state: at most one team left.
    pub fn is_decided(&self) -> bool {
        self.teams.len() <= 1
    }

    /// The champion, once exactly one team remains.
    pub fn champion(&self) -> Option<&TeamRecord> {
        match self.teams.as_slice() {
            [champion] => Some(champion),
            _ => None,
        }
    }

    /// Advance one step: a single match under ladder pairing, a full stage
    /// under bracket pairing. Returns the number of matches played.
    pub fn advance<R: Rng>(
        &mut self,
        rng: &mut R,
        ledger: &mut MatchLedger,
    ) -> Result<usize, CupError> {
        if self.teams.is_empty() {
            return Err(CupError::EmptyState("knockout set"));
        }
        if self.is_decided() {
            return Ok(0);
        }
        match self.format {
            KnockoutFormat::Ladder => {
                self.play_front_pair(rng, ledger)?;
                Ok(1)
            }
            KnockoutFormat::Bracket => self.play_bracket_stage(rng, ledger),
        }
    }

    /// Run to the terminal state and return the champion.
    pub fn run<R: Rng>(
        &mut self,
        rng: &mut R,
        ledger: &mut MatchLedger,
    ) -> Result<TeamRecord, CupError> {
        while !self.is_decided() {
            self.advance(rng, ledger)?;
        }
        match self.champion() {
            Some(champion) => Ok(champion.clone()),
            None => Err(CupError::EmptyState("knockout set")),
        }
    }

    /// One ladder transition: front two play, the loser is removed.
    fn play_front_pair<R: Rng>(
        &mut self,
        rng: &mut R,
        ledger: &mut MatchLedger,
    ) -> Result<(), CupError> {
        let side = sim::knockout_winner(rng, &self.teams[0], &self.teams[1], self.model)?;
        let (winner_idx, loser_idx) = match side {
            Side::Home => (0, 1),
            Side::Away => (1, 0),
        };
        self.log_match(ledger, winner_idx, loser_idx);
        self.teams.remove(loser_idx);
        Ok(())
    }

    /// One bracket stage: consecutive pairs play, winners form the next
    /// stage. An odd-sized field gives the last team a bye.
    ///
    /// Every pair is decided before anything is logged or removed, so a
    /// `NoDecision` leaves the stage untouched.
    fn play_bracket_stage<R: Rng>(
        &mut self,
        rng: &mut R,
        ledger: &mut MatchLedger,
    ) -> Result<usize, CupError> {
        let mut decisions = Vec::with_capacity(self.teams.len() / 2);
        let mut idx = 0;
        while idx + 1 < self.teams.len() {
            let side = sim::knockout_winner(rng, &self.teams[idx], &self.teams[idx + 1], self.model)?;
            decisions.push(match side {
                Side::Home => (idx, idx + 1),
                Side::Away => (idx + 1, idx),
            });
            idx += 2;
        }

        let mut winners = Vec::with_capacity(decisions.len() + 1);
        for &(winner_idx, loser_idx) in &decisions {
            self.log_match(ledger, winner_idx, loser_idx);
            winners.push(self.teams[winner_idx].clone());
        }
        if self.teams.len() % 2 == 1 {
            let bye = &self.teams[self.teams.len() - 1];
            warn!("odd knockout field, {} advances on a bye", bye.name);
            winners.push(bye.clone());
        }
        let played = decisions.len();
        self.teams = winners;
        Ok(played)
    }

    /// Ledger rows record the winner first.
    fn log_match(&self, ledger: &mut MatchLedger, winner_idx: usize, loser_idx: usize) {
        let winner = &self.teams[winner_idx];
        let loser = &self.teams[loser_idx];
        let (winner_goals, loser_goals) = self.goals.as_goals(winner, loser);
        ledger.add(&winner.name, &loser.name, winner_goals, loser_goals);
    }
}
