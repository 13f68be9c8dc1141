//! Ordered per-group team registry with standings ranking.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::CupError;
use crate::team::TeamRecord;

/// The teams of one group, in registration order until ranked.
///
/// Names are unique within a table. The table is exclusively owned by the
/// group-stage driver during group play and handed to promotion afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupTable {
    label: String,
    teams: Vec<TeamRecord>,
}

impl GroupTable {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            teams: Vec::new(),
        }
    }

    /// Group identifier, e.g. "A".
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Register a team at the end of the table.
    pub fn push(&mut self, team: TeamRecord) -> Result<(), CupError> {
        if self.contains(&team.name) {
            return Err(CupError::DuplicateName(team.name));
        }
        self.teams.push(team);
        Ok(())
    }

    /// Remove the first team matching `name` and return it.
    pub fn remove(&mut self, name: &str) -> Result<TeamRecord, CupError> {
        if self.teams.is_empty() {
            return Err(CupError::EmptyState("group table"));
        }
        match self.teams.iter().position(|t| t.name == name) {
            Some(idx) => Ok(self.teams.remove(idx)),
            None => Err(CupError::TeamNotFound(name.to_string())),
        }
    }

    /// Re-order in place by the canonical standings key: points, then goal
    /// difference, then power, all descending.
    ///
    /// Deterministic; ranking an already-ranked table changes nothing.
    pub fn rank(&mut self) {
        self.rank_by(|a, b| b.ranking_key().cmp(&a.ranking_key()));
    }

    /// Re-order in place with a caller-supplied comparator.
    pub fn rank_by<F>(&mut self, compare: F)
    where
        F: FnMut(&TeamRecord, &TeamRecord) -> Ordering,
    {
        self.teams.sort_by(compare);
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t.name == name)
    }

    /// Read-only snapshot of the current order.
    pub fn standings(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TeamRecord> {
        self.teams.iter()
    }

    /// Mutable access to two distinct entries, home before away.
    pub(crate) fn pair_mut(&mut self, i: usize, j: usize) -> (&mut TeamRecord, &mut TeamRecord) {
        debug_assert!(i < j && j < self.teams.len());
        let (left, right) = self.teams.split_at_mut(j);
        (&mut left[i], &mut right[0])
    }
}

impl<'a> IntoIterator for &'a GroupTable {
    type Item = &'a TeamRecord;
    type IntoIter = std::slice::Iter<'a, TeamRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
