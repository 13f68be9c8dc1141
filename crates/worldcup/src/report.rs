//! Final-results export and import.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cup_core::{GroupTable, MatchLedger, MatchRecord, TeamRecord};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to access report file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Final standings of one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupStanding {
    pub label: String,
    pub teams: Vec<TeamRecord>,
}

/// Snapshot of a finished tournament, suitable for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    pub name: String,
    pub champion: Option<String>,
    pub groups: Vec<GroupStanding>,
    pub matches: Vec<MatchRecord>,
}

impl TournamentReport {
    pub fn new(
        name: &str,
        groups: &[GroupTable],
        ledger: &MatchLedger,
        champion: Option<&TeamRecord>,
    ) -> Self {
        Self {
            name: name.to_string(),
            champion: champion.map(|t| t.name.clone()),
            groups: groups
                .iter()
                .map(|g| GroupStanding {
                    label: g.label().to_string(),
                    teams: g.standings().to_vec(),
                })
                .collect(),
            matches: ledger.iter().cloned().collect(),
        }
    }

    /// Save the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a previously saved report.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text summary.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        match &self.champion {
            Some(champion) => report.push_str(&format!("Champion: {}\n", champion)),
            None => report.push_str("Champion: undecided\n"),
        }
        report.push_str(&format!("Matches played: {}\n\n", self.matches.len()));

        for group in &self.groups {
            report.push_str(&format!("Group {}:\n", group.label));
            for team in &group.teams {
                report.push_str(&format!(
                    "  {:<16} {:>3} pts (GD {:+})\n",
                    team.name, team.points, team.goal_difference
                ));
            }
        }
        report
    }

    /// Print the text summary to stdout.
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> TournamentReport {
        let mut group = GroupTable::new("A");
        group
            .push(TeamRecord::new("Brazil", 5))
            .expect("unique names");
        let mut ledger = MatchLedger::new();
        ledger.add("Brazil", "Ghana", 2, 0);

        let champion = TeamRecord::new("Brazil", 5);
        TournamentReport::new("Test Cup", &[group], &ledger, Some(&champion))
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = sample_report();
        let file = tempfile::NamedTempFile::new().expect("temp file");

        report.save(file.path()).expect("save");
        let loaded = TournamentReport::load(file.path()).expect("load");

        assert_eq!(loaded.name, "Test Cup");
        assert_eq!(loaded.champion.as_deref(), Some("Brazil"));
        assert_eq!(loaded.matches.len(), 1);
        assert_eq!(loaded.groups[0].teams[0].name, "Brazil");
    }

    #[test]
    fn text_summary_names_the_champion() {
        let report = sample_report();
        let text = report.generate_report();
        assert!(text.contains("Champion: Brazil"));
        assert!(text.contains("Group A:"));
    }
}
