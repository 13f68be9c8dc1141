//! Human-readable rendering of standings, knockout fields, and the match
//! log. Read-only over the engine's snapshot accessors.

use cup_core::{GroupTable, MatchLedger, TeamRecord};

/// Render one group's standings table.
pub fn group_table(group: &GroupTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("Group {}\n", group.label()));
    out.push_str(&format!(
        "{:<16} {:>4} {:>4} {:>4} {:>4} {:>5} {:>5}\n",
        "Team", "Pts", "W", "D", "L", "GD", "Pow"
    ));
    out.push_str(&"-".repeat(52));
    out.push('\n');
    for team in group.standings() {
        out.push_str(&format!(
            "{:<16} {:>4} {:>4} {:>4} {:>4} {:>5} {:>5}\n",
            team.name,
            team.points,
            team.wins,
            team.draws,
            team.losses,
            team.goal_difference,
            team.power
        ));
    }
    out
}

/// Render every group's standings, in group order.
pub fn standings(groups: &[GroupTable]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&group_table(group));
        out.push('\n');
    }
    out
}

/// Render the surviving knockout field, one team per line in pairing order.
pub fn knockout_field(teams: &[TeamRecord]) -> String {
    let mut out = String::new();
    for team in teams {
        out.push_str(&format!("{} (power {})\n", team.name, team.power));
    }
    out
}

/// Render the chronological match log.
pub fn match_history(ledger: &MatchLedger) -> String {
    let mut out = String::new();
    for record in ledger {
        out.push_str(&format!(
            "Game {}: {} {} - {} {}\n",
            record.seq, record.home, record.home_goals, record.away_goals, record.away
        ));
    }
    out
}

/// Print all group standings to stdout.
pub fn print_standings(groups: &[GroupTable]) {
    print!("{}", standings(groups));
}

/// Print the match log to stdout.
pub fn print_history(ledger: &MatchLedger) {
    print!("{}", match_history(ledger));
}
