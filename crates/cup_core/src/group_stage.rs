//! Round-robin driver for the group phase.

use rand::Rng;

use crate::group::GroupTable;
use crate::ledger::MatchLedger;
use crate::sim::{self, GoalModel};

/// Play the full round-robin in every group.
///
/// Each group's unordered pairs are enumerated exactly once, first team's
/// position first, then later table positions: `n * (n - 1) / 2` matches
/// for a group of `n`. Results are applied to both records, every match is
/// appended to the ledger (the sequence runs globally across groups), and
/// each group is re-ranked once its pairs are done.
pub fn play_group_stage<R: Rng>(
    groups: &mut [GroupTable],
    ledger: &mut MatchLedger,
    rng: &mut R,
    model: GoalModel,
) {
    for group in groups.iter_mut() {
        play_pairs(group, ledger, rng, model, usize::MAX);
        group.rank();
    }
}

/// Play at most `per_group_limit` of each group's pairs, in the same
/// enumeration order as [`play_group_stage`], then re-rank.
///
/// This is a standalone partial-day simulation; it does not remember which
/// pairs a previous call played. Returns the total number of matches played.
pub fn play_matchday<R: Rng>(
    groups: &mut [GroupTable],
    ledger: &mut MatchLedger,
    rng: &mut R,
    model: GoalModel,
    per_group_limit: usize,
) -> usize {
    let mut played = 0;
    for group in groups.iter_mut() {
        played += play_pairs(group, ledger, rng, model, per_group_limit);
        group.rank();
    }
    played
}

fn play_pairs<R: Rng>(
    group: &mut GroupTable,
    ledger: &mut MatchLedger,
    rng: &mut R,
    model: GoalModel,
    limit: usize,
) -> usize {
    let n = group.len();
    let mut played = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if played == limit {
                return played;
            }
            let home_name = group.standings()[i].name.clone();
            let away_name = group.standings()[j].name.clone();

            let (home, away) = group.pair_mut(i, j);
            let (home_goals, away_goals) = sim::group_score(rng, home, away, model);
            sim::apply_group_result(home, away, home_goals, away_goals);

            ledger.add(&home_name, &away_name, home_goals, away_goals);
            played += 1;
        }
    }
    played
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::TeamRecord;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn group_of(label: &str, teams: &[(&str, u32)]) -> GroupTable {
        let mut group = GroupTable::new(label);
        for (name, power) in teams {
            group
                .push(TeamRecord::new(*name, *power))
                .expect("unique names");
        }
        group
    }

    #[test]
    fn round_robin_plays_every_pair_once() {
        let mut groups = vec![
            group_of("A", &[("A1", 5), ("A2", 3), ("A3", 4), ("A4", 2)]),
            group_of("B", &[("B1", 6), ("B2", 1), ("B3", 2), ("B4", 5)]),
        ];
        let mut ledger = MatchLedger::new();
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        play_group_stage(&mut groups, &mut ledger, &mut rng, GoalModel::PowerRange);

        // 6 matches per group of 4, sequence shared across groups.
        assert_eq!(ledger.len(), 12);
        let seqs: Vec<u32> = ledger.iter().map(|m| m.seq).collect();
        assert_eq!(seqs, (1..=12).collect::<Vec<u32>>());

        // Group A's matches come first and involve only group A teams.
        for record in ledger.iter().take(6) {
            assert!(record.home.starts_with('A'));
            assert!(record.away.starts_with('A'));
        }

        for group in &groups {
            for team in group {
                assert_eq!(team.points, 3 * team.wins + team.draws);
                assert_eq!((team.wins + team.losses + team.draws), 3);
            }
            for pair in group.standings().windows(2) {
                assert!(pair[0].ranking_key() >= pair[1].ranking_key());
            }
        }
    }

    #[test]
    fn matchday_respects_the_per_group_limit() {
        let mut groups = vec![group_of("A", &[("A1", 5), ("A2", 3), ("A3", 4), ("A4", 2)])];
        let mut ledger = MatchLedger::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let played = play_matchday(&mut groups, &mut ledger, &mut rng, GoalModel::PowerRange, 2);

        assert_eq!(played, 2);
        assert_eq!(ledger.len(), 2);
        let total_games: u32 = groups[0]
            .iter()
            .map(|t| t.wins + t.losses + t.draws)
            .sum();
        assert_eq!(total_games, 4);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let make = || vec![group_of("A", &[("A1", 5), ("A2", 3), ("A3", 4), ("A4", 2)])];

        let mut first_groups = make();
        let mut first_ledger = MatchLedger::new();
        play_group_stage(
            &mut first_groups,
            &mut first_ledger,
            &mut ChaCha8Rng::seed_from_u64(1234),
            GoalModel::PowerRange,
        );

        let mut second_groups = make();
        let mut second_ledger = MatchLedger::new();
        play_group_stage(
            &mut second_groups,
            &mut second_ledger,
            &mut ChaCha8Rng::seed_from_u64(1234),
            GoalModel::PowerRange,
        );

        let first: Vec<_> = first_ledger.iter().collect();
        let second: Vec<_> = second_ledger.iter().collect();
        assert_eq!(first, second);
    }
}
