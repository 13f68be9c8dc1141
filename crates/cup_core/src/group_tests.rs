use crate::error::CupError;
use crate::group::GroupTable;
use crate::team::TeamRecord;

fn table_with(teams: &[(&str, u32)]) -> GroupTable {
    let mut table = GroupTable::new("A");
    for (name, power) in teams {
        table
            .push(TeamRecord::new(*name, *power))
            .expect("unique names");
    }
    table
}

#[test]
fn push_rejects_duplicate_names() {
    let mut table = table_with(&[("Brazil", 5)]);

    let err = table.push(TeamRecord::new("Brazil", 3));
    assert_eq!(err, Err(CupError::DuplicateName("Brazil".to_string())));
    assert_eq!(table.len(), 1);
}

#[test]
fn remove_returns_the_team() {
    let mut table = table_with(&[("Brazil", 5), ("Ghana", 3)]);

    let removed = table.remove("Brazil").expect("present");
    assert_eq!(removed.name, "Brazil");
    assert_eq!(table.len(), 1);
    assert!(!table.contains("Brazil"));
}

#[test]
fn remove_of_absent_name_reports_and_leaves_table_unchanged() {
    let mut table = table_with(&[("Brazil", 5), ("Ghana", 3)]);
    let before: Vec<String> = table.iter().map(|t| t.name.clone()).collect();

    let err = table.remove("Japan");
    assert_eq!(err, Err(CupError::TeamNotFound("Japan".to_string())));

    let after: Vec<String> = table.iter().map(|t| t.name.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn remove_from_empty_table_reports_empty_state() {
    let mut table = GroupTable::new("A");
    assert_eq!(table.remove("Brazil"), Err(CupError::EmptyState("group table")));
}

#[test]
fn rank_orders_by_points_then_goal_difference_then_power() {
    let mut table = table_with(&[("A", 2), ("B", 9), ("C", 4), ("D", 3)]);
    // Hand-crafted standings: B and C tie on points, C leads on GD;
    // C and D tie on points and GD, C's power breaks the tie.
    {
        let teams = [
            ("A", 6, 1),
            ("B", 4, -1),
            ("C", 4, 2),
            ("D", 4, 2),
        ];
        for (name, points, gd) in teams {
            // Rebuild each record with the target statistics.
            let mut record = table.remove(name).expect("present");
            record.points = points;
            record.wins = points / 3;
            record.draws = points % 3;
            record.goal_difference = gd;
            table.push(record).expect("unique");
        }
    }

    table.rank();

    let order: Vec<&str> = table.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(order, vec!["A", "C", "D", "B"]);

    for pair in table.standings().windows(2) {
        assert!(pair[0].ranking_key() >= pair[1].ranking_key());
    }
}

#[test]
fn rank_is_idempotent() {
    let mut table = table_with(&[("A", 1), ("B", 7), ("C", 3)]);
    table.rank();
    let first: Vec<String> = table.iter().map(|t| t.name.clone()).collect();
    table.rank();
    let second: Vec<String> = table.iter().map(|t| t.name.clone()).collect();
    assert_eq!(first, second);
}
