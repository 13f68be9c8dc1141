//! Team-definition input: `group,name,power` CSV with a header line.

use std::path::Path;

use log::warn;
use thiserror::Error;

use cup_core::{GroupTable, TeamRecord};

/// Failures while reading the team file.
///
/// All variants are fatal to initialization: the simulation never starts
/// from a partial load. Individual malformed rows are not errors; they are
/// skipped with a warning.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read team file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed team file: {0}")]
    Csv(#[from] csv::Error),

    #[error("team file contains no usable team rows")]
    NoTeams,
}

/// Read group tables from `path`.
///
/// Rows with the wrong field count, an unparsable or non-positive power, or
/// a duplicate team name are skipped with a warning. Groups keep the order
/// of their first appearance in the file.
pub fn load_teams(path: &Path) -> Result<Vec<GroupTable>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut groups: Vec<GroupTable> = Vec::new();
    for row in reader.records() {
        let record = row?;
        if record.len() != 3 {
            warn!("skipping malformed line: {:?}", record);
            continue;
        }
        let label = &record[0];
        let name = &record[1];
        let power = match record[2].parse::<u32>() {
            Ok(power) if power > 0 => power,
            _ => {
                warn!("skipping team '{}': invalid power '{}'", name, &record[2]);
                continue;
            }
        };

        let idx = match groups.iter().position(|g| g.label() == label) {
            Some(idx) => idx,
            None => {
                groups.push(GroupTable::new(label));
                groups.len() - 1
            }
        };
        if let Err(err) = groups[idx].push(TeamRecord::new(name, power)) {
            warn!("skipping row in group {}: {}", label, err);
        }
    }

    if groups.iter().map(GroupTable::len).sum::<usize>() == 0 {
        return Err(LoadError::NoTeams);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_teams(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn loads_groups_in_first_appearance_order() {
        let file = write_teams(
            "group,name,power\n\
             B,Ghana,3\n\
             A,Brazil,5\n\
             B,Japan,4\n\
             A,France,4\n",
        );

        let groups = load_teams(file.path()).expect("valid file");

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label(), "B");
        assert_eq!(groups[1].label(), "A");
        assert_eq!(groups[0].len(), 2);
        assert!(groups[0].contains("Ghana"));
        assert!(groups[1].contains("Brazil"));
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let file = write_teams(
            "group,name,power\n\
             A,Brazil,5\n\
             A,TooFewFields\n\
             A,BadPower,strong\n\
             A,ZeroPower,0\n\
             A,France,4\n",
        );

        let groups = load_teams(file.path()).expect("valid rows remain");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
        assert!(groups[0].contains("Brazil"));
        assert!(groups[0].contains("France"));
    }

    #[test]
    fn duplicate_names_within_a_group_are_skipped() {
        let file = write_teams(
            "group,name,power\n\
             A,Brazil,5\n\
             A,Brazil,2\n",
        );

        let groups = load_teams(file.path()).expect("valid file");

        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[0].standings()[0].power, 5);
    }

    #[test]
    fn header_only_file_is_a_no_teams_error() {
        let file = write_teams("group,name,power\n");
        assert!(matches!(load_teams(file.path()), Err(LoadError::NoTeams)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let missing = Path::new("definitely/not/here/teams.csv");
        assert!(load_teams(missing).is_err());
    }
}
