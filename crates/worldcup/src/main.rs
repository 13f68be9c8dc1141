//! World-cup tournament simulator CLI.
//!
//! Loads group tables from a CSV file, simulates the group stage, promotes
//! qualifiers, and runs the knockout phase to a champion. With
//! `--interactive`, the run pauses at stage boundaries and offers the
//! standings/continue prompt; the engine itself never blocks on input.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cup_core::{
    play_group_stage, promote, stage_name, GroupTable, KnockoutFormat, KnockoutStage, MatchLedger,
};
use worldcup::{display, load_teams, SimConfig, TournamentReport};

fn print_usage() {
    println!("World Cup Tournament Simulator");
    println!();
    println!("Usage:");
    println!("  worldcup run [--teams FILE] [--config FILE] [--seed N] [--format F] [--report FILE] [--interactive]");
    println!("  worldcup help");
    println!();
    println!("Options:");
    println!("  --teams FILE    CSV of group,name,power rows (default: teams.csv)");
    println!("  --config FILE   TOML settings file");
    println!("  --seed N        Fixed RNG seed for a reproducible run");
    println!("  --format F      Knockout pairing: ladder (default) or bracket");
    println!("  --report FILE   Write the final report as JSON");
    println!("  --interactive   Pause at stage boundaries (S = standings, C = continue)");
    println!();
    println!("Examples:");
    println!("  worldcup run --teams teams.csv --seed 42");
    println!("  worldcup run --format bracket --report final.json");
}

/// What the stage-boundary prompt can show.
#[derive(Clone, Copy)]
enum Phase<'a> {
    Groups(&'a [GroupTable]),
    Knockout(&'a KnockoutStage),
}

/// Standings/continue prompt between stages. Reads stdin in the binary
/// only; EOF keeps the simulation moving.
fn stage_gate(interactive: bool, phase: Phase<'_>, ledger: &MatchLedger) {
    if !interactive {
        return;
    }
    loop {
        print!("\nEnter 'S' to see standings, 'C' to continue: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        match line.trim().to_uppercase().as_str() {
            "S" => {
                match phase {
                    Phase::Groups(groups) => display::print_standings(groups),
                    Phase::Knockout(stage) => {
                        println!("Knockout field:");
                        print!("{}", display::knockout_field(stage.remaining()));
                    }
                }
                println!("\nMatch history:");
                display::print_history(ledger);
            }
            "C" => return,
            _ => println!("Invalid input. Please try again."),
        }
    }
}

fn parse_format(value: &str) -> Option<KnockoutFormat> {
    match value.to_lowercase().as_str() {
        "ladder" => Some(KnockoutFormat::Ladder),
        "bracket" => Some(KnockoutFormat::Bracket),
        _ => {
            eprintln!("Unknown knockout format: {}", value);
            None
        }
    }
}

fn run(args: &[String]) {
    let mut teams_path = PathBuf::from("teams.csv");
    let mut config_path: Option<PathBuf> = None;
    let mut seed_override: Option<u64> = None;
    let mut format_override: Option<KnockoutFormat> = None;
    let mut report_path: Option<PathBuf> = None;
    let mut interactive = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--teams" | "-t" => {
                if i + 1 < args.len() {
                    teams_path = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    seed_override = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--format" | "-f" => {
                if i + 1 < args.len() {
                    format_override = parse_format(&args[i + 1]);
                    i += 1;
                }
            }
            "--report" | "-r" => {
                if i + 1 < args.len() {
                    report_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--interactive" => interactive = true,
            _ => {}
        }
        i += 1;
    }

    let mut config = match &config_path {
        Some(path) => match SimConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {}", err);
                return;
            }
        },
        None => SimConfig::default(),
    };
    if let Some(seed) = seed_override {
        config.seed = Some(seed);
    }
    if let Some(format) = format_override {
        config.knockout_format = format;
    }

    let mut groups = match load_teams(&teams_path) {
        Ok(groups) => groups,
        Err(err) => {
            eprintln!("Error initializing teams: {}", err);
            return;
        }
    };

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut ledger = MatchLedger::new();

    println!("Initial group rankings:");
    display::print_standings(&groups);

    println!("Starting group stage...");
    play_group_stage(&mut groups, &mut ledger, &mut rng, config.goal_model);

    println!("\nGroup rankings after the group stage:");
    display::print_standings(&groups);
    stage_gate(interactive, Phase::Groups(&groups), &ledger);

    println!("Promoting teams to the knockout stage...");
    let qualifiers = promote(&mut groups, config.qualifiers_per_group);
    if qualifiers.len() < 2 {
        eprintln!("Error: not enough qualifiers to run a knockout stage.");
        return;
    }
    print!("{}", display::knockout_field(&qualifiers));

    println!("\nStarting knockout stage...");
    let mut knockout = KnockoutStage::with_config(
        qualifiers,
        config.knockout_format,
        config.knockout_goals,
        config.goal_model,
    );
    while !knockout.is_decided() {
        if knockout.format() == KnockoutFormat::Bracket {
            println!("\n{}:", stage_name(knockout.len()));
        }
        let before = ledger.len();
        if let Err(err) = knockout.advance(&mut rng, &mut ledger) {
            eprintln!("Error during knockout: {}", err);
            return;
        }
        // Knockout ledger rows record the winner first.
        for record in ledger.iter().skip(before) {
            println!("{} defeated {}", record.home, record.away);
        }
        if !knockout.is_decided() {
            stage_gate(interactive, Phase::Knockout(&knockout), &ledger);
        }
    }

    match knockout.champion() {
        Some(champion) => println!("\nThe winner of the World Cup is: {}!", champion.name),
        None => println!("\nNo champion could be decided."),
    }

    println!("\nFinal match history:");
    display::print_history(&ledger);

    if let Some(path) = report_path {
        let report = TournamentReport::new("World Cup", &groups, &ledger, knockout.champion());
        match report.save(&path) {
            Ok(()) => println!("Report written to {}", path.display()),
            Err(err) => eprintln!("Warning: failed to write report: {}", err),
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
