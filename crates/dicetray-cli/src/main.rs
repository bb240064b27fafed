//! Dice Tray CLI
//!
//! A headless dice roller driving the dicetray core end to end. The binary
//! stands in for the physics host: each toss generates a roll impulse,
//! scatters the dice to random rest orientations, resolves their face
//! values, and reports the results from the committed roll snapshot.
//! History persists to the same store the full application uses.

use clap::{Parser, Subcommand};
use colored::Colorize;

use dicetray::throw::random_rest_orientation;
use dicetray::{
    resolve_face_value, DieId, JsonFileHistoryStore, RollImpulseGenerator, RollLifecycleStore,
    RollSnapshot, Shape,
};

/// Dice tray - a headless dice roller
#[derive(Parser)]
#[command(name = "trayroll")]
#[command(author, version, about = "Dice tray - a headless dice roller")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dice to toss (e.g., "2d6", "1d20", "d8"). Can specify multiple.
    #[arg(short, long, value_parser = parse_dice_arg)]
    dice: Option<Vec<(usize, Shape)>>,

    /// Skip persisting this roll to the history file
    #[arg(long)]
    no_save: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the persisted roll history
    History {
        /// Only show the most recent N rolls
        #[arg(short, long)]
        last: Option<usize>,
    },
    /// Clear the persisted roll history
    ClearHistory,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::History { last }) => show_history(last),
        Some(Commands::ClearHistory) => clear_history(),
        None => {
            let dice = cli
                .dice
                .unwrap_or_else(|| vec![(1, Shape::D20)]);
            roll(&dice, cli.no_save);
        }
    }
}

/// Parse dice notation like "2d6", "1d20", or "d8".
fn parse_dice_arg(s: &str) -> Result<(usize, Shape), String> {
    let lower = s.to_lowercase();
    let Some((count_str, sides_str)) = lower.split_once('d') else {
        return Err(format!("Invalid dice notation '{s}': expected something like 2d6"));
    };

    let count = if count_str.is_empty() {
        1
    } else {
        count_str
            .parse::<usize>()
            .map_err(|_| format!("Invalid dice count in '{s}'"))?
    };
    if count == 0 {
        return Err(format!("Dice count must be at least 1 in '{s}'"));
    }

    let shape = Shape::parse(&format!("d{sides_str}"))
        .ok_or_else(|| format!("Unknown die type 'd{sides_str}' in '{s}'"))?;

    Ok((count, shape))
}

fn open_store(persist: bool) -> RollLifecycleStore {
    if persist {
        match JsonFileHistoryStore::open() {
            Ok(backing) => return RollLifecycleStore::with_history_store(Box::new(backing)),
            Err(e) => eprintln!("{} {e}", "warning:".yellow().bold()),
        }
    }
    RollLifecycleStore::new()
}

fn roll(dice: &[(usize, Shape)], no_save: bool) {
    let mut store = open_store(!no_save);
    let mut rng = rand::thread_rng();
    let generator = RollImpulseGenerator::default();

    let mut spawned: Vec<(DieId, Shape)> = Vec::new();
    for (count, shape) in dice {
        for _ in 0..*count {
            spawned.push((DieId::new(format!("d{}", spawned.len() + 1)), *shape));
        }
    }
    let ids: Vec<DieId> = spawned.iter().map(|(id, _)| id.clone()).collect();

    // The whole handful goes into motion at once; they all land in one cycle
    store.mark_rolling(&ids);

    let impulse = generator.generate();
    println!(
        "{}",
        format!(
            "Tossed {} dice with impulse ({:.2}, {:.2}, {:.2})",
            ids.len(),
            impulse.x,
            impulse.y,
            impulse.z
        )
        .dimmed()
    );

    // No physics in this host: every die settles at a random rest orientation
    for (id, shape) in &spawned {
        let orientation = random_rest_orientation(&mut rng);
        let value = resolve_face_value(*shape, orientation);
        store.record_settled(id, value, *shape);
    }

    let Some(snapshot) = store.history().last() else {
        println!("No dice were rolled.");
        return;
    };
    print_snapshot(snapshot);
}

fn print_snapshot(snapshot: &RollSnapshot) {
    println!();
    for die in &snapshot.dice {
        println!(
            "  {:>4}  {}",
            die.shape.name().bold(),
            die.value.to_string().cyan()
        );
    }
    println!();
    println!(
        "{} {}",
        "TOTAL:".bold(),
        snapshot.sum.to_string().green().bold()
    );
}

fn show_history(last: Option<usize>) {
    let store = open_store(true);
    let history = store.history();
    if history.is_empty() {
        println!("No rolls recorded yet.");
        return;
    }

    let start = last.map_or(0, |n| history.len().saturating_sub(n));
    for (index, snapshot) in history.iter().enumerate().skip(start) {
        let dice: Vec<String> = snapshot
            .dice
            .iter()
            .map(|d| format!("{} {}", d.shape.name(), d.value))
            .collect();
        println!(
            "{} {} {}  [{}]",
            format!("#{}", index + 1).dimmed(),
            "sum".dimmed(),
            snapshot.sum.to_string().green().bold(),
            dice.join(", ")
        );
    }
}

fn clear_history() {
    let mut store = open_store(true);
    store.clear_history();
    println!("Roll history cleared.");
}
