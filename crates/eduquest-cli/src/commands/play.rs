//! The `eduquest play` command: the interactive level loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

pub fn execute(
    content: PathBuf,
    game_id: String,
    start_level: Option<u32>,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let catalog = super::load_catalog(&content)?;
    let mut engine = super::open_engine(data_dir)?;
    engine.initialize_defaults(&catalog)?;
    let game = super::find_game(&catalog, &game_id)?;

    let unlocked = engine.unlocked(&game.id);
    let start = match start_level {
        Some(n) => {
            anyhow::ensure!(
                n >= 1 && (n as usize) <= game.levels.len(),
                "game '{}' has {} levels, there is no level {n}",
                game.id,
                game.levels.len()
            );
            anyhow::ensure!(
                n <= unlocked,
                "level {n} is locked; answer level {unlocked} correctly first"
            );
            (n - 1) as usize
        }
        // Default to the unlock frontier so `play` continues where the
        // player left off.
        None => (unlocked - 1) as usize,
    };

    let player = engine
        .profile()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Guest".to_string());
    println!("{} — Player: {player}", game.title);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut index = start;
    loop {
        let level = &game.levels[index];
        println!();
        println!("{} ({} points)", level.title, level.points);
        if !level.instruction.is_empty() {
            println!("{}", level.instruction);
        }
        println!("{}", level.question);
        for (i, choice) in level.choices.iter().enumerate() {
            println!("  {}. {choice}", i + 1);
        }

        let Some(chosen) = read_choice(&mut lines, level.choices.len())? else {
            println!("Session ended.");
            break;
        };

        let badges_before = engine.badges().len();
        let outcome = engine.record_answer(game, index, chosen)?;
        super::report_outcome(&outcome, level);

        let badges = engine.evaluate_badges()?;
        for badge in &badges[badges_before..] {
            println!("Badge earned: {badge}!");
        }

        let next = index + 1;
        if next >= game.levels.len() {
            println!("\nYou finished {}!", game.title);
            break;
        }
        if (next as u32) >= engine.unlocked(&game.id) {
            println!(
                "\nAnswer level {} correctly to unlock level {}.",
                index + 1,
                next + 1
            );
            break;
        }
        index = next;
    }

    let summary = engine.game_summary(game);
    println!(
        "\n{}: {}/{} levels unlocked, score {}",
        game.title, summary.unlocked, summary.total_levels, summary.score
    );
    Ok(())
}

/// Prompt until the player enters a valid 1-based choice. `None` on EOF.
fn read_choice(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    choice_count: usize,
) -> Result<Option<usize>> {
    loop {
        print!("Your answer [1-{choice_count}]: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.trim().parse::<usize>() {
            Ok(n) if (1..=choice_count).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Enter a number between 1 and {choice_count}."),
        }
    }
}
