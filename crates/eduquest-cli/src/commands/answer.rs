//! The `eduquest answer` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(
    content: PathBuf,
    game_id: String,
    level: u32,
    choice: u32,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(level >= 1, "level numbers start at 1");
    anyhow::ensure!(choice >= 1, "choice numbers start at 1");

    let catalog = super::load_catalog(&content)?;
    let mut engine = super::open_engine(data_dir)?;
    engine.initialize_defaults(&catalog)?;
    let game = super::find_game(&catalog, &game_id)?;

    let level_index = (level - 1) as usize;
    anyhow::ensure!(
        level_index < game.levels.len(),
        "game '{}' has {} levels, there is no level {level}",
        game.id,
        game.levels.len()
    );
    let unlocked = engine.unlocked(&game.id);
    anyhow::ensure!(
        level <= unlocked,
        "level {level} is locked; answer level {unlocked} correctly first"
    );
    let answered = &game.levels[level_index];
    anyhow::ensure!(
        (choice as usize) <= answered.choices.len(),
        "level {level} has {} choices, there is no choice {choice}",
        answered.choices.len()
    );

    let badges_before = engine.badges().len();
    let outcome = engine.record_answer(game, level_index, (choice - 1) as usize)?;
    super::report_outcome(&outcome, answered);

    let badges = engine.evaluate_badges()?;
    for badge in &badges[badges_before..] {
        println!("Badge earned: {badge}!");
    }

    Ok(())
}
