//! The `eduquest reset` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(data_dir: Option<PathBuf>, yes: bool) -> Result<()> {
    anyhow::ensure!(
        yes,
        "this deletes all progress, scores, badges, and the profile; re-run with --yes to confirm"
    );

    let mut engine = super::open_engine(data_dir)?;
    engine.reset_all()?;
    println!("All eduquest data cleared.");
    Ok(())
}
