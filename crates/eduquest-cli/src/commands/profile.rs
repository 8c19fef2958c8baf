//! The `eduquest profile` commands.

use std::path::PathBuf;

use anyhow::Result;

use eduquest_core::model::ProfileDraft;

pub fn show(data_dir: Option<PathBuf>) -> Result<()> {
    let engine = super::open_engine(data_dir)?;
    match engine.profile() {
        None => {
            println!("No profile yet. Create one with `eduquest profile set --name <name>`.");
        }
        Some(p) => {
            println!("Name:       {}", p.name);
            println!("School:     {}", or_dash(&p.school));
            println!("Type:       {}", p.player_type);
            println!("Email:      {}", or_dash(&p.email));
            println!("Registered: {}", p.created_at.format("%Y-%m-%d %H:%M UTC"));
        }
    }
    Ok(())
}

pub fn set(
    name: String,
    school: Option<String>,
    player_type: Option<String>,
    email: Option<String>,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let mut engine = super::open_engine(data_dir)?;
    let profile = engine.save_profile(ProfileDraft {
        name,
        school,
        player_type,
        email,
    })?;
    println!("Profile saved for {}.", profile.name);
    Ok(())
}

pub fn clear(data_dir: Option<PathBuf>) -> Result<()> {
    let mut engine = super::open_engine(data_dir)?;
    engine.clear_profile()?;
    println!("Profile cleared.");
    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
