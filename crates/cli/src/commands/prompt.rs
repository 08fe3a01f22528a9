//! `infill prompt` — print the assembled prompt without calling the model.
//!
//! Useful for inspecting what survives the token budget at a given cursor.

use infill_config::AppConfig;

use crate::CursorArgs;

pub async fn run(args: CursorArgs) -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let engine = super::build_engine(&args, &config);

    match engine.assemble(&args.file, super::cursor_position(&args)).await? {
        Some(prompt) => print!("{prompt}"),
        None => eprintln!("No content available for {}", args.file),
    }
    Ok(())
}
