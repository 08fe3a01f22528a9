//! `infill complete` — run a completion at a cursor position.

use infill_config::AppConfig;

use crate::CursorArgs;

pub async fn run(args: CursorArgs) -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let engine = super::build_engine(&args, &config);

    let completion = engine.complete(&args.file, super::cursor_position(&args)).await?;
    print!("{completion}");
    Ok(())
}
