use crate::cli::context::ViewContext;
use crate::errors::AppResult;
use crate::source::list_sections;
use crate::ui::messages::{header, info};

/// Handle the `sections` command
pub fn handle(ctx: &ViewContext) -> AppResult<()> {
    let dir = ctx.cfg.data_path();
    let sections = list_sections(&dir)?;

    if sections.is_empty() {
        info(format!("No section CSVs found in {}", dir.display()));
        return Ok(());
    }

    header("📂 Sections");
    for s in sections {
        println!("  {s}");
    }
    Ok(())
}
