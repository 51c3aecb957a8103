use crate::cli::context::ViewContext;
use crate::cli::parser::Commands;
use crate::core::watch::{build_watch_markdown, part_label, split_by_ll_reset};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Handle the `watch` command: one watch-by table per part of the schedule.
pub fn handle(cmd: &Commands, ctx: &ViewContext) -> AppResult<()> {
    if let Commands::Watch { section } = cmd {
        let schedule = ctx.load_schedule(section, true)?;
        let (part1, part2) = split_by_ll_reset(&schedule.rows);

        header(format!("📆 SkillBuilder Watch By Schedules — {}", section));
        println!("{}", build_watch_markdown(part1, 1));

        if part2.is_empty() {
            info("Lab numbering never restarts: the schedule has a single part.");
        } else {
            info(format!("Part 2 starts on {}", part_label(part2)));
            println!("{}", build_watch_markdown(part2, 2));
        }
    }
    Ok(())
}
