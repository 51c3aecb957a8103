use crate::cli::context::ViewContext;
use crate::cli::parser::{Commands, OutputFormat};
use crate::core::build_reminders;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};

/// Handle the `reminders` command
pub fn handle(cmd: &Commands, ctx: &ViewContext) -> AppResult<()> {
    if let Commands::Reminders { section, format } = cmd {
        let chatty = *format == OutputFormat::Markdown;
        let schedule = ctx.load_schedule(section, chatty)?;
        let policy = ctx.policy()?;

        let track = schedule.track().unwrap_or_default();
        let wave = schedule.wave_section().unwrap_or(section.as_str());
        let reminders = build_reminders(&schedule, track, wave, &policy);

        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&reminders)?);
            }
            OutputFormat::Markdown => {
                header(format!("📝 End of LiveLab Reminders — {}", section));
                if reminders.is_empty() {
                    warning("No dated LiveLabs to write reminders for.");
                }
                for r in &reminders {
                    println!("{}", r.render());
                    println!("---\n");
                }
            }
        }
    }
    Ok(())
}
