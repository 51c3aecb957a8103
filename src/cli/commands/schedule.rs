use crate::cli::context::ViewContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::table::{Column, Table};
use ansi_term::Colour::Purple;

/// Handle the `schedule` command: lab number, display date and title.
pub fn handle(cmd: &Commands, ctx: &ViewContext) -> AppResult<()> {
    if let Commands::Schedule { section } = cmd {
        let schedule = ctx.load_schedule(section, true)?;

        header(format!("📅 LiveLab Schedule — {}", section));

        let mut table = Table::new(vec![
            Column::new("LiveLab #", 10),
            Column::new("Date", 30),
            Column::new("LiveLab Title", 60),
        ]);

        for row in &schedule.rows {
            let cells = vec![
                row.ll_num.clone().unwrap_or_default(),
                row.date_display(),
                row.title.clone().unwrap_or_default(),
            ];
            if row.is_holiday() {
                table.add_styled_row(cells, Purple.normal());
            } else {
                table.add_row(cells);
            }
        }

        if table.is_empty() {
            warning(format!("No rows found for {}", section));
            return Ok(());
        }

        print!("{}", table.render());
    }
    Ok(())
}
