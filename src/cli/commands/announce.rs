use crate::cli::context::ViewContext;
use crate::cli::parser::{Commands, OutputFormat};
use crate::core::{Announcement, FeedItem, build_feed, generate_friday_messages};
use crate::errors::AppResult;
use crate::ui::messages::{adjusted, error, header, warning};
use crate::utils::date::{add_ordinal_suffix, adjust_to_most_recent_friday, parse_anchor};
use chrono::{Datelike, Weekday};
use serde_json::{Value, json};

/// Handle the `announce` command
///
/// With `--date`: the announcement for that Friday (a different weekday is
/// moved back to the previous Friday). Without: every Friday of the schedule,
/// with the watch-by tables placed where each part starts.
pub fn handle(cmd: &Commands, ctx: &ViewContext) -> AppResult<()> {
    if let Commands::Announce {
        section,
        date,
        track,
        wave,
        all_waves,
        format,
    } = cmd
    {
        let chatty = *format == OutputFormat::Markdown;
        let schedule = ctx.load_schedule(section, chatty)?;
        let policy = ctx.policy()?;

        match date {
            Some(d) => {
                let anchor = parse_anchor(d)?;
                if chatty && anchor.weekday() != Weekday::Fri {
                    warning(format!("{} is not a Friday.", add_ordinal_suffix(Some(anchor))));
                    adjusted(format!(
                        "Adjusted to most recent Friday: {}",
                        add_ordinal_suffix(Some(adjust_to_most_recent_friday(anchor)))
                    ));
                }

                let track = resolve(track.as_deref(), schedule.track());
                let wave = if *all_waves {
                    None
                } else {
                    Some(resolve(wave.as_deref(), schedule.wave_section()))
                };

                let results = generate_friday_messages(&schedule, track, anchor, wave, &policy);
                emit_single(&results, *format)?;
            }
            None => {
                let feed = build_feed(&schedule, track.as_deref(), wave.as_deref(), &policy);
                emit_feed(&feed.items, *format, section)?;
            }
        }
    }
    Ok(())
}

fn resolve<'a>(flag: Option<&'a str>, from_sheet: Option<&'a str>) -> &'a str {
    flag.or(from_sheet).unwrap_or_default()
}

fn announcement_json(a: &Announcement) -> AppResult<Value> {
    let mut v = serde_json::to_value(a)?;
    if let Value::Object(map) = &mut v {
        map.insert("message".into(), Value::String(a.render()));
    }
    Ok(v)
}

fn emit_single(
    results: &[(String, AppResult<Announcement>)],
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Markdown => {
            for (sec, result) in results {
                match result {
                    Ok(a) => println!("{}", a.render()),
                    Err(e) => error(format!("{} ({})", e, sec)),
                }
            }
        }
        OutputFormat::Json => {
            let mut out = Vec::new();
            for (sec, result) in results {
                out.push(match result {
                    Ok(a) => announcement_json(a)?,
                    Err(e) => json!({ "section": sec, "error": e.to_string() }),
                });
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn emit_feed(items: &[FeedItem], format: OutputFormat, section: &str) -> AppResult<()> {
    match format {
        OutputFormat::Markdown => {
            header(format!("📣 HQ Announcement Templates — {}", section));
            for item in items {
                match item {
                    FeedItem::WatchSchedule { markdown, .. } => println!("{markdown}"),
                    FeedItem::Announcement(a) => println!("{}", a.render()),
                    FeedItem::Skipped {
                        anchor,
                        section,
                        reason,
                    } => error(format!(
                        "{}: {} ({})",
                        add_ordinal_suffix(Some(*anchor)),
                        reason,
                        section
                    )),
                    FeedItem::NoDates => warning("No dates found in the schedule."),
                }
                println!("---\n");
            }
        }
        OutputFormat::Json => {
            let mut out = Vec::new();
            for item in items {
                out.push(match item {
                    FeedItem::WatchSchedule { part, markdown } => {
                        json!({ "kind": "watch_schedule", "part": part, "markdown": markdown })
                    }
                    FeedItem::Announcement(a) => {
                        let mut v = announcement_json(a)?;
                        if let Value::Object(map) = &mut v {
                            map.insert("kind".into(), Value::String("announcement".into()));
                        }
                        v
                    }
                    FeedItem::Skipped {
                        anchor,
                        section,
                        reason,
                    } => json!({
                        "kind": "skipped",
                        "anchor": anchor,
                        "section": section,
                        "error": reason,
                    }),
                    FeedItem::NoDates => json!({ "kind": "no_dates" }),
                });
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
