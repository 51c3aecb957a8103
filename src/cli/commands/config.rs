use crate::cli::context::ViewContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::{Finding, check_config};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &ViewContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(&ctx.cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                info("No configuration file found; built-in defaults apply.");
            } else {
                let content = fs::read_to_string(&path)?;
                let findings = check_config(&content);
                let invalid = findings.iter().filter(|f| f.is_invalid()).count();

                for f in &findings {
                    match f {
                        Finding::Missing(key) => info(format!("{key}: not set, default used")),
                        Finding::Unknown(key) => warning(format!("{key}: unknown key, ignored")),
                        Finding::Invalid(msg) => error(msg),
                    }
                }

                if invalid > 0 {
                    return Err(AppError::Config(format!(
                        "{} problem(s) in {}",
                        invalid,
                        path.display()
                    )));
                }
                success("Configuration is valid");
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{}'", editor_to_use));
                }
                _ => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));
                    let status = Command::new(&default_editor)
                        .arg(&path)
                        .status()
                        .map_err(|e| AppError::Config(format!("{default_editor}: {e}")))?;
                    if !status.success() {
                        return Err(AppError::Config(format!(
                            "editor '{}' exited with {}",
                            default_editor, status
                        )));
                    }
                    success(format!(
                        "Configuration file edited using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }

    Ok(())
}
