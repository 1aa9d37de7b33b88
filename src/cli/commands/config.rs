use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                cfg.save_to(&path)?;
            }

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

            let edited = match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => true,
                _ => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));
                    matches!(
                        Command::new(&default_editor).arg(&path).status(),
                        Ok(s) if s.success()
                    )
                }
            };

            if !edited {
                error(format!("Failed to edit {}", path.display()));
                return Err(AppError::Config("no usable editor".into()));
            }

            // reject an edit that no longer parses or validates
            Config::load_from(&path)?;
            success(format!("Configuration file edited: {}", path.display()));
        }
    }

    Ok(())
}
