use crate::cli::commands::view::{load_records, resolve_state};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;
use crate::utils::path::expand_tilde;

/// Handle the `export` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        filter: filter_args,
        format,
        file,
        public,
        force,
    } = cmd
    {
        let state = resolve_state(filter_args)?;
        let scopes = cfg.scope_set();
        let scope_def = scopes.get(&state.scope)?;

        let target = match file {
            Some(f) => expand_tilde(f),
            None if *public => cfg.public_data_path(),
            None => {
                return Err(AppError::Export(
                    "--file is required unless --public is given".into(),
                ));
            }
        };

        let records = load_records(cfg)?;
        let visible = filter::apply(&records, &state, scope_def);

        let request = ExportRequest {
            format: *format,
            file: &target,
            public: *public,
            force: *force,
        };
        ExportLogic::export(&visible, &request, &cfg.data_path())?;
    }
    Ok(())
}
