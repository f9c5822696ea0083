pub mod check;
pub mod doctor;
pub mod get;
pub mod list;
pub mod output;

use color_eyre::eyre::{Result, WrapErr};
use lvars_core::config::loader::{ConfigError, ConfigLoader, default_config_path};
use lvars_core::config::types::ResolvedConfig;
use lvars_core::spin::Spintax;
use lvars_core::store::VariableStore;
use lvars_core::vars::VarRng;
use tracing_appender::non_blocking::WorkerGuard;

use crate::Cli;

/// Everything a variable command needs: the variables, the shared random
/// source, and the spinner.
pub struct Host {
    pub vars: VariableStore,
    pub rng: VarRng,
    pub spinner: Spintax,
    pub separator: char,
    _log_guard: Option<WorkerGuard>,
}

/// Load config, install logging, and build the [`Host`].
///
/// A missing config at the default location is not an error: variables may
/// come entirely from `--var`.
pub fn host(cli: &Cli) -> Result<Host> {
    let cfg = match ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref()) {
        Ok(rc) => rc,
        Err(ConfigError::NotFound(_)) if cli.config.is_none() && cli.profile.is_none() => {
            ResolvedConfig::builtin()
        }
        Err(e) => {
            let path = cli.config.clone().unwrap_or_else(default_config_path);
            return Err(e).wrap_err_with(|| format!("loading {}", path.display()));
        }
    };

    let log_guard = crate::logging::init(&cfg.logging)?;

    let mut vars = cfg.vars;
    vars.apply_overrides(&cli.vars);

    let seed = cli.seed.or(cfg.seed);
    tracing::debug!(profile = %cfg.active_profile, seeded = seed.is_some(), "host ready");

    Ok(Host {
        vars,
        rng: VarRng::from_seed_opt(seed),
        spinner: Spintax::new(),
        separator: cfg.separator,
        _log_guard: log_guard,
    })
}
