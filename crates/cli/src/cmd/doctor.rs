use color_eyre::eyre::{Result, WrapErr};
use lvars_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) -> Result<()> {
    let path = config.map_or_else(default_config_path, Path::to_path_buf);
    let rc = ConfigLoader::load(config, profile)
        .wrap_err_with(|| format!("looked for: {}", path.display()))?;

    let _log_guard = crate::logging::init(&rc.logging)?;
    tracing::info!(profile = %rc.active_profile, "doctor");

    println!("OK   lvars doctor");
    println!("path: {}", path.display());
    println!("profile: {}", rc.active_profile);
    println!("seed: {}", rc.seed.map_or_else(|| "(entropy)".to_string(), |s| s.to_string()));
    println!("separator: '{}'", rc.separator);
    println!("variables: {}", rc.vars.len());
    println!("logging.level: {}", rc.logging.level);
    if let Some(file) = &rc.logging.file {
        println!("logging.file: {}", file.display());
    }
    Ok(())
}
