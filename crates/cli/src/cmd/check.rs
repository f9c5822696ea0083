//! Check command: chain the variable validators.

use color_eyre::eyre::Result;
use lvars_core::vars::{VarError, Variable};

use super::Host;
use crate::CheckArgs;

pub fn run(host: &Host, args: &CheckArgs) -> Result<()> {
    let var = host.vars.get(&args.name);
    let checked = validate(&var, args)?;

    tracing::debug!(var = %checked.name(), "checks passed");
    println!("OK   {}", checked.name());
    Ok(())
}

/// Presence first, then file, then directory. Presence is checked when asked
/// for or when no other check is requested.
fn validate<'a>(var: &'a Variable, args: &CheckArgs) -> Result<&'a Variable, VarError> {
    let require_contents = !args.allow_empty;

    let mut checked = var;
    if args.non_empty || args.message.is_some() || !(args.file || args.dir) {
        checked = checked.require_non_empty(args.message.as_deref())?;
    }
    if args.file {
        checked = checked.require_file(require_contents)?;
    }
    if args.dir {
        checked = checked.require_directory(require_contents)?;
    }
    Ok(checked)
}
