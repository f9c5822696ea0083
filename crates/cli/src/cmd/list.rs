//! List command implementation.

use color_eyre::eyre::Result;

use super::Host;
use super::output::{VarOutput, print_json};
use crate::{ListArgs, OutputFormat};

pub fn run(host: &Host, args: &ListArgs) -> Result<()> {
    match args.output {
        OutputFormat::Json => {
            let vars: Vec<VarOutput<'_>> =
                host.vars.iter().map(|(name, value)| VarOutput { name, value }).collect();
            print_json(&vars)?;
        }
        OutputFormat::Plain => {
            if host.vars.is_empty() {
                println!("(no variables)");
                return Ok(());
            }
            for (name, value) in host.vars.iter() {
                println!("{name} = {value}");
            }
            println!("-- {} variables --", host.vars.len());
        }
    }
    Ok(())
}
