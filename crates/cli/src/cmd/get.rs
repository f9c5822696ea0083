//! Get command: run one typed conversion on a variable.

use color_eyre::eyre::{Result, WrapErr};
use lvars_core::vars::{VarError, Variable};
use serde_json::Value;

use super::Host;
use super::output::{ValueOutput, print_json, print_plain};
use crate::{Conversion, GetArgs, OutputFormat};

pub fn run(host: &mut Host, args: &GetArgs) -> Result<()> {
    let var = host.vars.get(&args.name);

    let value = convert(host, &var, args).wrap_err_with(|| {
        format!("reading {} of variable {}", conversion_name(args.conversion), var.name())
    })?;

    match args.output {
        OutputFormat::Json => print_json(&ValueOutput {
            name: var.name(),
            conversion: conversion_name(args.conversion),
            value,
        }),
        OutputFormat::Plain => {
            print_plain(&value);
            Ok(())
        }
    }
}

fn convert(host: &mut Host, var: &Variable, args: &GetArgs) -> Result<Value, VarError> {
    Ok(match args.conversion {
        Conversion::Text => Value::from(var.raw()),
        Conversion::Bool => Value::from(var.parse_bool()?),
        Conversion::Int => Value::from(var.parse_int()?),
        Conversion::List => Value::from(var.split_multi(args.sep.unwrap_or(host.separator))),
        Conversion::Lines => Value::from(var.read_lines()?),
        Conversion::Random => Value::from(var.random_in_range(&mut host.rng)?),
        Conversion::Spin => Value::from(var.spin_text(&host.spinner, &mut host.rng)?),
    })
}

fn conversion_name(c: Conversion) -> &'static str {
    match c {
        Conversion::Text => "text",
        Conversion::Bool => "bool",
        Conversion::Int => "int",
        Conversion::List => "list",
        Conversion::Lines => "lines",
        Conversion::Random => "random",
        Conversion::Spin => "spin",
    }
}
