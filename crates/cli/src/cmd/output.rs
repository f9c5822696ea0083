//! Shared output formatting for variable commands.

use color_eyre::eyre::Result;
use serde::Serialize;

/// A single converted variable, for JSON output.
#[derive(Debug, Serialize)]
pub struct ValueOutput<'a> {
    pub name: &'a str,
    #[serde(rename = "as")]
    pub conversion: &'static str,
    pub value: serde_json::Value,
}

/// A stored variable, for JSON output.
#[derive(Debug, Serialize)]
pub struct VarOutput<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the value the way a shell script would want to consume it: lists
/// one item per line, scalars on their own line.
pub fn print_plain(value: &serde_json::Value) {
    match value {
        serde_json::Value::Array(items) => {
            for item in items {
                print_plain(item);
            }
        }
        serde_json::Value::String(s) => println!("{s}"),
        other => println!("{other}"),
    }
}
