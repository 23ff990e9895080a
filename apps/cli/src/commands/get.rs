use std::io::Write;
use std::process::ExitCode;

use rulebook_value::{Value, path};

use super::parse_json;
use crate::cli::GetArgs;
use crate::document;

pub fn run(args: &GetArgs, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let data: Value = document::read(&args.data)?;
    let default = match &args.default {
        Some(text) => parse_json(text)?,
        None => Value::Null,
    };

    let value = path::get(&data, args.path.as_str(), &default);
    tracing::debug!(path = %args.path, found = path::has(&data, args.path.as_str()), "resolved path");

    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(ExitCode::SUCCESS)
}
