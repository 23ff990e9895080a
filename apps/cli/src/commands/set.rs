use std::io::Write;
use std::process::ExitCode;

use rulebook_value::{Value, path};

use super::parse_json;
use crate::cli::SetArgs;
use crate::document;

pub fn run(args: &SetArgs, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let mut data: Value = document::read(&args.data)?;
    let value = parse_json(&args.value)?;

    if !data.is_container() && !args.path.is_empty() {
        tracing::warn!(kind = %data.kind(), "document root is not a map, nothing written");
    }
    path::set(&mut data, args.path.as_str(), value);

    if args.in_place {
        document::write(&args.data, &data)?;
        tracing::info!(path = %args.path, "updated {}", args.data.display());
    } else {
        writeln!(out, "{}", serde_json::to_string_pretty(&data)?)?;
    }
    Ok(ExitCode::SUCCESS)
}
