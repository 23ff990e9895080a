use std::io::Write;
use std::process::ExitCode;

use rulebook_validator::{ErrorMap, FieldRules, MessageOverrides, Validator};
use rulebook_value::Value;

use crate::cli::{CheckArgs, Output};
use crate::config::AppConfig;
use crate::document;

pub fn run(args: &CheckArgs, config: &AppConfig, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let data: Value = document::read(&args.data)?;
    let rules: FieldRules = document::read(&args.rules)?;
    let messages: MessageOverrides = match &args.messages {
        Some(path) => document::read(path)?,
        None => MessageOverrides::new(),
    };

    let validator = Validator::with_config(config.validator);
    let errors = validator.validate(&data, &rules, &messages)?;
    tracing::info!(
        fields = rules.len(),
        failed = errors.len(),
        strict = validator.config().strict,
        "checked {}",
        args.data.display()
    );

    report(&errors, args.output, out)?;
    Ok(if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn report(errors: &ErrorMap, output: Output, out: &mut impl Write) -> anyhow::Result<()> {
    match output {
        Output::Json => writeln!(out, "{}", serde_json::to_string_pretty(errors)?)?,
        Output::Text if errors.is_empty() => writeln!(out, "OK")?,
        Output::Text => {
            for (field, messages) in errors.iter() {
                for message in messages {
                    writeln!(out, "{field}: {message}")?;
                }
            }
        }
    }
    Ok(())
}
