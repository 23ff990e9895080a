use std::io::Write;
use std::process::ExitCode;

use rulebook_validator::filters;

use crate::cli::ScanArgs;

pub fn run(args: &ScanArgs, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    if filters::is_malicious(&args.text) {
        writeln!(out, "malicious")?;
        Ok(ExitCode::FAILURE)
    } else {
        writeln!(out, "clean")?;
        Ok(ExitCode::SUCCESS)
    }
}
