use crate::utils::{ConverterError, Result};
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Convert(ConvertOptions),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    pub csv: PathBuf,
    /// Template `.strings` file; absent means plain rendering.
    pub strings: Option<PathBuf>,
}

/// Scans the arguments after the program name. `-h` wins over everything
/// else; an unknown option or an option without its value is a usage error.
pub fn parse(args: &[String]) -> Result<Command> {
    let mut csv = None;
    let mut strings = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--csv" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ConverterError::Usage("--csv requires a file path".into()))?;
                csv = Some(PathBuf::from(value));
            }
            "--strings" => {
                let value = iter.next().ok_or_else(|| {
                    ConverterError::Usage("--strings requires a file path".into())
                })?;
                strings = Some(PathBuf::from(value));
            }
            "-h" => return Ok(Command::Help),
            other => {
                return Err(ConverterError::Usage(format!("unknown option: {other}")));
            }
        }
    }

    let csv = csv.ok_or_else(|| ConverterError::Usage("missing required option: --csv".into()))?;
    Ok(Command::Convert(ConvertOptions { csv, strings }))
}

pub fn usage(program: &str) -> String {
    format!(
        "usage:\n{program} --csv <file> [--strings <template>]\nor\n{program} -h to show usage information"
    )
}
