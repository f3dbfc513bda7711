//! The runner-facing surface: env/output file appends and workflow commands.

use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};

use anyhow::Result;

const ENV_FILE: &str = "GITHUB_ENV";
const OUTPUT_FILE: &str = "GITHUB_OUTPUT";

/// Delimiter for multiline values in the env/output file format.
const DELIMITER: &str = "__ENVFETCH_EOF__";

/// Whether the runner was started with step debug logging enabled.
pub fn step_debug_enabled() -> bool {
    env::var("RUNNER_DEBUG").is_ok_and(|value| value == "1")
}

/// Make the variable available to later steps of the job.
pub fn export_variable(name: &str, value: &str) -> Result<()> {
    append(ENV_FILE, name, value)
}

/// Record a named step output.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    append(OUTPUT_FILE, name, value)
}

/// Emit the runner's failure command; the step is marked failed once the
/// process exits non-zero.
pub fn error(message: &str) {
    println!("::error::{}", escape(message));
}

/// Append one entry to the file named by `variable`, or echo it to stdout
/// when running outside the runner.
fn append(variable: &str, name: &str, value: &str) -> Result<()> {
    let mut sink: Box<dyn Write> = match env::var(variable) {
        Ok(file_name) if !file_name.is_empty() => {
            let file = OpenOptions::new()
                .write(true)
                .append(true)
                .create(true)
                .open(file_name)?;
            Box::new(file)
        }
        _ => Box::new(io::stdout()),
    };
    write_entry(&mut sink, name, value)?;
    Ok(())
}

/// Single-line values use the `name=value` form; values containing newlines
/// use the heredoc form the runner accepts for them.
fn write_entry(sink: &mut dyn Write, name: &str, value: &str) -> io::Result<()> {
    if value.contains('\n') {
        writeln!(sink, "{name}<<{DELIMITER}")?;
        writeln!(sink, "{value}")?;
        writeln!(sink, "{DELIMITER}")
    } else {
        writeln!(sink, "{name}={value}")
    }
}

/// Workflow command messages travel on a single stdout line, so line breaks
/// and the escape character itself are percent-encoded.
fn escape(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
