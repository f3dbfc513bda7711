use anyhow::Result;
use serde_json::{Map, Value};

use crate::github;
use crate::inputs::ActionInputs;

/// One fetched entry resolved to the names it will be exported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub env_name: String,
    pub output_name: String,
    pub value: String,
}

/// Compute every export without touching the environment. Each document key
/// yields exactly one env var and one output.
pub fn render(inputs: &ActionInputs, document: &Map<String, Value>) -> Vec<Export> {
    document
        .iter()
        .map(|(key, value)| {
            let mut env_name = format!("{}{}", inputs.env_prefix, key);
            if inputs.upper_case_env_keys {
                env_name = env_name.to_uppercase();
            }
            Export {
                env_name,
                output_name: format!("{}{}", inputs.outputs_prefix, key),
                value: render_value(value),
            }
        })
        .collect()
}

/// Strings pass through unchanged; everything else becomes its canonical
/// JSON text (so `null` renders as the literal text `null`).
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Perform the side effects: set each variable in this process, append it to
/// the runner's env file, and record the output. A failed write aborts the
/// run with the remaining entries unemitted.
pub fn apply(exports: &[Export]) -> Result<()> {
    for export in exports {
        std::env::set_var(&export.env_name, &export.value);
        github::export_variable(&export.env_name, &export.value)?;
        debug!("ENV: set {}", export.env_name);

        github::set_output(&export.output_name, &export.value)?;
        debug!("output: set {}", export.output_name);
    }
    Ok(())
}
