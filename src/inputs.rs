use clap::Args;

use crate::error::Error;

/// Action inputs as the runner supplies them. Each flag also binds to the
/// `INPUT_*` variable the runner exports for it, so the binary works both as
/// an action entrypoint and as a plain CLI.
#[derive(Args, Debug)]
#[command()]
pub struct InputArgs {
    /// Base URL of the secrets API (direct mode)
    #[arg(long, env = "INPUT_API_URL", default_value = "", hide_env_values = true)]
    api_url: String,

    /// Pre-authorized fetch URL; mutually exclusive with API key auth
    #[arg(long, env = "INPUT_PRESIGNED_URL", default_value = "", hide_env_values = true)]
    presigned_url: String,

    /// API key used for basic auth (direct mode)
    #[arg(long, env = "INPUT_APIKEY", default_value = "", hide_env_values = true)]
    apikey: String,

    /// API secret used for basic auth (direct mode)
    #[arg(long, env = "INPUT_APISECRET", default_value = "", hide_env_values = true)]
    apisecret: String,

    /// Project identifier
    #[arg(long, env = "INPUT_PROJECT", default_value = "")]
    project: String,

    /// Environment name
    #[arg(long, env = "INPUT_ENVIRONMENT", default_value = "")]
    environment: String,

    /// Prefix applied to exported variable names
    #[arg(long, env = "INPUT_ENV_PREFIX", default_value = "")]
    env_prefix: String,

    /// Prefix applied to output names
    #[arg(long, env = "INPUT_OUTPUTS_PREFIX", default_value = "")]
    outputs_prefix: String,

    /// Upper-case exported variable names ("true"/"false")
    #[arg(long, env = "INPUT_UPPER_CASE_ENV_KEYS", default_value = "false")]
    upper_case_env_keys: String,
}

impl InputArgs {
    pub fn resolve(self) -> ActionInputs {
        ActionInputs {
            api_url: self.api_url,
            presigned_url: self.presigned_url,
            api_key: self.apikey,
            api_secret: self.apisecret,
            project: self.project,
            environment: self.environment,
            env_prefix: self.env_prefix,
            outputs_prefix: self.outputs_prefix,
            // The runner passes booleans as strings; anything but "true" is false
            upper_case_env_keys: self.upper_case_env_keys == "true",
        }
    }
}

/// The resolved set of inputs for one run. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    pub api_url: String,
    pub presigned_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub project: String,
    pub environment: String,
    pub env_prefix: String,
    pub outputs_prefix: String,
    pub upper_case_env_keys: bool,
}

impl ActionInputs {
    pub fn presigned(&self) -> bool {
        !self.presigned_url.is_empty()
    }

    /// Check that every input the selected mode needs is present. The
    /// presigned `env` requirement depends on the URL itself and is checked
    /// while building the request.
    pub fn validate(&self) -> Result<(), Error> {
        if self.presigned() {
            return Ok(());
        }
        require("project", &self.project)?;
        require("environment", &self.environment)?;
        require("apikey", &self.api_key)?;
        require("apisecret", &self.api_secret)?;
        Ok(())
    }
}

pub fn require<'a>(name: &str, value: &'a str) -> Result<&'a str, Error> {
    if value.trim().is_empty() {
        Err(Error::MissingInput(name.to_string()))
    } else {
        Ok(value)
    }
}
