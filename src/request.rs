use std::fmt;

use url::Url;

use crate::error::Error;
use crate::inputs::{require, ActionInputs};

/// Host used when no `api_url` input is given.
pub const DEFAULT_API_URL: &str = "https://secrets.envhub.dev";

/// The presigned-URL query parameter listing which parameters the caller
/// must supply values for.
const FREE_QUERY_PARAMS: &str = "free_query_params";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Direct,
    Presigned,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Direct => "direct",
            Mode::Presigned => "presigned",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// One fully resolved request: a single absolute URL plus optional
/// basic-auth credentials. Building it never touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub mode: Mode,
    pub url: Url,
    pub credentials: Option<Credentials>,
}

impl Request {
    pub fn build(inputs: &ActionInputs) -> Result<Self, Error> {
        if inputs.presigned() {
            Self::presigned(inputs)
        } else {
            Self::direct(inputs)
        }
    }

    /// Presigned mode: keep the URL as given, including all of its query
    /// parameters. When the URL names `env` as a free query parameter, the
    /// `environment` input becomes required and is appended to the query.
    fn presigned(inputs: &ActionInputs) -> Result<Self, Error> {
        let mut url = Url::parse(&inputs.presigned_url)?;

        let free_params: Vec<String> = url
            .query_pairs()
            .find(|(name, _)| name == FREE_QUERY_PARAMS)
            .map(|(_, value)| value.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_default();

        if free_params.iter().any(|p| p == "env") {
            let environment = require("environment", &inputs.environment)?;
            url.query_pairs_mut().append_pair("env", environment);
        }

        Ok(Self {
            mode: Mode::Presigned,
            url,
            credentials: None,
        })
    }

    /// Direct mode: the project/environment-scoped secrets path under the
    /// configured (or default) API host, fetched with basic auth.
    fn direct(inputs: &ActionInputs) -> Result<Self, Error> {
        let base = if inputs.api_url.is_empty() {
            DEFAULT_API_URL
        } else {
            inputs.api_url.as_str()
        };

        let mut url = Url::parse(base)?;
        // Each segment is percent-encoded, so a project or environment name
        // containing `/`, `?` or `#` cannot reshape the path.
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithoutBase)?
            .pop_if_empty()
            .extend([
                "v1",
                "secrets",
                "projects",
                inputs.project.as_str(),
                "environment",
                inputs.environment.as_str(),
                "json",
            ]);

        Ok(Self {
            mode: Mode::Direct,
            url,
            credentials: Some(Credentials {
                username: inputs.api_key.clone(),
                password: inputs.api_secret.clone(),
            }),
        })
    }
}
