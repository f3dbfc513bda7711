use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::request::{Mode, Request};

/// Envelope the secrets API wraps direct-mode responses in.
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    result: Option<Map<String, Value>>,
}

/// Perform the one GET of the run and decode the flat key/value document.
///
/// Direct-mode responses are unwrapped from their `result` envelope;
/// presigned responses are the document itself. No retries, transport
/// default timeout.
pub fn fetch(request: &Request) -> Result<Map<String, Value>, Error> {
    let client = Client::builder()
        .user_agent(concat!("envfetch/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let mut get = client
        .get(request.url.clone())
        .header(ACCEPT, "application/json");
    if let Some(credentials) = &request.credentials {
        get = get.basic_auth(&credentials.username, Some(&credentials.password));
    }

    let response = get.send()?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::HttpStatus(status.as_u16()));
    }

    let body = response.text()?;
    match request.mode {
        Mode::Direct => {
            let envelope: Envelope = serde_json::from_str(&body)?;
            envelope.result.ok_or(Error::EmptyResult)
        }
        Mode::Presigned => Ok(serde_json::from_str(&body)?),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::inputs::ActionInputs;

    fn direct_inputs(server: &MockServer) -> ActionInputs {
        ActionInputs {
            api_url: server.uri(),
            project: "p".into(),
            environment: "e".into(),
            api_key: "key".into(),
            api_secret: "secret".into(),
            ..Default::default()
        }
    }

    // The blocking client may not run on the test runtime directly
    async fn fetch_for(inputs: ActionInputs) -> Result<Map<String, Value>, Error> {
        let request = Request::build(&inputs).unwrap();
        tokio::task::spawn_blocking(move || fetch(&request))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn direct_mode_unwraps_the_result_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/secrets/projects/p/environment/e/json"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": { "DB_URL": "postgres://localhost", "POOL_SIZE": 8 }
            })))
            .mount(&server)
            .await;

        let document = fetch_for(direct_inputs(&server)).await.unwrap();
        assert_eq!(document.len(), 2);
        assert_eq!(document["DB_URL"], "postgres://localhost");
        assert_eq!(document["POOL_SIZE"], 8);
    }

    #[tokio::test]
    async fn direct_mode_sends_basic_auth() {
        let server = MockServer::start().await;
        // "key:secret" base64-encoded
        Mock::given(method("GET"))
            .and(header("authorization", "Basic a2V5OnNlY3JldA=="))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "result": {} })),
            )
            .mount(&server)
            .await;

        assert!(fetch_for(direct_inputs(&server)).await.is_ok());
    }

    #[tokio::test]
    async fn non_200_status_is_reported_with_its_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let error = fetch_for(direct_inputs(&server)).await.unwrap_err();
        assert!(matches!(error, Error::HttpStatus(404)));
        assert!(error.to_string().contains("404"));
    }

    #[tokio::test]
    async fn null_result_is_an_empty_result_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": null })))
            .mount(&server)
            .await;

        let error = fetch_for(direct_inputs(&server)).await.unwrap_err();
        assert!(matches!(error, Error::EmptyResult));
    }

    #[tokio::test]
    async fn missing_result_is_an_empty_result_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .mount(&server)
            .await;

        let error = fetch_for(direct_inputs(&server)).await.unwrap_err();
        assert!(matches!(error, Error::EmptyResult));
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{oops", "application/json"))
            .mount(&server)
            .await;

        let error = fetch_for(direct_inputs(&server)).await.unwrap_err();
        assert!(matches!(error, Error::Parse(_)));
    }

    #[tokio::test]
    async fn presigned_mode_reads_the_document_directly() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fetch"))
            .and(query_param("token", "abc"))
            .and(query_param("env", "staging"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "FEATURE_FLAG": true })),
            )
            .mount(&server)
            .await;

        let inputs = ActionInputs {
            presigned_url: format!("{}/fetch?token=abc&free_query_params=env", server.uri()),
            environment: "staging".into(),
            ..Default::default()
        };
        let document = fetch_for(inputs).await.unwrap();
        assert_eq!(document["FEATURE_FLAG"], true);
    }
}
