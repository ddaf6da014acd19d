//! # Calculation Backend
//!
//! The calculator performs no arithmetic itself: every evaluation is a
//! form-encoded POST to the calculation service, answered with a JSON
//! body carrying either `result` or `error`. The [`CalcBackend`] trait is
//! the seam between the controller and the wire, so tests can script
//! results without a server.

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use crate::repl::error::CalcError;
use crate::repl::models::Operation;

/// Connection settings for the production backend
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub endpoint: String,
    pub timeout: Duration,
    /// Talk to the older multiply-only endpoint (`num1`/`num2` body, no
    /// `operation` field)
    pub legacy_multiply: bool,
}

/// A remote evaluator of two-operand arithmetic
#[allow(async_fn_in_trait)]
pub trait CalcBackend {
    /// Evaluate `operand_a operation operand_b` remotely.
    ///
    /// Errors follow the UI taxonomy: [`CalcError::Transport`] for network
    /// or HTTP-status failures, [`CalcError::Domain`] for an error string
    /// from the service, [`CalcError::Input`] when the request cannot be
    /// expressed at all (legacy endpoint, non-multiply operation).
    async fn evaluate(
        &self,
        operand_a: f64,
        operation: Operation,
        operand_b: f64,
    ) -> Result<f64, CalcError>;
}

/// JSON reply of the calculation service
#[derive(Debug, Deserialize)]
struct CalcReply {
    result: Option<f64>,
    error: Option<String>,
}

/// Interpret a service reply.
///
/// An `error` field wins regardless of status (the service pairs its
/// divide-by-zero message with a 400); otherwise a non-success status or a
/// body without `result` is a transport failure.
fn decode_reply(status_ok: bool, status: u16, body: &str) -> Result<f64, CalcError> {
    match serde_json::from_str::<CalcReply>(body) {
        Ok(CalcReply {
            error: Some(message),
            ..
        }) => Err(CalcError::Domain(message)),
        Ok(CalcReply {
            result: Some(value),
            ..
        }) if status_ok => Ok(value),
        _ if !status_ok => Err(CalcError::Transport(format!("Server error: {status}"))),
        _ => Err(CalcError::Transport(
            "Malformed response from calculation service".to_string(),
        )),
    }
}

/// Production backend speaking the form-encoded HTTP contract
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
    legacy_multiply: bool,
}

impl HttpBackend {
    /// Build a client with the caller-imposed request timeout
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            legacy_multiply: settings.legacy_multiply,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CalcBackend for HttpBackend {
    async fn evaluate(
        &self,
        operand_a: f64,
        operation: Operation,
        operand_b: f64,
    ) -> Result<f64, CalcError> {
        if self.legacy_multiply && operation != Operation::Multiply {
            return Err(CalcError::Input(
                "The legacy endpoint only multiplies".to_string(),
            ));
        }

        let mut form: Vec<(&str, String)> = vec![("num1", operand_a.to_string())];
        if !self.legacy_multiply {
            form.push(("operation", operation.wire_name().to_string()));
        }
        form.push(("num2", operand_b.to_string()));

        tracing::debug!(
            "POST {}: {} {} {}",
            self.endpoint,
            operand_a,
            operation.wire_name(),
            operand_b
        );

        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CalcError::Transport("Request timed out".to_string())
                } else {
                    CalcError::Transport(format!("Network error: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CalcError::Transport(format!("Network error: {e}")))?;

        tracing::debug!("reply {}: {}", status, body);
        decode_reply(status.is_success(), status.as_u16(), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_reply_should_decode_the_result() {
        assert_eq!(decode_reply(true, 200, r#"{"result": 6}"#), Ok(6.0));
        assert_eq!(decode_reply(true, 200, r#"{"result": -0.5}"#), Ok(-0.5));
    }

    #[test]
    fn error_field_should_decode_as_domain_error() {
        let decoded = decode_reply(false, 400, r#"{"error": "Division by zero is not allowed"}"#);
        assert_eq!(
            decoded,
            Err(CalcError::Domain(
                "Division by zero is not allowed".to_string()
            ))
        );
    }

    #[test]
    fn error_field_should_win_even_on_success_status() {
        let decoded = decode_reply(true, 200, r#"{"error": "backend unhappy"}"#);
        assert_eq!(decoded, Err(CalcError::Domain("backend unhappy".to_string())));
    }

    #[test]
    fn non_success_status_should_decode_as_transport_error() {
        let decoded = decode_reply(false, 500, "Internal Server Error");
        assert_eq!(
            decoded,
            Err(CalcError::Transport("Server error: 500".to_string()))
        );
    }

    #[test]
    fn malformed_body_should_decode_as_transport_error() {
        let decoded = decode_reply(true, 200, "not json at all");
        assert!(matches!(decoded, Err(CalcError::Transport(_))));
        let decoded = decode_reply(true, 200, r#"{"unexpected": true}"#);
        assert!(matches!(decoded, Err(CalcError::Transport(_))));
    }

    #[tokio::test]
    async fn legacy_backend_should_reject_non_multiply_locally() {
        let backend = HttpBackend::new(&BackendSettings {
            endpoint: "http://localhost:8080/api/multiply".to_string(),
            timeout: Duration::from_secs(1),
            legacy_multiply: true,
        })
        .unwrap();

        // Rejected before any request is made, so no server is needed.
        let result = backend.evaluate(2.0, Operation::Add, 3.0).await;
        assert!(matches!(result, Err(CalcError::Input(_))));
    }
}
