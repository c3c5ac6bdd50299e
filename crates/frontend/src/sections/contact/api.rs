use contracts::domain::a002_contact_inquiry::{InquiryPayload, SubmitError};
use gloo_net::http::Request;
use serde::Deserialize;

/// Error body returned by the form endpoint for rejected submissions
#[derive(Debug, Default, Deserialize)]
struct EndpointErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<EndpointFieldError>,
}

#[derive(Debug, Deserialize)]
struct EndpointFieldError {
    #[serde(default)]
    field: Option<String>,
    message: String,
}

/// Human readable reason for a non-OK response
pub fn describe_failure(status_text: &str, body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<EndpointErrorBody>(body) else {
        return status_text.to_string();
    };
    if !parsed.errors.is_empty() {
        return parsed
            .errors
            .iter()
            .map(|e| match &e.field {
                Some(field) => format!("{}: {}", field, e.message),
                None => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ");
    }
    parsed.error.unwrap_or_else(|| status_text.to_string())
}

/// POST the inquiry as multipart form data.
/// Any OK-class response counts as success.
pub async fn send_inquiry(endpoint: &str, payload: &InquiryPayload) -> Result<(), SubmitError> {
    let form = web_sys::FormData::new()
        .map_err(|e| SubmitError::Request(format!("FormData unavailable: {:?}", e)))?;
    for (name, value) in &payload.fields {
        form.append_with_str(name, value)
            .map_err(|e| SubmitError::Request(format!("Failed to append '{}': {:?}", name, e)))?;
    }

    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(form)
        .map_err(|e| SubmitError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(SubmitError::Status {
        status,
        message: describe_failure(&status_text, &body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_field_errors() {
        let body = r#"{"errors":[{"field":"email","message":"should be an email"},{"message":"form disabled"}]}"#;
        assert_eq!(
            describe_failure("Unprocessable Entity", body),
            "email: should be an email; form disabled"
        );
    }

    #[test]
    fn test_describe_plain_error() {
        assert_eq!(describe_failure("Bad Request", r#"{"error":"form not found"}"#), "form not found");
        assert_eq!(describe_failure("Bad Request", "{}"), "Bad Request");
    }

    #[test]
    fn test_describe_non_json_body() {
        assert_eq!(describe_failure("Bad Gateway", "<html>oops</html>"), "Bad Gateway");
    }
}
