use serde::de::DeserializeOwned;

use crate::error::NodeError;

/// Key the node uses for application-level errors in a 200 response.
const ERROR_KEY: &str = "Error";

/// Check a response body for a top-level `Error` field.
///
/// Error and success bodies share no envelope, so this parses into an
/// untyped tree and inspects that one key before any typed decoding.
pub(super) fn probe_node_error(body: &str) -> Result<(), NodeError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(NodeError::Deserialization)?;
    let Some(err) = value.as_object().and_then(|obj| obj.get(ERROR_KEY)) else {
        return Ok(());
    };

    match err {
        serde_json::Value::String(message) => Err(NodeError::Rpc {
            message: message.clone(),
        }),
        other => Err(NodeError::MalformedErrorField {
            value: other.clone(),
        }),
    }
}

pub(super) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, NodeError> {
    serde_json::from_str(body).map_err(NodeError::Deserialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_error_field_becomes_rpc_error() {
        let body = r#"{"Error":"class org.tron.core.exception.BadItemException : account not found"}"#;
        let err = probe_node_error(body).expect_err("must detect Error key");
        assert!(
            matches!(err, NodeError::Rpc { ref message } if message.contains("account not found"))
        );
    }

    #[test]
    fn non_string_error_field_is_malformed() {
        let err = probe_node_error(r#"{"Error":{"code":1}}"#).expect_err("must detect Error key");
        assert!(matches!(err, NodeError::MalformedErrorField { .. }));
    }

    #[test]
    fn lowercase_error_key_is_not_an_error() {
        probe_node_error(r#"{"error":"ignored","blockID":"00"}"#).expect("only `Error` is checked");
    }

    #[test]
    fn non_object_bodies_pass_the_probe() {
        probe_node_error("[]").expect("arrays carry no Error key");
        probe_node_error("{}").expect("empty object is not an error");
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = probe_node_error("<html>").expect_err("html is not JSON");
        assert!(matches!(err, NodeError::Deserialization(_)));
    }
}
