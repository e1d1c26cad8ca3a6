//! Standard response envelope helpers.
//!
//! Every response (success or failure) is `{statusCode, message, data?}` and
//! the HTTP status mirrors `statusCode`. `data` is omitted on failures and on
//! delete success; `message` is an empty array on list/show success.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T = ()> {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 200 with a single record and no message.
pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            status_code: StatusCode::OK.as_u16(),
            message: Vec::new(),
            data: Some(data),
        }),
    )
}

/// 200 with a collection and no message.
pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Envelope<Vec<T>>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            status_code: StatusCode::OK.as_u16(),
            message: Vec::new(),
            data: Some(data),
        }),
    )
}

/// 201 with the created record.
pub fn success_created<T: Serialize>(message: String, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::CREATED,
        Json(Envelope {
            status_code: StatusCode::CREATED.as_u16(),
            message: vec![message],
            data: Some(data),
        }),
    )
}

/// 200 with the updated record.
pub fn success_updated<T: Serialize>(message: String, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            status_code: StatusCode::OK.as_u16(),
            message: vec![message],
            data: Some(data),
        }),
    )
}

/// 200 with a message only; no data key at all.
pub fn success_deleted(message: String) -> (StatusCode, Json<Envelope>) {
    (
        StatusCode::OK,
        Json(Envelope {
            status_code: StatusCode::OK.as_u16(),
            message: vec![message],
            data: None,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleted_envelope_omits_data() {
        let (_, Json(body)) = success_deleted("gone".into());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["message"], serde_json::json!(["gone"]));
        assert!(json.get("data").is_none());
    }

    #[test]
    fn list_envelope_has_empty_message() {
        let (status, Json(body)) = success_many(vec![1, 2, 3]);
        assert_eq!(status, StatusCode::OK);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], serde_json::json!([]));
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }
}
