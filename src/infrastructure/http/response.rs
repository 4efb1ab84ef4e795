use serde::Serialize;

use crate::domain::entities::FieldError;

/// JSON envelope shared by every `/api` response.
///
/// `{"data": .., "result": "ok"}` on reads, `{"result": "created"}` style on
/// writes and `{"result": "error", "error": ..}` on failures.
#[derive(Debug, Serialize)]
pub struct BaseResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Message(String),
    Fields(Vec<FieldError>),
}

impl<T: Serialize> BaseResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            result: "ok",
            error: None,
        }
    }
}

impl BaseResponse<()> {
    pub fn result(result: &'static str) -> Self {
        Self {
            data: None,
            result,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            result: "error",
            error: Some(ErrorBody::Message(message.into())),
        }
    }

    pub fn errors(fields: Vec<FieldError>) -> Self {
        Self {
            data: None,
            result: "errors",
            error: Some(ErrorBody::Fields(fields)),
        }
    }
}
