use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// One failed constraint on a request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field path, dotted for nested objects (`front.text`)
    pub property: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed for {} field(s).", .0.len())]
    Validation(Vec<FieldError>),
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),
    #[error("{entity} with id {id} not found.")]
    NotFound { entity: &'static str, id: i32 },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub const fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BadRequestBody<'a> {
    code: &'static str,
    message: String,
    field_errors: &'a [FieldError],
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Validation(field_errors) => {
                tracing::debug!(?field_errors, "Request validation failed");
                let body = BadRequestBody {
                    code: "VALIDATION_FAILED",
                    message: self.to_string(),
                    field_errors,
                };
                (status, Json(body)).into_response()
            }
            Self::MalformedRequest(_) => {
                tracing::debug!("{self}");
                let body = BadRequestBody {
                    code: "MALFORMED_REQUEST",
                    message: self.to_string(),
                    field_errors: &[],
                };
                (status, Json(body)).into_response()
            }
            Self::NotFound { .. } => {
                let body = MessageBody {
                    message: self.to_string(),
                };
                (status, Json(body)).into_response()
            }
            Self::Database(e) => {
                tracing::error!("Database error: {e}");
                let body = MessageBody {
                    message: "Internal server error".to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ApiError::not_found("Flashcard", 50).to_string(),
            "Flashcard with id 50 not found."
        );
        assert_eq!(
            ApiError::not_found("Deck group", 12).to_string(),
            "Deck group with id 12 not found."
        );
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ApiError::not_found("Deck", 7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "message": "Deck with id 7 not found." }));
    }

    #[tokio::test]
    async fn test_validation_response() {
        let response = ApiError::Validation(vec![
            FieldError {
                property: "deckGroupId".to_string(),
                message: "The deck group ID should be positive number.".to_string(),
            },
            FieldError {
                property: "name".to_string(),
                message: "The deck name is required.".to_string(),
            },
        ])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert!(json["message"].as_str().unwrap().contains("Validation failed"));
        assert_eq!(json["fieldErrors"][0]["property"], "deckGroupId");
        assert_eq!(json["fieldErrors"][1]["message"], "The deck name is required.");
    }

    #[tokio::test]
    async fn test_database_error_is_opaque() {
        let response = ApiError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Internal server error");
    }
}
