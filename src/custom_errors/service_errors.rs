use crate::custom_errors::api_errors::ApiError;
use axum::http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum ServiceError {
    Api(ApiError),
    EmptyField(&'static str),
    InvalidPlayerId(String),
    /// The mutation went through; only the roster re-fetch after it failed.
    RefreshFailed {
        done: &'static str,
        source: ApiError,
    },
}

impl ServiceError {
    /// Text shown to the user in the page notice.
    pub fn error_message(&self) -> String {
        match self {
            Self::Api(ApiError::Network(_)) => "Could not reach the roster server".to_string(),
            Self::Api(err) if err.is_not_found() => "That player is not on the roster".to_string(),
            Self::Api(ApiError::Rejected(message)) => format!("The roster server refused: {message}"),
            Self::Api(_) => "The roster server sent an unexpected response".to_string(),
            Self::EmptyField(field) => format!("Please fill in the {field} field"),
            Self::InvalidPlayerId(raw) => format!("\"{raw}\" is not a player id"),
            Self::RefreshFailed { done, .. } => {
                format!("{done}, but the roster could not be reloaded")
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Api(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Api(_) => StatusCode::BAD_GATEWAY,
            Self::EmptyField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidPlayerId(_) => StatusCode::BAD_REQUEST,
            Self::RefreshFailed { .. } => StatusCode::OK,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Api(err) => write!(f, "{err}"),
            Self::EmptyField(field) => write!(f, "empty field {field}"),
            Self::InvalidPlayerId(raw) => write!(f, "invalid player id {raw:?}"),
            Self::RefreshFailed { done, source } => {
                write!(f, "{done}; roster refresh failed: {source}")
            }
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        ServiceError::Api(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_failure_kind() {
        let missing = ServiceError::from(ApiError::Server {
            status: StatusCode::NOT_FOUND,
            message: None,
        });
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.error_message(), "That player is not on the roster");

        let rejected = ServiceError::from(ApiError::Rejected("cohort full".to_string()));
        assert_eq!(rejected.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(rejected.error_message(), "The roster server refused: cohort full");

        let blank = ServiceError::EmptyField("breed");
        assert_eq!(blank.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(blank.error_message(), "Please fill in the breed field");
    }

    #[test]
    fn bad_id_and_partial_success_have_their_own_notices() {
        let bad_id = ServiceError::InvalidPlayerId("abc".to_string());
        assert_eq!(bad_id.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(bad_id.error_message(), "\"abc\" is not a player id");

        let stale = ServiceError::RefreshFailed {
            done: "Player removed",
            source: ApiError::MissingData,
        };
        assert_eq!(stale.status_code(), StatusCode::OK);
        assert_eq!(
            stale.error_message(),
            "Player removed, but the roster could not be reloaded"
        );
        assert!(stale.to_string().contains("roster refresh failed"));
    }

    #[test]
    fn envelope_failures_are_bad_gateway() {
        let empty = ServiceError::from(ApiError::MissingData);
        assert_eq!(empty.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            empty.error_message(),
            "The roster server sent an unexpected response"
        );
    }
}
