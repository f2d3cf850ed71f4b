use actix_web::{
    error::JsonPayloadError, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError,
};
use application::error::{AppError, ErrorKind};
use application::query::QueryError;
use log::{error, warn};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Command(#[from] AppError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Command(e) => e.kind(),
            ApiError::Query(e) => e.kind(),
            ApiError::InvalidBody(_) => ErrorKind::InvalidInput,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let status = self.status_code();
        // 服务端错误只记录日志，不把数据库细节返回给客户端
        let message = if status.is_server_error() {
            error!("request failed: {}", self);
            "Internal server error".to_string()
        } else {
            warn!("request rejected ({}): {}", status.as_u16(), self);
            self.to_string()
        };
        HttpResponse::build(status).json(ErrorResponse { error: message })
    }
}

/// JSON body extractor config: malformed or incomplete bodies become a 400 with a JSON error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        ApiError::InvalidBody(err.to_string()).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use domain::like::LikeError;
    use domain::value::{PostId, UserId};

    fn like_error(err: LikeError) -> ApiError {
        ApiError::from(AppError::from(err))
    }

    #[test]
    fn test_status_mapping() {
        let user_id = UserId::parse("u1").unwrap();
        let post_id = PostId::parse("p1").unwrap();

        let err = like_error(LikeError::Conflict {
            user_id: user_id.clone(),
            post_id: post_id.clone(),
        });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err = like_error(LikeError::LikeNotFound {
            user_id,
            post_id: post_id.clone(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = like_error(LikeError::StatsNotFound(post_id));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = like_error(LikeError::Validation("userId must not be empty".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(QueryError::DbError("connection reset".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::InvalidBody("missing field `postId`".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_server_error_body_hides_details() {
        let err = like_error(LikeError::DbErr("password authentication failed".into()));
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal server error");
    }
}
