use crate::error::ApiError;
use crate::AppState;
use actix_web::{web, HttpResponse};
use application::command::like::{LikeCmd, LikeService, UnlikeCmd};
use application::query::get_like_count::GetLikeCount;
use application::query::has_user_liked::HasUserLiked;
use infra::repository::postgres::command::like::LikeRepositoryImpl;
use infra::repository::postgres::query::post_stats::PostStatsRepositoryImpl;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub user_id: String,
    pub post_id: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct LikedResponse {
    pub liked: bool,
}

fn like_repository(state: &AppState) -> Arc<LikeRepositoryImpl> {
    Arc::new(LikeRepositoryImpl::new(state.db.clone()))
}

pub async fn like(
    state: web::Data<AppState>,
    body: web::Json<LikeRequest>,
) -> Result<HttpResponse, ApiError> {
    let LikeRequest { user_id, post_id } = body.into_inner();
    LikeService::new(like_repository(&state))
        .add_like(LikeCmd { user_id, post_id })
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Like succeeded".to_string(),
    }))
}

pub async fn unlike(
    state: web::Data<AppState>,
    body: web::Json<LikeRequest>,
) -> Result<HttpResponse, ApiError> {
    let LikeRequest { user_id, post_id } = body.into_inner();
    LikeService::new(like_repository(&state))
        .remove_like(UnlikeCmd { user_id, post_id })
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Unlike succeeded".to_string(),
    }))
}

pub async fn like_count(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<web::Json<CountResponse>, ApiError> {
    let post_id = path.into_inner();
    let count = GetLikeCount::new(Arc::new(PostStatsRepositoryImpl::new(state.db.clone())))
        .handle(&post_id)
        .await?;
    Ok(web::Json(CountResponse { count }))
}

pub async fn has_liked(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<web::Json<LikedResponse>, ApiError> {
    let (user_id, post_id) = path.into_inner();
    let liked = HasUserLiked::new(like_repository(&state))
        .handle(&user_id, &post_id)
        .await?;
    Ok(web::Json(LikedResponse { liked }))
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/like", web::post().to(like))
            .route("/unlike", web::post().to(unlike))
            .route("/like-count/{post_id}", web::get().to(like_count))
            .route("/has-liked/{user_id}/{post_id}", web::get().to(has_liked)),
    );
}
