use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::{
    dto::auth::{AuthResponse, LoginRequest, SignupRequest, UserPage},
    error::AppResult,
    middleware::auth::AuthUser,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/api/users/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Register user", body = ApiResponse<AuthResponse>),
        (status = 400, description = "Invalid input or email/phone already taken")
    ),
    tag = "Users"
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let resp = auth_service::signup(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "User created",
        resp,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login user", body = ApiResponse<AuthResponse>),
        (status = 400, description = "Invalid credentials")
    ),
    tag = "Users"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let resp = auth_service::login(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Logged in",
        resp,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(Pagination),
    responses(
        (status = 200, description = "Page of users", body = ApiResponse<UserPage>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<UserPage>>> {
    let page = auth_service::list_users(&state, query.window()).await?;
    let meta = Meta::for_page(&page);
    let data = UserPage {
        total_count: page.total_count,
        users: page.items,
    };
    Ok(Json(ApiResponse::success("Users", data, Some(meta))))
}
