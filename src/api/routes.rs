//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::application::cast_member::{
    CastMemberListOutput, CastMemberOutput, CreateCastMemberCommand, CreateCastMemberUseCase,
    DeleteCastMemberUseCase, GetCastMemberByIdUseCase, ListCastMembersUseCase,
    UpdateCastMemberCommand, UpdateCastMemberOutput, UpdateCastMemberUseCase,
};
use crate::application::category::{
    CategoryListOutput, CategoryOutput, CreateCategoryCommand, CreateCategoryUseCase,
    DeleteCategoryUseCase, GetCategoryByIdUseCase, ListCategoriesUseCase, UpdateCategoryCommand,
    UpdateCategoryOutput, UpdateCategoryUseCase,
};
use crate::application::genre::{
    CreateGenreCommand, CreateGenreUseCase, DeleteGenreUseCase, GenreListOutput, GenreOutput,
    GetGenreByIdUseCase, ListGenresUseCase, UpdateGenreCommand, UpdateGenreOutput,
    UpdateGenreUseCase,
};
use crate::domain::{CastMemberType, Pagination, SearchQuery, SortDirection};
use crate::error::{AppError, AppResult};

use super::state::AppState;

// =========================================================================
// Request types
// =========================================================================

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenreRequest {
    pub name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub categories_id: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CastMemberRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CastMemberType>,
}

/// Query string of every list endpoint
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_per_page", rename = "perPage")]
    pub per_page: u32,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default)]
    pub dir: Option<String>,
}

fn default_per_page() -> u32 {
    10
}

fn default_sort() -> String {
    "name".to_string()
}

impl ListParams {
    pub fn into_query(self) -> AppResult<SearchQuery> {
        let direction = match self.dir.as_deref() {
            Some(dir) => dir.parse().map_err(AppError::InvalidRequest)?,
            None => SortDirection::default(),
        };
        Ok(SearchQuery::new(
            self.page,
            self.per_page,
            self.search,
            self.sort,
            direction,
        ))
    }
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))
}

fn search_query(params: Result<Query<ListParams>, QueryRejection>) -> AppResult<SearchQuery> {
    let Query(params) = params.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    params.into_query()
}

fn created<T: serde::Serialize>(location: String, body: T) -> impl IntoResponse {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body))
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/genres", get(list_genres).post(create_genre))
        .route(
            "/genres/:id",
            get(get_genre).put(update_genre).delete(delete_genre),
        )
        .route("/cast_members", get(list_cast_members).post(create_cast_member))
        .route(
            "/cast_members/:id",
            get(get_cast_member)
                .put(update_cast_member)
                .delete(delete_cast_member),
        )
}

// =========================================================================
// /categories
// =========================================================================

async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let request = json_body(payload)?;
    let command = CreateCategoryCommand::new(request.name, request.description, request.is_active);

    let output = CreateCategoryUseCase::new(state.categories)
        .execute(command)
        .await?;

    Ok(created(format!("/api/v1/categories/{}", output.id), output))
}

async fn list_categories(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<Json<Pagination<CategoryListOutput>>> {
    let query = search_query(params)?;
    let page = ListCategoriesUseCase::new(state.categories).execute(query).await?;
    Ok(Json(page))
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CategoryOutput>> {
    let output = GetCategoryByIdUseCase::new(state.categories).execute(&id).await?;
    Ok(Json(output))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> AppResult<Json<UpdateCategoryOutput>> {
    let request = json_body(payload)?;
    let command =
        UpdateCategoryCommand::new(id, request.name, request.description, request.is_active);

    let output = UpdateCategoryUseCase::new(state.categories)
        .execute(command)
        .await?;
    Ok(Json(output))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    DeleteCategoryUseCase::new(state.categories).execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// /genres
// =========================================================================

async fn create_genre(
    State(state): State<AppState>,
    payload: Result<Json<GenreRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let request = json_body(payload)?;
    let command = CreateGenreCommand::new(request.name, request.is_active, request.categories_id);

    let output = CreateGenreUseCase::new(state.categories, state.genres)
        .execute(command)
        .await?;

    Ok(created(format!("/api/v1/genres/{}", output.id), output))
}

async fn list_genres(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<Json<Pagination<GenreListOutput>>> {
    let query = search_query(params)?;
    let page = ListGenresUseCase::new(state.genres).execute(query).await?;
    Ok(Json(page))
}

async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<GenreOutput>> {
    let output = GetGenreByIdUseCase::new(state.genres).execute(&id).await?;
    Ok(Json(output))
}

async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<GenreRequest>, JsonRejection>,
) -> AppResult<Json<UpdateGenreOutput>> {
    let request = json_body(payload)?;
    let command =
        UpdateGenreCommand::new(id, request.name, request.is_active, request.categories_id);

    let output = UpdateGenreUseCase::new(state.categories, state.genres)
        .execute(command)
        .await?;
    Ok(Json(output))
}

async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    DeleteGenreUseCase::new(state.genres).execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// /cast_members
// =========================================================================

async fn create_cast_member(
    State(state): State<AppState>,
    payload: Result<Json<CastMemberRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let request = json_body(payload)?;
    let command = CreateCastMemberCommand::new(request.name, request.kind);

    let output = CreateCastMemberUseCase::new(state.cast_members)
        .execute(command)
        .await?;

    Ok(created(format!("/api/v1/cast_members/{}", output.id), output))
}

async fn list_cast_members(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<Json<Pagination<CastMemberListOutput>>> {
    let query = search_query(params)?;
    let page = ListCastMembersUseCase::new(state.cast_members)
        .execute(query)
        .await?;
    Ok(Json(page))
}

async fn get_cast_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CastMemberOutput>> {
    let output = GetCastMemberByIdUseCase::new(state.cast_members)
        .execute(&id)
        .await?;
    Ok(Json(output))
}

async fn update_cast_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CastMemberRequest>, JsonRejection>,
) -> AppResult<Json<UpdateCastMemberOutput>> {
    let request = json_body(payload)?;
    let command = UpdateCastMemberCommand::new(id, request.name, request.kind);

    let output = UpdateCastMemberUseCase::new(state.cast_members)
        .execute(command)
        .await?;
    Ok(Json(output))
}

async fn delete_cast_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    DeleteCastMemberUseCase::new(state.cast_members)
        .execute(&id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
