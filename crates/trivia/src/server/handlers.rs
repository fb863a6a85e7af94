//! Request handlers. Each one extracts its inputs, takes the API lock for the
//! duration of one synchronous call and wraps the result in [`Success`].

use super::error::ApiError;
use super::SharedApi;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use std::sync::MutexGuard;
use triviaapp::api::TriviaApi;
use triviaapp::commands::{
    CategoryList, CategoryQuestions, Deleted, QuestionDetail, QuestionPage, QuizResult, Success,
};
use triviaapp::error::{ErrorKind, TriviaError};
use triviaapp::model::{QuestionDraft, QuizRequest};
use triviaapp::store::DataStore;

type ApiResult<T> = Result<Json<Success<T>>, ApiError>;

/// `?page=N`. Kept as text so that a non-integer value falls back to page 1
/// instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

fn lock<S: DataStore>(state: &SharedApi<S>) -> Result<MutexGuard<'_, TriviaApi<S>>, ApiError> {
    state
        .lock()
        .map_err(|_| ApiError::from(TriviaError::Store("api lock poisoned".into())))
}

fn ok<T>(body: T) -> ApiResult<T> {
    Ok(Json(Success::new(body)))
}

/// Non-integer path ids never match a resource.
fn path_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|_| ApiError::Kind(ErrorKind::NotFound))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|_| ApiError::Kind(ErrorKind::BadRequest))
}

pub async fn categories<S: DataStore>(State(state): State<SharedApi<S>>) -> ApiResult<CategoryList> {
    ok(lock(&state)?.categories()?)
}

pub async fn list_questions<S: DataStore>(
    State(state): State<SharedApi<S>>,
    Query(params): Query<PageParams>,
) -> ApiResult<QuestionPage> {
    ok(lock(&state)?.questions(params.page.as_deref())?)
}

pub async fn get_question<S: DataStore>(
    State(state): State<SharedApi<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<QuestionDetail> {
    let id = path_id(id)?;
    ok(lock(&state)?.question(id)?)
}

/// `POST /questions` searches when the body has a non-empty `searchTerm` and
/// creates a question otherwise. The two modes answer with different shapes.
pub async fn post_questions<S: DataStore>(
    State(state): State<SharedApi<S>>,
    Query(params): Query<PageParams>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = json_body(body)?;
    if !body.is_object() {
        return Err(ApiError::Kind(ErrorKind::BadRequest));
    }
    let page = params.page.as_deref();

    let search_term = match body.get("searchTerm") {
        Some(Value::String(term)) if !term.is_empty() => Some(term.clone()),
        None | Some(Value::Null) | Some(Value::String(_)) => None,
        Some(_) => return Err(ApiError::Kind(ErrorKind::BadRequest)),
    };

    let reply = match search_term {
        Some(term) => {
            let found = lock(&state)?.search(&term, page)?;
            serde_json::to_value(Success::new(found))
        }
        None => {
            let draft: QuestionDraft = serde_json::from_value(body)
                .map_err(|_| ApiError::Kind(ErrorKind::BadRequest))?;
            let created = lock(&state)?.create_question(draft, page)?;
            serde_json::to_value(Success::new(created))
        }
    };
    Ok(Json(reply.map_err(TriviaError::from)?))
}

pub async fn delete_question<S: DataStore>(
    State(state): State<SharedApi<S>>,
    id: Result<Path<i64>, PathRejection>,
    Query(params): Query<PageParams>,
) -> ApiResult<Deleted> {
    let id = path_id(id)?;
    ok(lock(&state)?.delete_question(id, params.page.as_deref())?)
}

pub async fn questions_by_category<S: DataStore>(
    State(state): State<SharedApi<S>>,
    id: Result<Path<i64>, PathRejection>,
    Query(params): Query<PageParams>,
) -> ApiResult<CategoryQuestions> {
    let id = path_id(id)?;
    ok(lock(&state)?.questions_by_category(id, params.page.as_deref())?)
}

pub async fn play_quiz<S: DataStore>(
    State(state): State<SharedApi<S>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<QuizResult> {
    let request = json_body(body)?;
    ok(lock(&state)?.play_quiz(&request)?)
}

pub async fn not_found() -> ApiError {
    ApiError::Kind(ErrorKind::NotFound)
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::Kind(ErrorKind::MethodNotAllowed)
}
