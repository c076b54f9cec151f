//! HTTP endpoint handlers. These are thin wrappers that forward to the store
//! and the core selection logic. Each handler is instrumented; logs include
//! parameters and basic result info.

use std::collections::HashSet;
use std::sync::Arc;
use axum::{
  extract::{Path, Query, State},
  Json,
};
use tracing::{info, instrument};

use crate::domain::ALL_CATEGORIES;
use crate::error::ApiError;
use crate::logic::{paginate, pick_next};
use crate::protocol::*;
use crate::store::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info")]
pub async fn http_health() -> Json<HealthOut> {
  Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_categories(
  State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesOut>, ApiError> {
  let categories = state.categories_map().await;
  if categories.is_empty() {
    return Err(ApiError::NotFound);
  }
  Ok(Json(CategoriesOut { success: true, categories }))
}

#[instrument(level = "info", skip(state), fields(page = q.page.unwrap_or(1)))]
pub async fn http_get_questions(
  State(state): State<Arc<AppState>>,
  Query(q): Query<PageQuery>,
) -> Result<Json<QuestionListOut>, ApiError> {
  let page = q.page.unwrap_or(1);
  let questions = state.all_questions().await;
  let total_questions = questions.len();
  let current = paginate(&questions, page);
  // An empty page reads as a missing resource, matching the frontend's
  // pager expectations.
  if current.is_empty() {
    return Err(ApiError::NotFound);
  }
  let categories = state.categories_map().await;
  info!(target: "questions", page, served = current.len(), total = total_questions, "Question page served");
  Ok(Json(QuestionListOut {
    success: true,
    questions: current.iter().map(to_out).collect(),
    total_questions,
    categories,
  }))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_question(
  State(state): State<Arc<AppState>>,
  Json(body): Json<CreateQuestionIn>,
) -> Result<Json<CreateQuestionOut>, ApiError> {
  let new = body.into_new().ok_or(ApiError::Unprocessable)?;
  let created = state.insert_question(new).await;
  let questions = state.all_questions().await;
  let total_questions = questions.len();
  // The listing view refreshes from its first page after a create.
  let current = paginate(&questions, 1);
  info!(target: "questions", id = created.id, category = created.category, "Question created");
  Ok(Json(CreateQuestionOut {
    success: true,
    created: created.id,
    question_created: created.question.clone(),
    questions: current.iter().map(to_out).collect(),
    total_questions,
  }))
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_delete_question(
  State(state): State<Arc<AppState>>,
  Path(id): Path<u32>,
) -> Result<Json<DeleteQuestionOut>, ApiError> {
  let removed = state.delete_question(id).await.ok_or(ApiError::NotFound)?;
  info!(target: "questions", id = removed.id, "Question deleted");
  Ok(Json(DeleteQuestionOut { success: true, deleted: removed.id }))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_search_questions(
  State(state): State<Arc<AppState>>,
  Query(q): Query<PageQuery>,
  Json(body): Json<SearchIn>,
) -> Result<Json<SearchOut>, ApiError> {
  let term = body.search_term.ok_or(ApiError::Unprocessable)?;
  let matches = state.search_questions(&term).await;
  if matches.is_empty() {
    return Err(ApiError::NotFound);
  }
  let total_questions = state.total_questions().await;
  let current = paginate(&matches, q.page.unwrap_or(1));
  info!(target: "questions", term = %trunc_for_log(&term, 80), matched = matches.len(), "Search served");
  Ok(Json(SearchOut {
    success: true,
    questions: current.iter().map(to_out).collect(),
    total_questions,
  }))
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_category_questions(
  State(state): State<Arc<AppState>>,
  Path(id): Path<u32>,
  Query(q): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsOut>, ApiError> {
  let category = state.get_category(id).await.ok_or(ApiError::NotFound)?;
  let questions = state.questions_in_category(id).await;
  let total_questions = state.total_questions().await;
  let current = paginate(&questions, q.page.unwrap_or(1));
  info!(target: "questions", category = %category.kind, served = current.len(), "Category listing served");
  Ok(Json(CategoryQuestionsOut {
    success: true,
    questions: current.iter().map(to_out).collect(),
    total_questions,
    current_category: category.kind,
  }))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_quiz(
  State(state): State<Arc<AppState>>,
  Json(body): Json<QuizIn>,
) -> Result<Json<QuizOut>, ApiError> {
  // Both parameters must be present; the frontend always sends them.
  let previous: HashSet<u32> = body.previous_questions.ok_or(ApiError::BadRequest)?;
  let selector = body.quiz_category.ok_or(ApiError::BadRequest)?;

  let pool = if selector.id == ALL_CATEGORIES {
    state.all_questions().await
  } else {
    state.questions_in_category(selector.id).await
  };

  let picked = pick_next(&pool, &previous);
  match picked {
    Some(q) => {
      info!(target: "quiz", category = selector.id, chosen = q.id, pool = pool.len(), seen = previous.len(), "Quiz question served")
    }
    None => {
      info!(target: "quiz", category = selector.id, pool = pool.len(), seen = previous.len(), "Quiz exhausted")
    }
  }
  Ok(Json(QuizOut { success: true, question: picked.map(to_out) }))
}
