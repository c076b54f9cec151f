//! Domain models used by the backend: trivia questions and their categories.

use serde::{Deserialize, Serialize};

/// Quiz category selector id meaning "no category filter".
pub const ALL_CATEGORIES: u32 = 0;

/// A trivia question as stored and served. The id is assigned by the store
/// on insert; records are replaced or deleted whole, never edited in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
  pub id: u32,
  pub question: String,
  pub answer: String,
  pub category: u32,   // id of a Category
  pub difficulty: u32, // small positive integer
}

/// A question category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
  pub id: u32,
  #[serde(rename = "type")]
  pub kind: String,
}

/// Creation payload for a question: everything but the store-assigned id.
#[derive(Clone, Debug)]
pub struct NewQuestion {
  pub question: String,
  pub answer: String,
  pub category: u32,
  pub difficulty: u32,
}
