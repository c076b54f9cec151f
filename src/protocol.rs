//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::{NewQuestion, Question};

/// DTO used for question delivery on every endpoint.
#[derive(Debug, Serialize)]
pub struct QuestionOut {
    pub id: u32,
    pub question: String,
    pub answer: String,
    pub category: u32,
    pub difficulty: u32,
}

/// Convert the internal `Question` to the public DTO.
pub fn to_out(q: &Question) -> QuestionOut {
    QuestionOut {
        id: q.id,
        question: q.question.clone(),
        answer: q.answer.clone(),
        category: q.category,
        difficulty: q.difficulty,
    }
}

//
// HTTP request/response DTOs
//

/// `?page=N` query on listing endpoints; 1 when absent.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
}

#[derive(Serialize)]
pub struct CategoriesOut {
    pub success: bool,
    pub categories: BTreeMap<u32, String>,
}

#[derive(Serialize)]
pub struct QuestionListOut {
    pub success: bool,
    pub questions: Vec<QuestionOut>,
    pub total_questions: usize,
    pub categories: BTreeMap<u32, String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionIn {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<u32>,
}

impl CreateQuestionIn {
    /// All four fields are required; anything missing makes the request
    /// unprocessable.
    pub fn into_new(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            category: self.category?,
            difficulty: self.difficulty?,
        })
    }
}

#[derive(Serialize)]
pub struct CreateQuestionOut {
    pub success: bool,
    pub created: u32,
    pub question_created: String,
    pub questions: Vec<QuestionOut>,
    pub total_questions: usize,
}

#[derive(Serialize)]
pub struct DeleteQuestionOut {
    pub success: bool,
    pub deleted: u32,
}

#[derive(Debug, Deserialize)]
pub struct SearchIn {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Serialize)]
pub struct SearchOut {
    pub success: bool,
    pub questions: Vec<QuestionOut>,
    pub total_questions: usize,
}

#[derive(Serialize)]
pub struct CategoryQuestionsOut {
    pub success: bool,
    pub questions: Vec<QuestionOut>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizIn {
    #[serde(default)]
    pub previous_questions: Option<HashSet<u32>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryIn>,
}

/// Category selector in quiz requests; id 0 means "all categories".
/// The display type tags along from the frontend but only the id matters.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryIn {
    pub id: u32,
    #[allow(dead_code)]
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize)]
pub struct QuizOut {
    pub success: bool,
    /// Absent when the quiz session has exhausted the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionOut>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_request_uses_frontend_field_names() {
        let body = r#"{
            "previous_questions": [7, 17],
            "quiz_category": {"type": "Science", "id": 1}
        }"#;
        let parsed: QuizIn = serde_json::from_str(body).expect("valid body");
        assert_eq!(parsed.previous_questions, Some(HashSet::from([7, 17])));
        let selector = parsed.quiz_category.expect("selector present");
        assert_eq!(selector.id, 1);
        assert_eq!(selector.kind.as_deref(), Some("Science"));
    }

    #[test]
    fn quiz_request_tolerates_missing_fields() {
        let parsed: QuizIn = serde_json::from_str("{}").expect("valid body");
        assert!(parsed.previous_questions.is_none());
        assert!(parsed.quiz_category.is_none());
    }

    #[test]
    fn exhausted_quiz_response_drops_the_question_key() {
        let out = serde_json::to_value(QuizOut { success: true, question: None }).expect("serializes");
        assert_eq!(out, serde_json::json!({"success": true}));
    }

    #[test]
    fn search_term_is_camel_cased_on_the_wire() {
        let parsed: SearchIn = serde_json::from_str(r#"{"searchTerm": "title"}"#).expect("valid body");
        assert_eq!(parsed.search_term.as_deref(), Some("title"));
    }

    #[test]
    fn create_request_requires_all_fields() {
        let full: CreateQuestionIn = serde_json::from_str(
            r#"{"question": "foo?", "answer": "foo!", "category": 1, "difficulty": 1}"#,
        )
        .expect("valid body");
        assert!(full.into_new().is_some());

        let partial: CreateQuestionIn =
            serde_json::from_str(r#"{"question": "foo?"}"#).expect("valid body");
        assert!(partial.into_new().is_none());
    }
}
