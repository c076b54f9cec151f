//! Application state: the in-memory question and category store.
//!
//! This module owns:
//!   - the question map (id-ordered, so listings paginate stably)
//!   - the category map
//!   - question id assignment on insert
//!
//! Seeding policy: TOML bank entries first (if TRIVIA_CONFIG_PATH is set),
//! then the built-in seeds. Bank rows that are incomplete or reference an
//! unknown category are skipped with a log line.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::config::load_bank_config_from_env;
use crate::domain::{Category, NewQuestion, Question};
use crate::seeds::{seed_categories, seed_questions};
use crate::util::contains_ignore_case;

#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<RwLock<BTreeMap<u32, Question>>>,
    pub categories: Arc<RwLock<BTreeMap<u32, Category>>>,
    next_question_id: Arc<RwLock<u32>>,
}

impl AppState {
    /// Build state from env: load the TOML bank if present, merge in the
    /// built-in seeds, and log the startup inventory.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg_opt = load_bank_config_from_env();

        let mut categories = BTreeMap::<u32, Category>::new();
        if let Some(cfg) = &cfg_opt {
            for cc in &cfg.categories {
                let id = cc.id.unwrap_or_else(|| next_free_category_id(&categories));
                if cc.kind.trim().is_empty() {
                    warn!(target: "bank", %id, "Skipping bank category: empty type");
                    continue;
                }
                categories.insert(id, Category { id, kind: cc.kind.clone() });
            }
        }
        // Built-in categories fill the gaps but never overwrite bank entries.
        for c in seed_categories() {
            categories.entry(c.id).or_insert(c);
        }

        let mut bank = Vec::<NewQuestion>::new();
        if let Some(cfg) = &cfg_opt {
            for qc in &cfg.questions {
                match qc.clone().into_new() {
                    Some(n) if categories.contains_key(&n.category) => bank.push(n),
                    Some(n) => {
                        warn!(target: "bank", category = n.category, "Skipping bank question: unknown category");
                    }
                    None => {
                        warn!(target: "bank", "Skipping bank question: missing fields");
                    }
                }
            }
        }
        bank.extend(seed_questions());

        Self::from_bank(categories, bank)
    }

    /// Assemble state from an explicit category map and question bank.
    /// Question ids are assigned in bank order, starting at 1.
    fn from_bank(categories: BTreeMap<u32, Category>, bank: Vec<NewQuestion>) -> Self {
        let mut questions = BTreeMap::<u32, Question>::new();
        let mut next_id = 1u32;
        for n in bank {
            questions.insert(
                next_id,
                Question {
                    id: next_id,
                    question: n.question,
                    answer: n.answer,
                    category: n.category,
                    difficulty: n.difficulty,
                },
            );
            next_id += 1;
        }

        // Inventory summary by category.
        let mut count_by_cat = BTreeMap::<u32, usize>::new();
        for q in questions.values() {
            *count_by_cat.entry(q.category).or_insert(0) += 1;
        }
        for (cat, count) in &count_by_cat {
            let kind = categories.get(cat).map(|c| c.kind.as_str()).unwrap_or("?");
            info!(target: "bank", category = *cat, %kind, questions = *count, "Startup question inventory");
        }

        Self {
            questions: Arc::new(RwLock::new(questions)),
            categories: Arc::new(RwLock::new(categories)),
            next_question_id: Arc::new(RwLock::new(next_id)),
        }
    }

    /// All questions in id order.
    #[instrument(level = "debug", skip(self))]
    pub async fn all_questions(&self) -> Vec<Question> {
        self.questions.read().await.values().cloned().collect()
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_question(&self, id: u32) -> Option<Question> {
        self.questions.read().await.get(&id).cloned()
    }

    /// Insert a new question, assigning the next free id.
    #[instrument(level = "debug", skip(self, new))]
    pub async fn insert_question(&self, new: NewQuestion) -> Question {
        let mut questions = self.questions.write().await;
        let mut next = self.next_question_id.write().await;
        let id = *next;
        *next += 1;
        let q = Question {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        questions.insert(id, q.clone());
        q
    }

    /// Remove a question by id, returning it if it existed.
    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn delete_question(&self, id: u32) -> Option<Question> {
        self.questions.write().await.remove(&id)
    }

    /// Case-insensitive substring search over question text, id order.
    #[instrument(level = "debug", skip(self, term), fields(term_len = term.len()))]
    pub async fn search_questions(&self, term: &str) -> Vec<Question> {
        self.questions
            .read()
            .await
            .values()
            .filter(|q| contains_ignore_case(&q.question, term))
            .cloned()
            .collect()
    }

    /// Questions belonging to one category, id order.
    #[instrument(level = "debug", skip(self), fields(%category))]
    pub async fn questions_in_category(&self, category: u32) -> Vec<Question> {
        self.questions
            .read()
            .await
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect()
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn total_questions(&self) -> usize {
        self.questions.read().await.len()
    }

    /// Category id → display type map for listing responses.
    #[instrument(level = "debug", skip(self))]
    pub async fn categories_map(&self) -> BTreeMap<u32, String> {
        self.categories
            .read()
            .await
            .values()
            .map(|c| (c.id, c.kind.clone()))
            .collect()
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_category(&self, id: u32) -> Option<Category> {
        self.categories.read().await.get(&id).cloned()
    }
}

fn next_free_category_id(categories: &BTreeMap<u32, Category>) -> u32 {
    categories.keys().next_back().map(|max| max + 1).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: u32) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    fn sample_state() -> AppState {
        let categories = seed_categories()
            .into_iter()
            .map(|c| (c.id, c))
            .collect::<BTreeMap<_, _>>();
        let bank = vec![
            new_question("Who discovered penicillin?", 1),
            new_question("What is the largest lake in Africa?", 3),
            new_question("Which planet is closest to the sun?", 1),
        ];
        AppState::from_bank(categories, bank)
    }

    #[tokio::test]
    async fn bank_questions_get_ids_in_order() {
        let state = sample_state();
        let ids: Vec<u32> = state.all_questions().await.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let state = sample_state();
        let a = state.insert_question(new_question("New one?", 2)).await;
        let b = state.insert_question(new_question("New two?", 2)).await;
        assert_eq!(a.id, 4);
        assert_eq!(b.id, 5);
        assert_eq!(state.total_questions().await, 5);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let state = sample_state();
        let removed = state.delete_question(2).await.expect("record exists");
        assert_eq!(removed.id, 2);
        assert!(state.get_question(2).await.is_none());
        assert!(state.delete_question(2).await.is_none());
        assert_eq!(state.total_questions().await, 2);
    }

    #[tokio::test]
    async fn deleted_id_is_not_reused() {
        let state = sample_state();
        state.delete_question(3).await.expect("record exists");
        let q = state.insert_question(new_question("Replacement?", 1)).await;
        assert_eq!(q.id, 4);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let state = sample_state();
        let hits = state.search_questions("LAKE").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "What is the largest lake in Africa?");
        assert!(state.search_questions("no such phrase").await.is_empty());
    }

    #[tokio::test]
    async fn category_filter_only_returns_members() {
        let state = sample_state();
        let science = state.questions_in_category(1).await;
        assert_eq!(science.len(), 2);
        assert!(science.iter().all(|q| q.category == 1));
        assert!(state.questions_in_category(6).await.is_empty());
    }

    #[tokio::test]
    async fn categories_map_uses_display_types() {
        let state = sample_state();
        let map = state.categories_map().await;
        assert_eq!(map.get(&1).map(String::as_str), Some("Science"));
        assert_eq!(map.len(), 6);
    }
}
