//! Core selection logic: question-list pagination and quiz picking.
//!
//! Both functions are pure. They operate on snapshots the caller passes in
//! and keep nothing between calls; quiz session history (`previous`) is
//! owned by the client and arrives with every request.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::domain::Question;

/// Fixed page size for every paginated question listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Return the 1-based `page` window over `items`.
///
/// Pages beyond the end yield an empty slice, never an error; whether an
/// empty page means "not found" is the route layer's call.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
  let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
  if start >= items.len() {
    return &[];
  }
  let end = usize::min(start + QUESTIONS_PER_PAGE, items.len());
  &items[start..end]
}

/// Pick one question from `pool` whose id is not in `previous`, uniformly at
/// random among the eligible candidates. `None` means the pool is exhausted:
/// the quiz session is complete, which is a normal outcome.
///
/// Filtering before sampling keeps the draw uniform over the questions that
/// are still unseen and terminates even when nothing is left to serve.
pub fn pick_next<'a>(pool: &'a [Question], previous: &HashSet<u32>) -> Option<&'a Question> {
  let eligible: Vec<&Question> = pool
    .iter()
    .filter(|q| !previous.contains(&q.id))
    .collect();
  let mut rng = rand::thread_rng();
  eligible.choose(&mut rng).copied()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn question(id: u32) -> Question {
    Question {
      id,
      question: format!("Question {id}?"),
      answer: format!("Answer {id}"),
      category: 1,
      difficulty: 1,
    }
  }

  fn bank(ids: std::ops::RangeInclusive<u32>) -> Vec<Question> {
    ids.map(question).collect()
  }

  #[test]
  fn first_page_holds_the_first_ten() {
    let items = bank(1..=23);
    let page = paginate(&items, 1);
    assert_eq!(page.len(), QUESTIONS_PER_PAGE);
    assert_eq!(page[0].id, 1);
    assert_eq!(page[9].id, 10);
  }

  #[test]
  fn last_partial_page_is_clipped() {
    let items = bank(1..=23);
    let ids: Vec<u32> = paginate(&items, 3).iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![21, 22, 23]);
  }

  #[test]
  fn pages_beyond_the_end_are_empty() {
    let items = bank(1..=23);
    assert!(paginate(&items, 4).is_empty());
    assert!(paginate(&items, 5).is_empty());
    assert!(paginate::<Question>(&[], 1).is_empty());
  }

  #[test]
  fn no_page_exceeds_the_fixed_size() {
    let items = bank(1..=57);
    for page in 1..=8 {
      assert!(paginate(&items, page).len() <= QUESTIONS_PER_PAGE);
    }
  }

  #[test]
  fn pages_tile_the_list_without_overlap() {
    let items = bank(1..=23);
    let mut seen: Vec<u32> = (1..=3)
      .flat_map(|p| paginate(&items, p).iter().map(|q| q.id))
      .collect();
    seen.dedup();
    assert_eq!(seen, (1..=23).collect::<Vec<u32>>());
  }

  #[test]
  fn pick_stays_inside_pool_and_outside_history() {
    let pool = bank(1..=5);
    let previous = HashSet::from([2, 4]);
    for _ in 0..50 {
      let q = pick_next(&pool, &previous).expect("eligible questions remain");
      assert!(pool.iter().any(|p| p.id == q.id));
      assert!(!previous.contains(&q.id));
    }
  }

  #[test]
  fn single_unseen_question_is_picked_deterministically() {
    let pool = bank(1..=3);
    let previous = HashSet::from([1, 2]);
    for _ in 0..20 {
      assert_eq!(pick_next(&pool, &previous).map(|q| q.id), Some(3));
    }
  }

  #[test]
  fn fully_seen_pool_is_exhausted() {
    let pool = bank(5..=6);
    let previous = HashSet::from([5, 6]);
    assert!(pick_next(&pool, &previous).is_none());
  }

  #[test]
  fn empty_pool_is_exhausted_immediately() {
    assert!(pick_next(&[], &HashSet::new()).is_none());
  }

  #[test]
  fn empty_history_makes_the_whole_pool_eligible() {
    let pool = bank(7..=9);
    let q = pick_next(&pool, &HashSet::new()).expect("pool is non-empty");
    assert!(pool.iter().any(|p| p.id == q.id));
  }

  #[test]
  fn growing_history_serves_each_question_once_then_exhausts() {
    let pool = bank(1..=4);
    let mut previous = HashSet::new();
    for _ in 0..pool.len() {
      let q = pick_next(&pool, &previous).expect("eligible questions remain");
      assert!(previous.insert(q.id), "question repeated within a session");
    }
    assert!(pick_next(&pool, &previous).is_none());
  }
}
