//! Seed data: default categories and a starter question bank.

use crate::domain::{Category, NewQuestion};

/// The six default categories. Always present so category listings and the
/// quiz selector work without any external config.
pub fn seed_categories() -> Vec<Category> {
  [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
  ]
  .into_iter()
  .map(|(id, kind)| Category { id, kind: kind.to_string() })
  .collect()
}

/// Starter questions covering every default category, so listing, search and
/// quiz play are useful on a fresh start.
pub fn seed_questions() -> Vec<NewQuestion> {
  let rows: [(&str, &str, u32, u32); 12] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
  ];

  rows
    .into_iter()
    .map(|(question, answer, category, difficulty)| NewQuestion {
      question: question.to_string(),
      answer: answer.to_string(),
      category,
      difficulty,
    })
    .collect()
}
