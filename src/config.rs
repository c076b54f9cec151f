//! Loading the question bank (categories + questions) from TOML.
//!
//! See `BankConfig` for the expected schema.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::NewQuestion;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct BankConfig {
  #[serde(default)]
  pub categories: Vec<CategoryCfg>,
  #[serde(default)]
  pub questions: Vec<QuestionCfg>,
}

/// Category entry accepted in TOML configuration. The id is optional; the
/// store assigns the next free one when it is omitted.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryCfg {
  #[serde(default)] pub id: Option<u32>,
  #[serde(rename = "type")] pub kind: String,
}

/// Question entry accepted in TOML configuration. All four fields must be
/// present for the row to be usable; incomplete rows are skipped at load.
#[derive(Clone, Debug, Deserialize)]
pub struct QuestionCfg {
  #[serde(default)] pub question: Option<String>,
  #[serde(default)] pub answer: Option<String>,
  #[serde(default)] pub category: Option<u32>,
  #[serde(default)] pub difficulty: Option<u32>,
}

impl QuestionCfg {
  pub fn into_new(self) -> Option<NewQuestion> {
    Some(NewQuestion {
      question: self.question?,
      answer: self.answer?,
      category: self.category?,
      difficulty: self.difficulty?,
    })
  }
}

/// Attempt to load `BankConfig` from TRIVIA_CONFIG_PATH. On any parsing/IO
/// error, returns None.
pub fn load_bank_config_from_env() -> Option<BankConfig> {
  let path = std::env::var("TRIVIA_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<BankConfig>(&s) {
      Ok(cfg) => {
        info!(target: "trivia_backend", %path, "Loaded question bank (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "trivia_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "trivia_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
