//! Match configuration.
//!
//! A match is described by:
//! - `GameMode`: who controls each side
//! - `MatchSettings`: mode, board size and an optional seed for every engine
//!
//! `MatchSettings::from_env` reads `SOS_SEED` and `SOS_BOARD_SIZE` so a
//! session can be replayed exactly.

use std::env;

use tracing::warn;

use crate::board::BOARD_SIZE;
use crate::engine::{Difficulty, SearchConfig};
use crate::rules::Side;

/// Smallest board the app offers. Below 3 no sequence fits.
pub const MIN_APP_BOARD_SIZE: usize = 3;
/// Largest board the app offers. Search cost grows quickly with size.
pub const MAX_APP_BOARD_SIZE: usize = 9;

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the screen
    HumanVsHuman,
    /// Human moves first, AI second
    HumanVsAi { difficulty: Difficulty },
    /// Easy AI (first) against Hard AI (second)
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAi {
            difficulty: Difficulty::Easy,
        }
    }
}

impl GameMode {
    /// Engine settings for `side`, `None` if a human plays it
    pub fn ai_config(self, side: Side) -> Option<SearchConfig> {
        match (self, side) {
            (GameMode::HumanVsHuman, _) => None,
            (GameMode::HumanVsAi { .. }, Side::First) => None,
            (GameMode::HumanVsAi { difficulty }, Side::Second) => Some(difficulty.config()),
            (GameMode::AiVsAi, Side::First) => Some(Difficulty::Easy.config()),
            (GameMode::AiVsAi, Side::Second) => Some(Difficulty::Hard.config()),
        }
    }

    #[inline]
    pub fn is_human(self, side: Side) -> bool {
        self.ai_config(side).is_none()
    }

    /// Display names for both sides
    pub fn player_names(self) -> (&'static str, &'static str) {
        match self {
            GameMode::HumanVsHuman => ("Player 1", "Player 2"),
            GameMode::HumanVsAi { .. } => ("Player", "AI"),
            GameMode::AiVsAi => ("AI1", "AI2"),
        }
    }

    pub fn label(self) -> String {
        match self {
            GameMode::HumanVsHuman => "Human vs Human".to_string(),
            GameMode::HumanVsAi { difficulty } => format!("Human vs AI ({})", difficulty.label()),
            GameMode::AiVsAi => "AI vs AI".to_string(),
        }
    }
}

/// Everything needed to start a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    pub mode: GameMode,
    pub board_size: usize,
    /// Seed shared by every engine of the match; `None` for fresh entropy
    pub seed: Option<u64>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            board_size: BOARD_SIZE,
            seed: None,
        }
    }
}

impl MatchSettings {
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size.clamp(MIN_APP_BOARD_SIZE, MAX_APP_BOARD_SIZE);
        self
    }

    /// Defaults overridden by `SOS_SEED` and `SOS_BOARD_SIZE`
    pub fn from_env() -> Self {
        Self::from_vars(env::var("SOS_SEED").ok(), env::var("SOS_BOARD_SIZE").ok())
    }

    fn from_vars(seed: Option<String>, board_size: Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(seed) => settings = settings.with_seed(seed),
                Err(err) => warn!(value = %raw, error = %err, "ignoring SOS_SEED"),
            }
        }
        if let Some(raw) = board_size {
            match raw.trim().parse::<usize>() {
                Ok(size) => settings = settings.with_board_size(size),
                Err(err) => warn!(value = %raw, error = %err, "ignoring SOS_BOARD_SIZE"),
            }
        }
        settings
    }

    /// Engine config for `side`, with the match seed applied
    pub fn engine_config(&self, side: Side) -> Option<SearchConfig> {
        let config = self.mode.ai_config(side)?;
        Some(match self.seed {
            // Offset so the two engines of an AI vs AI match draw different streams
            Some(seed) => config.with_seed(seed.wrapping_add(side as u64)),
            None => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Heuristic;

    #[test]
    fn test_default_settings() {
        let settings = MatchSettings::default();
        assert_eq!(settings.board_size, 5);
        assert_eq!(settings.seed, None);
        assert_eq!(
            settings.mode,
            GameMode::HumanVsAi { difficulty: Difficulty::Easy }
        );
    }

    #[test]
    fn test_ai_config_per_mode() {
        assert!(GameMode::HumanVsHuman.is_human(Side::First));
        assert!(GameMode::HumanVsHuman.is_human(Side::Second));

        let hard = GameMode::HumanVsAi { difficulty: Difficulty::Hard };
        assert!(hard.is_human(Side::First));
        assert_eq!(
            hard.ai_config(Side::Second).map(|c| c.heuristic),
            Some(Heuristic::OPenalty)
        );

        assert_eq!(
            GameMode::AiVsAi.ai_config(Side::First).map(|c| c.heuristic),
            Some(Heuristic::SequenceCount)
        );
        assert_eq!(
            GameMode::AiVsAi.ai_config(Side::Second).map(|c| c.heuristic),
            Some(Heuristic::OPenalty)
        );
    }

    #[test]
    fn test_from_vars() {
        let settings = MatchSettings::from_vars(Some("42".into()), Some("7".into()));
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.board_size, 7);

        let settings = MatchSettings::from_vars(Some("nope".into()), Some("100".into()));
        assert_eq!(settings.seed, None);
        assert_eq!(settings.board_size, MAX_APP_BOARD_SIZE);

        let settings = MatchSettings::from_vars(None, Some("x".into()));
        assert_eq!(settings.board_size, BOARD_SIZE);
    }

    #[test]
    fn test_engine_config_seeds_sides_differently() {
        let settings = MatchSettings::default()
            .with_mode(GameMode::AiVsAi)
            .with_seed(10);
        assert_eq!(settings.engine_config(Side::First).unwrap().seed, Some(10));
        assert_eq!(settings.engine_config(Side::Second).unwrap().seed, Some(11));

        let human = MatchSettings::default().with_mode(GameMode::HumanVsHuman);
        assert!(human.engine_config(Side::First).is_none());
    }
}
