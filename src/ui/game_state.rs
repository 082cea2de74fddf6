//! Game state management for the SOS GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::board::{Pos, Symbol};
use crate::config::{GameMode, MatchSettings};
use crate::engine::{AIEngine, MoveResult, SearchConfig};
use crate::eval::find_sequences;
use crate::game::Game;
use crate::rules::{PlayError, Side};

/// Search depth used for hints
const HINT_DEPTH: u8 = 2;

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        /// The engine travels to the worker and back with its result
        receiver: Receiver<(AIEngine, MoveResult)>,
        side: Side,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub settings: MatchSettings,
    /// Symbol the human writes on the next click
    pub selected_symbol: Symbol,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggestion: Option<(Pos, Symbol)>,
    pub message: Option<String>,
    /// One engine slot per side, `None` for human sides
    engines: [Option<AIEngine>; 2],
}

impl GameState {
    pub fn new(settings: MatchSettings) -> Self {
        let (first, second) = settings.mode.player_names();
        info!(mode = %settings.mode.label(), size = settings.board_size, seed = ?settings.seed, "new game");
        Self {
            game: Game::new(settings.board_size, first, second),
            settings,
            selected_symbol: Symbol::S,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggestion: None,
            message: None,
            engines: [
                settings.engine_config(Side::First).map(AIEngine::with_config),
                settings.engine_config(Side::Second).map(AIEngine::with_config),
            ],
        }
    }

    /// Start over with a different mode, keeping size and seed
    pub fn restart(&mut self, mode: GameMode) {
        *self = Self::new(self.settings.with_mode(mode));
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.settings);
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    #[inline]
    fn slot(side: Side) -> usize {
        match side {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        self.mode().is_human(self.game.to_move())
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to write the selected symbol at `pos`
    pub fn try_place(&mut self, pos: Pos) -> Result<u32, PlayError> {
        if self.game.is_over() {
            return Err(PlayError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(PlayError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(PlayError::NotYourTurn);
        }

        let points = self.game.play(pos.row(), pos.col(), self.selected_symbol)?;
        self.after_move();
        Ok(points)
    }

    fn after_move(&mut self) {
        self.suggestion = None;
        self.message = None;
        self.move_timer.stop();
        if !self.game.is_over() {
            self.move_timer.start();
        }
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game.is_over() {
            return;
        }

        let side = self.game.to_move();
        let Some(mut engine) = self.engines[Self::slot(side)].take() else {
            warn!(%side, "no engine for AI side");
            return;
        };
        let mut board = self.game.board().clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.choose_move_with_stats(&mut board);
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            side,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, side, start_time } => match receiver.try_recv() {
                Ok(reply) => Some((reply, *side, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some(((engine, result), side, elapsed)) = received else {
            return;
        };

        self.ai_state = AiState::Idle;
        self.engines[Self::slot(side)] = Some(engine);
        self.move_timer.set_ai_time(elapsed);

        match self.game.apply_result(&result) {
            Ok(points) => {
                debug!(%side, points, "AI move applied");
                self.after_move();
            }
            Err(err) => self.message = Some(format!("AI could not move: {err}")),
        }
        self.last_ai_result = Some(result);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for Human vs Human mode
    pub fn request_suggestion(&mut self) {
        if self.game.is_over() || self.is_ai_thinking() {
            return;
        }

        let mut config = SearchConfig::default().with_depth(HINT_DEPTH);
        if let Some(seed) = self.settings.seed {
            config = config.with_seed(seed.wrapping_add(self.game.history().len() as u64));
        }
        let result = AIEngine::with_config(config).suggest_move(self.game.board());

        self.suggestion = result.best_move.zip(result.symbol);
        self.last_ai_result = Some(result);
    }

    /// Undo the last move, plus the human move before an AI reply in Human vs AI
    pub fn undo(&mut self) {
        if self.game.history().is_empty() || self.is_ai_thinking() {
            return;
        }

        // Against the AI, take back its reply too so the human moves next
        let ai_moved_last = self
            .game
            .last_move()
            .is_some_and(|m| !self.mode().is_human(m.side));
        let count = match self.mode() {
            GameMode::HumanVsAi { .. } if ai_moved_last && self.game.history().len() >= 2 => 2,
            _ => 1,
        };
        self.game.undo(count);
        self.suggestion = None;
        self.message = None;
        self.move_timer.start();
    }

    /// Completed sequences with the side that completed each.
    ///
    /// A sequence's completing move is the latest played move among its
    /// cells; its middle `O` is never a pre-filled corner, so one exists.
    pub fn scored_lines(&self) -> Vec<([Pos; 3], Side)> {
        let history = self.game.history();
        find_sequences(self.game.board())
            .into_iter()
            .filter_map(|line| {
                history
                    .iter()
                    .rev()
                    .find(|m| line.contains(&m.pos))
                    .map(|m| (line, m.side))
            })
            .collect()
    }
}
