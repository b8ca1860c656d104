#![cfg(feature = "std")]

use log::info;
use rand::Rng;
use tokio::time::Duration;

use crate::ai::Difficulty;
use crate::common::{Coordinate, MatchError};
use crate::config::Settings;
use crate::game::{Match, Side, TurnReport};
use crate::remote::{choose_target, DecisionService, HttpDecisionService};

/// The computer player: pacing delay, difficulty and an optional remote brain.
pub struct AiOpponent {
    difficulty: Difficulty,
    delay: Duration,
    service: Option<Box<dyn DecisionService>>,
}

impl AiOpponent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            delay: Duration::ZERO,
            service: None,
        }
    }

    /// Build from runtime settings, wiring up the HTTP service when an endpoint is set.
    pub fn from_settings(settings: &Settings) -> Self {
        let service = settings.ai_endpoint.as_ref().map(|endpoint| {
            let http = HttpDecisionService::with_timeout(endpoint.clone(), settings.decision_timeout);
            info!("remote decisions from {}", http.endpoint());
            Box::new(http) as Box<dyn DecisionService>
        });
        Self {
            difficulty: settings.difficulty,
            delay: settings.ai_delay,
            service,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_service(mut self, service: Box<dyn DecisionService>) -> Self {
        self.service = Some(service);
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Target on the human board, remote first when configured.
    pub async fn choose_target<R: Rng + ?Sized>(&self, game: &Match, rng: &mut R) -> Option<Coordinate> {
        let board = game.board(Side::Human);
        choose_target(
            self.service.as_deref(),
            board.grid(),
            board.fleet(),
            self.difficulty,
            rng,
        )
        .await
    }

    /// Play one computer shot if it is the computer's move.
    ///
    /// Waits out the pacing delay, decides, then resolves the shot. Returns
    /// `Ok(None)` when it is not the computer's turn.
    pub async fn take_turn<R: Rng + ?Sized>(
        &self,
        game: &mut Match,
        rng: &mut R,
    ) -> Result<Option<TurnReport>, MatchError> {
        let Some(ticket) = game.ai_ticket() else {
            return Ok(None);
        };
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let target = self
            .choose_target(game, rng)
            .await
            .ok_or(MatchError::NoTargets)?;
        game.apply_ai_shot(ticket, target).map(Some)
    }
}
