#![cfg(feature = "std")]

//! Optional delegation of the computer's targeting to an external service.
//!
//! The service receives the opponent grid, a fleet summary and the
//! difficulty, and answers with the cell to fire at. Any failure falls back to
//! the local [`calculate_ai_move`] so a turn is never lost.

use anyhow::{anyhow, bail};
use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};

use crate::ai::{calculate_ai_move, Difficulty};
use crate::common::Coordinate;
use crate::config::DEFAULT_DECISION_TIMEOUT;
use crate::fleet::{Fleet, ShipSummary};
use crate::grid::Grid;

/// Body posted to the decision service.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionRequest<'a> {
    pub grid: &'a Grid,
    pub ships: Vec<ShipSummary>,
    pub difficulty: Difficulty,
}

impl<'a> DecisionRequest<'a> {
    pub fn new(grid: &'a Grid, fleet: &Fleet, difficulty: Difficulty) -> Self {
        Self {
            grid,
            ships: fleet.summaries(),
            difficulty,
        }
    }
}

/// Successful answer. Signed so that negative values decode and are then
/// rejected as off-board rather than as a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub x: i64,
    pub y: i64,
}

impl DecisionResponse {
    /// Board coordinate named by the response, if it is on the board.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        let c = Coordinate::new(x, y);
        c.in_bounds().then_some(c)
    }
}

/// Source of targeting decisions outside the engine.
#[async_trait::async_trait]
pub trait DecisionService: Send + Sync {
    async fn decide(&self, request: &DecisionRequest<'_>) -> anyhow::Result<Coordinate>;
}

/// Decision service reached with an HTTP POST of JSON.
pub struct HttpDecisionService {
    client: reqwest::Client,
    endpoint: String,
    timeout_duration: Duration,
}

impl HttpDecisionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_DECISION_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout_duration: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout_duration,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl DecisionService for HttpDecisionService {
    async fn decide(&self, request: &DecisionRequest<'_>) -> anyhow::Result<Coordinate> {
        let exchange = async {
            let resp = self
                .client
                .post(&self.endpoint)
                .json(request)
                .send()
                .await
                .map_err(|e| anyhow!("Request error: {}", e))?;
            let status = resp.status();
            if !status.is_success() {
                bail!("Decision service answered {}", status);
            }
            let body: DecisionResponse = resp
                .json()
                .await
                .map_err(|e| anyhow!("Malformed decision: {}", e))?;
            anyhow::Ok(body)
        };

        let body = timeout(self.timeout_duration, exchange)
            .await
            .map_err(|_| anyhow!("Decision timeout after {:?}", self.timeout_duration))??;

        body.coordinate()
            .ok_or_else(|| anyhow!("Decision ({}, {}) is off the board", body.x, body.y))
    }
}

/// Pick the computer's target on `grid`, asking `service` first when given.
///
/// The remote answer is used only if it names a cell that can still be fired
/// upon; errors, timeouts and unusable answers fall back to the local AI.
/// Returns `None` only when every cell has already been fired upon.
pub async fn choose_target<R: Rng + ?Sized>(
    service: Option<&dyn DecisionService>,
    grid: &Grid,
    fleet: &Fleet,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Coordinate> {
    if let Some(service) = service {
        let request = DecisionRequest::new(grid, fleet, difficulty);
        match service.decide(&request).await {
            Ok(target) if !target.in_bounds() => {
                warn!("remote decision {} is off the board, using local AI", target)
            }
            Ok(target) if grid.is_unfired(target) => {
                debug!("remote decision accepted: {}", target);
                return Some(target);
            }
            Ok(target) => warn!("remote decision {} was already fired upon, using local AI", target),
            Err(e) => warn!("remote decision failed ({}), using local AI", e),
        }
    }
    calculate_ai_move(grid, difficulty, rng)
}
