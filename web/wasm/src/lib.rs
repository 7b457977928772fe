use artswipe::{
    Artwork, Catalog, CommitResult, Direction, Feedback, Game, GameOptions, GameOutcome,
    GamePhase, GameSummary, PendingCommit, SwipeMapper,
    catalog::ARTWORKS_PATH,
    gesture::Release,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Browser wrapper around [`Game`].
///
/// The page fetches `artworks_path()`, passes the body (or nothing) to
/// `load_catalog`, and keeps the settle timer itself: `decide` returns a
/// ticket object, and the page hands its `epoch` back to `commit` once the
/// timer fires.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    mapper: SwipeMapper,
    pending: Option<PendingCommit>,
    notice: Option<&'static str>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        let options = GameOptions::default();
        Self {
            game: Game::from_catalog(options, &Catalog::builtin(), seed as u64),
            mapper: SwipeMapper::new(options.gesture),
            pending: None,
            notice: None,
        }
    }

    pub fn artworks_path() -> String {
        ARTWORKS_PATH.to_string()
    }

    /// Loads a fetched payload; `None` means the fetch failed.
    pub fn load_catalog(&mut self, payload: Option<String>) {
        let catalog = match payload {
            Some(body) => Catalog::from_payload(&body),
            None => Catalog::fallback(artswipe::CatalogError::Unavailable),
        };
        self.notice = catalog.notice();
        if self.game.load_catalog(catalog) {
            self.pending = None;
        }
    }

    pub fn restart(&mut self) {
        self.pending = None;
        self.game.restart();
    }

    pub fn settle_delay_ms(&self) -> u32 {
        u32::try_from(self.game.options().settle_delay_ms).unwrap_or(u32::MAX)
    }

    pub fn accepts_input(&self) -> bool {
        self.game.can_decide().is_ok()
    }

    /// Maps a released drag to `"before"`, `"after"` or `null`.
    pub fn release(&self, dx: f32) -> Option<String> {
        match self.mapper.release(dx) {
            Release::Commit(direction) => Some(direction_to_str(direction).to_string()),
            Release::SnapBack => None,
        }
    }

    pub fn pose(&self, offset: f32) -> Result<JsValue, JsValue> {
        let pose = self.mapper.pose(offset);
        to_js_value(&JsPose {
            rotation_deg: pose.rotation_deg,
            before_opacity: pose.before_opacity,
            after_opacity: pose.after_opacity,
        })
    }

    /// Stages a decision. Returns `null` if the input is ignored.
    pub fn decide(&mut self, direction: &str) -> Result<JsValue, JsValue> {
        let direction = parse_direction(direction)?;
        let Some(ticket) = self.game.decide(direction) else {
            return Ok(JsValue::NULL);
        };
        self.pending = Some(ticket);
        to_js_value(&JsTicket {
            epoch: ticket.epoch() as f64,
            feedback: feedback_to_str(ticket.feedback()),
            vibration: ticket.feedback().vibration_pattern().to_vec(),
            delay_ms: self.settle_delay_ms(),
        })
    }

    /// Commits the pending decision if `epoch` still matches.
    pub fn commit(&mut self, epoch: f64) -> Result<JsValue, JsValue> {
        let Some(ticket) = self.pending.take_if(|ticket| ticket.epoch() as f64 == epoch) else {
            return Ok(JsValue::NULL);
        };
        match self.game.commit(ticket) {
            Some(result) => to_js_value(&JsCommit::from(result)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let game = &self.game;
        let snapshot = Snapshot {
            phase: phase_to_str(game.phase()),
            current: game.current(),
            previous: game.previous(),
            upcoming_image: game.upcoming().map(|artwork| artwork.image_ref.as_str()),
            score: game.score() as u32,
            attempts: game.attempts() as u32,
            lives: game.lives(),
            max_lives: game.starting_lives(),
            progress: game.progress() as u32,
            rounds: game.rounds() as u32,
            feedback: game.feedback().map(feedback_to_str),
            reveal: game.reveal_label(),
            finished: game.is_finished(),
            out_of_lives: game.is_out_of_lives(),
            summary: game.summary().map(JsSummary::from),
            notice: self.notice,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    phase: &'static str,
    current: Option<&'a Artwork>,
    previous: Option<&'a Artwork>,
    upcoming_image: Option<&'a str>,
    score: u32,
    attempts: u32,
    lives: u8,
    max_lives: u8,
    progress: u32,
    rounds: u32,
    feedback: Option<&'static str>,
    reveal: Option<String>,
    finished: bool,
    out_of_lives: bool,
    summary: Option<JsSummary>,
    notice: Option<&'static str>,
}

#[derive(Serialize)]
struct JsPose {
    rotation_deg: f32,
    before_opacity: f32,
    after_opacity: f32,
}

#[derive(Serialize)]
struct JsTicket {
    epoch: f64,
    feedback: &'static str,
    vibration: Vec<u32>,
    delay_ms: u32,
}

#[derive(Serialize)]
struct JsCommit {
    feedback: &'static str,
    score: u32,
    attempts: u32,
    lives: u8,
    outcome: Option<&'static str>,
}

impl From<CommitResult> for JsCommit {
    fn from(result: CommitResult) -> Self {
        Self {
            feedback: feedback_to_str(result.feedback),
            score: result.score as u32,
            attempts: result.attempts as u32,
            lives: result.lives,
            outcome: result.outcome.map(outcome_to_str),
        }
    }
}

#[derive(Serialize)]
struct JsSummary {
    outcome: &'static str,
    score: u32,
    rounds: u32,
    perfect: bool,
}

impl From<GameSummary> for JsSummary {
    fn from(summary: GameSummary) -> Self {
        Self {
            outcome: outcome_to_str(summary.outcome),
            score: summary.score as u32,
            rounds: summary.rounds as u32,
            perfect: summary.perfect,
        }
    }
}

fn parse_direction(direction: &str) -> Result<Direction, JsValue> {
    match direction {
        "before" => Ok(Direction::Before),
        "after" => Ok(Direction::After),
        other => Err(JsValue::from_str(&format!("unknown direction: {other}"))),
    }
}

fn direction_to_str(direction: Direction) -> &'static str {
    match direction {
        Direction::Before => "before",
        Direction::After => "after",
    }
}

fn feedback_to_str(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Correct => "correct",
        Feedback::Incorrect => "incorrect",
    }
}

fn outcome_to_str(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::DeckCompleted => "DeckCompleted",
        GameOutcome::OutOfLives => "OutOfLives",
    }
}

fn phase_to_str(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::NotReady => "NotReady",
        GamePhase::AwaitingDecision => "AwaitingDecision",
        GamePhase::Settling => "Settling",
        GamePhase::Finished(_) => "Finished",
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
