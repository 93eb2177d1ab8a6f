use chrono::{DateTime, NaiveDate};
use diamond_arcade::{
    Answer, Arcade, ArcadeGame, ArcadeOptions, FeaturedGames, GameId, GameResult, GameSession,
    Question, format_card, time_until_reset,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmArcade {
    arcade: Arcade,
    session: Option<GameSession>,
    question: Option<Question>,
    next_session_id: u64,
}

#[wasm_bindgen]
impl WasmArcade {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            arcade: Arcade::new(ArcadeOptions::default(), u64::from(seed)),
            session: None,
            question: None,
            next_session_id: 1,
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.arcade.reseed(u64::from(seed));
        self.session = None;
        self.question = None;
    }

    pub fn games(&self) -> Result<JsValue, JsValue> {
        let games: Vec<&ArcadeGame> = self.arcade.catalog().games().iter().collect();
        to_js_value(&games)
    }

    pub fn featured(&self, year: i32, month: u32, day: u32) -> Result<JsValue, JsValue> {
        to_js_value(&self.featured_on(year, month, day)?)
    }

    pub fn time_until_reset(&self, now_ms: f64) -> Result<JsValue, JsValue> {
        let now = DateTime::from_timestamp_millis(now_ms as i64)
            .ok_or_else(|| JsValue::from_str("timestamp out of range"))?;
        to_js_value(&time_until_reset(now))
    }

    pub fn start(&mut self, game: &str) -> Result<u32, JsValue> {
        let game: GameId = game.parse().map_err(js_err)?;
        let session = self.arcade.start_session(game, self.next_session_id);
        self.next_session_id += 1;
        self.session = Some(session);
        self.question = None;
        Ok(self.arcade.game(game).questions_count)
    }

    pub fn next_question(&mut self) -> Result<JsValue, JsValue> {
        let session = self.require_session()?;
        if session.is_complete() {
            return Err(JsValue::from_str("session is complete"));
        }

        let question = self.arcade.question(session.game_id).map_err(js_err)?;
        let js_question = JsQuestion::from(&question);
        self.question = Some(question);
        to_js_value(&js_question)
    }

    pub fn answer(&mut self, answer: JsValue, elapsed_ms: u32) -> Result<JsValue, JsValue> {
        let answer: Answer = serde_wasm_bindgen::from_value(answer).map_err(js_err)?;
        let question = self
            .question
            .take()
            .ok_or_else(|| JsValue::from_str("no question pending"))?;
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| JsValue::from_str("no session started"))?;

        let correct = session.answer(&question, &answer, u64::from(elapsed_ms));
        to_js_value(&JsGrade {
            correct,
            correct_answer: question.correct_answer(),
            score: session.score,
            combo: session.combo,
        })
    }

    pub fn finish(
        &mut self,
        win_streak: u32,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<JsValue, JsValue> {
        let session = self.require_session()?;
        let featured = self.featured_on(year, month, day)?;
        let result = self.arcade.settle(&session, win_streak, Some(&featured));
        self.session = None;
        self.question = None;
        to_js_value(&JsSettlement { session, result })
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.session)
    }
}

impl WasmArcade {
    fn require_session(&self) -> Result<GameSession, JsValue> {
        self.session
            .ok_or_else(|| JsValue::from_str("no session started"))
    }

    fn featured_on(&self, year: i32, month: u32, day: u32) -> Result<FeaturedGames, JsValue> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| JsValue::from_str("invalid date"))?;
        Ok(self.arcade.featured_on(date))
    }
}

#[derive(Serialize)]
struct JsQuestion<'a> {
    question: &'a Question,
    board: Vec<JsCard>,
}

impl<'a> From<&'a Question> for JsQuestion<'a> {
    fn from(question: &'a Question) -> Self {
        Self {
            question,
            board: question
                .board()
                .unwrap_or_default()
                .iter()
                .map(|card| JsCard::from(*card))
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    code: String,
    display: String,
    color: &'static str,
}

impl From<diamond_arcade::Card> for JsCard {
    fn from(card: diamond_arcade::Card) -> Self {
        let face = format_card(card);
        Self {
            code: card.to_string(),
            display: face.display,
            color: face.color,
        }
    }
}

#[derive(Serialize)]
struct JsGrade {
    correct: bool,
    correct_answer: Answer,
    score: u64,
    combo: u32,
}

#[derive(Serialize)]
struct JsSettlement {
    session: GameSession,
    result: GameResult,
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
