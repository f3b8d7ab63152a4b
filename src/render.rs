//! Frame composition and canvas painting.
//!
//! `Scene::compose` turns a borrowed `GameState` into plain draw data, and
//! `paint` pushes that data onto a 2d context. Neither can touch game state.

use web_sys::CanvasRenderingContext2d;

use crate::config::GameConfig;
use crate::layout::{CELL_COUNT, CELL_DIAMETER, SURFACE_HEIGHT, SURFACE_WIDTH, cell_rect};
use crate::model::{GameState, Mark, Outcome, Phase};

const TITLE: &str = "Tic-Tac-Toe";
const TEXT_PX: f64 = 28.0;
const LINE_WIDTH: f64 = 6.0;
const TITLE_Y: f64 = 52.0;
const STATUS_BOTTOM_OFFSET: f64 = 24.0;
const SCORE_COLUMN_OFFSET: f64 = 220.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub background: String,
    pub foreground: String,
    pub text_font: String,
    pub mark_font: String,
    /// Centre-aligned.
    pub title: TextItem,
    pub status: TextItem,
    /// Left-aligned: both player labels followed by both score values.
    pub scores: Vec<TextItem>,
    pub marks: Vec<TextItem>,
    /// Centres of the first and last cell of the winning line.
    pub strike: Option<((f64, f64), (f64, f64))>,
}

fn score_label(mark: Mark, current: Option<Mark>) -> String {
    let marker = if current == Some(mark) { "<" } else { "" };
    format!("P.{}{}", mark.glyph(), marker)
}

impl Scene {
    pub fn compose(state: &GameState, cfg: &GameConfig) -> Scene {
        let w = SURFACE_WIDTH as f64;
        let h = SURFACE_HEIGHT as f64;
        let score_x = w - SCORE_COLUMN_OFFSET;
        let at = |text: String, x: f64, y: f64| TextItem { text, x, y };

        let scores = vec![
            at(score_label(Mark::X, state.current), score_x, 120.0),
            at(score_label(Mark::O, state.current), score_x, 244.0),
            at(state.scores.get(Mark::X).to_string(), score_x, 164.0),
            at(state.scores.get(Mark::O).to_string(), score_x, 284.0),
        ];

        let marks = (0..CELL_COUNT)
            .filter_map(|i| {
                let mark = state.grid[i]?;
                let r = cell_rect(i);
                Some(at(
                    mark.glyph().to_string(),
                    r.x + r.width / 2.0 + 8.0,
                    r.y + r.height - 2.0,
                ))
            })
            .collect();

        let strike = match state.phase {
            Phase::RoundEnded(Outcome::Won { line, .. }) if cfg.highlight_winning_line => {
                Some((cell_rect(line[0]).center(), cell_rect(line[2]).center()))
            }
            _ => None,
        };

        Scene {
            background: cfg.background.clone(),
            foreground: cfg.foreground.clone(),
            text_font: cfg.font(TEXT_PX),
            mark_font: cfg.font(CELL_DIAMETER - 20.0),
            title: at(TITLE.to_string(), w / 2.0, TITLE_Y),
            status: at(state.status_text().to_string(), w / 2.0, h - STATUS_BOTTOM_OFFSET),
            scores,
            marks,
            strike,
        }
    }
}

pub fn paint(ctx: &CanvasRenderingContext2d, scene: &Scene) {
    let w = SURFACE_WIDTH as f64;
    let h = SURFACE_HEIGHT as f64;
    ctx.set_image_smoothing_enabled(false);
    ctx.set_fill_style_str(&scene.background);
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str(&scene.foreground);
    ctx.set_stroke_style_str(&scene.foreground);
    ctx.set_line_width(LINE_WIDTH);

    ctx.set_font(&scene.text_font);
    ctx.set_text_align("center");
    for t in [&scene.title, &scene.status] {
        ctx.fill_text(&t.text, t.x, t.y).ok();
    }

    ctx.set_text_align("left");
    for t in &scene.scores {
        ctx.fill_text(&t.text, t.x, t.y).ok();
    }

    for i in 0..CELL_COUNT {
        let r = cell_rect(i);
        ctx.stroke_rect(r.x, r.y, r.width, r.height);
    }

    ctx.set_text_align("center");
    ctx.set_font(&scene.mark_font);
    for t in &scene.marks {
        ctx.fill_text(&t.text, t.x, t.y).ok();
    }

    if let Some(((x0, y0), (x1, y1))) = scene.strike {
        ctx.begin_path();
        ctx.move_to(x0, y0);
        ctx.line_to(x1, y1);
        ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won_by_x() -> GameState {
        let mut s = GameState::new();
        s.reset();
        for cell in [0, 3, 1, 4, 2] {
            s.apply_move(cell);
        }
        s
    }

    #[test]
    fn idle_scene_prompts_to_start() {
        let scene = Scene::compose(&GameState::new(), &GameConfig::default());
        assert_eq!(scene.title.text, "Tic-Tac-Toe");
        assert_eq!(scene.status.text, "Click to start");
        assert_eq!(scene.status.y, 576.0);
        assert!(scene.marks.is_empty());
        assert_eq!(scene.scores[0].text, "P.X");
        assert_eq!(scene.scores[1].text, "P.O");
        assert_eq!(scene.scores[0].x, 580.0);
    }

    #[test]
    fn current_player_gets_marker() {
        let mut s = GameState::new();
        s.reset();
        let scene = Scene::compose(&s, &GameConfig::default());
        assert_eq!(scene.scores[0].text, "P.X<");
        assert_eq!(scene.scores[1].text, "P.O");
        s.apply_move(4);
        let scene = Scene::compose(&s, &GameConfig::default());
        assert_eq!(scene.scores[1].text, "P.O<");
    }

    #[test]
    fn marks_sit_inside_their_cells() {
        let mut s = GameState::new();
        s.reset();
        s.apply_move(0);
        s.apply_move(8);
        let scene = Scene::compose(&s, &GameConfig::default());
        assert_eq!(
            scene.marks,
            vec![
                TextItem { text: "X".into(), x: 153.0, y: 213.0 },
                TextItem { text: "O".into(), x: 453.0, y: 513.0 },
            ]
        );
    }

    #[test]
    fn won_round_shows_scores_and_strike() {
        let s = won_by_x();
        let scene = Scene::compose(&s, &GameConfig::default());
        assert_eq!(scene.status.text, "Click to restart");
        assert_eq!(scene.scores[2].text, "1");
        assert_eq!(scene.scores[3].text, "0");
        assert_eq!(scene.strike, Some(((145.0, 150.0), (445.0, 150.0))));

        let plain = GameConfig { highlight_winning_line: false, ..GameConfig::default() };
        assert_eq!(Scene::compose(&s, &plain).strike, None);
    }

    #[test]
    fn composing_is_idempotent() {
        let s = won_by_x();
        let before = s.clone();
        let cfg = GameConfig::default();
        let a = Scene::compose(&s, &cfg);
        let b = Scene::compose(&s, &cfg);
        assert_eq!(a, b);
        assert_eq!(s, before);
    }
}
