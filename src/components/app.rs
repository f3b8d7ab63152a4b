use super::board_view::BoardView;
use crate::config::GameConfig;
use crate::model::{GameState, Outcome, Phase, Scoreboard};
use crate::util::clog;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: GameConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let game = use_reducer(GameState::new);
    let last = use_mut_ref(|| (Phase::Idle, Scoreboard::default()));

    {
        // Log round transitions and score changes
        let state = (*game).clone();
        let last = last.clone();
        use_effect_with((game.phase, game.scores), move |&(phase, scores)| {
            let mut prev = last.borrow_mut();
            if prev.0 != phase {
                match phase {
                    Phase::Idle => {}
                    Phase::Playing => clog(&format!(
                        "round started, {} to move",
                        state.current.map(|m| m.glyph()).unwrap_or("?")
                    )),
                    Phase::RoundEnded(Outcome::Won { line, .. }) => clog(&format!(
                        "{} wins on {:?}",
                        state.winner().map(|m| m.glyph()).unwrap_or("?"),
                        line
                    )),
                    Phase::RoundEnded(Outcome::Tie) => clog("round tied"),
                }
            }
            if prev.1 != scores {
                clog(&format!(
                    "score: X {} - O {} ({} decided)",
                    scores.x,
                    scores.o,
                    scores.total()
                ));
            }
            *prev = (phase, scores);
            || ()
        });
    }

    html! {
        <div id="root" style="display:flex; justify-content:center; align-items:center; min-height:100vh; background:#000;">
            <BoardView game={game} config={props.config.clone()} />
        </div>
    }
}
