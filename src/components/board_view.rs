use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};
use yew::prelude::*;

use crate::config::GameConfig;
use crate::layout::{SURFACE_HEIGHT, SURFACE_WIDTH, cell_at};
use crate::model::{GameAction, GameState};
use crate::render::{Scene, paint};
use crate::state::{PointerState, to_surface};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub game: UseReducerHandle<GameState>,
    pub config: GameConfig,
}

type GameRef = Rc<RefCell<UseReducerHandle<GameState>>>;

// Timer and listeners live as long as this value; dropping it detaches them.
struct Mounted {
    window: Window,
    canvas: HtmlCanvasElement,
    interval_id: i32,
    _tick: Closure<dyn FnMut()>,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.interval_id);
        let _ = self
            .canvas
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self
            .canvas
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
    }
}

fn surface_point(canvas: &HtmlCanvasElement, e: &MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    to_surface(
        (e.client_x() as f64, e.client_y() as f64),
        (rect.left(), rect.top()),
        (canvas.width() as f64, canvas.height() as f64),
        (canvas.client_width() as f64, canvas.client_height() as f64),
    )
}

fn mount(
    canvas: HtmlCanvasElement,
    game_ref: GameRef,
    pointer: Rc<RefCell<PointerState>>,
    cfg: GameConfig,
) -> Option<Mounted> {
    let Some(window) = web_sys::window() else {
        clog("no global window; board not mounted");
        return None;
    };
    canvas.set_width(SURFACE_WIDTH);
    canvas.set_height(SURFACE_HEIGHT);
    let ctx = match canvas.get_context("2d").ok().flatten() {
        Some(c) => c.dyn_into::<CanvasRenderingContext2d>().ok()?,
        None => {
            clog("2d context unavailable; board not mounted");
            return None;
        }
    };

    // Fixed-rate redraw
    let interval_ms = cfg.frame_interval_ms();
    let tick = {
        let game_ref = game_ref.clone();
        Closure::wrap(Box::new(move || {
            let handle = game_ref.borrow();
            paint(&ctx, &Scene::compose(&**handle, &cfg));
        }) as Box<dyn FnMut()>)
    };
    let interval_id = match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval_ms,
    ) {
        Ok(id) => id,
        Err(_) => {
            clog("failed to start redraw timer");
            return None;
        }
    };
    clog(&format!("redrawing every {}ms", interval_ms));

    let on_move = {
        let canvas_m = canvas.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let (x, y) = surface_point(&canvas_m, &e);
            if let Some(cursor) = pointer.borrow_mut().update(x, y) {
                let _ = canvas_m.style().set_property("cursor", cursor);
            }
        }) as Box<dyn FnMut(_)>)
    };
    let on_click = {
        let canvas_c = canvas.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let (x, y) = surface_point(&canvas_c, &e);
            // clone out of the RefCell before dispatching
            let handle = game_ref.borrow().clone();
            handle.dispatch(GameAction::Click { cell: cell_at(x, y) });
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .ok();
    canvas
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .ok();

    Some(Mounted {
        window,
        canvas,
        interval_id,
        _tick: tick,
        on_move,
        on_click,
    })
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let game_ref = use_mut_ref(|| props.game.clone());
    let pointer = use_mut_ref(PointerState::default);

    // Effect: keep the timer's handle pointed at the latest state
    {
        let game_ref = game_ref.clone();
        let current = props.game.clone();
        use_effect_with((*props.game).clone(), move |_| {
            *game_ref.borrow_mut() = current;
            || ()
        });
    }
    // Mount effect (timer, pointer listeners)
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.config.clone(), move |cfg| {
            let mounted = match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => mount(canvas, game_ref, pointer, cfg.clone()),
                None => {
                    clog("canvas_ref not attached to a canvas element");
                    None
                }
            };
            move || drop(mounted)
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            id="canvas"
            width={SURFACE_WIDTH.to_string()}
            height={SURFACE_HEIGHT.to_string()}
            style="display:block; max-width:100%; max-height:100vh; image-rendering:pixelated;"
        ></canvas>
    }
}
