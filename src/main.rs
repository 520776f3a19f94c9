//! Canvas Arcade entry point
//!
//! In the browser the page decides which game runs: a `#game` canvas starts
//! the maze, a `#pong` canvas starts Pong. Natively there is no window, so
//! both simulations run headless for a while and report what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use canvas_arcade::ArcadeResult;
    use canvas_arcade::consts::*;
    use canvas_arcade::maze::{self, MazeState, Status};
    use canvas_arcade::platform::web;
    use canvas_arcade::platform::{MazeKeys, PongPointer};
    use canvas_arcade::pong::{self, PongEvent, PongState};
    use canvas_arcade::renderer::{CanvasRenderer, maze_scene, pong_scene};

    /// Maze instance: world, input collector, renderer, status line
    struct MazeGame {
        state: MazeState,
        keys: MazeKeys,
        renderer: CanvasRenderer,
        tile_size: f32,
        status_el: Option<Element>,
        shown_status: Option<Status>,
    }

    impl MazeGame {
        fn frame(&mut self) {
            let input = self.keys.snapshot();
            maze::tick(&mut self.state, &input);
            self.renderer.draw(&maze_scene(&self.state, self.tile_size));
            self.update_status();
        }

        fn update_status(&mut self) {
            if self.shown_status == Some(self.state.status) {
                return;
            }
            let text = self.state.status.as_str();
            log::info!("Status: {}", text);
            if let Some(ref el) = self.status_el {
                web::set_text(el, text);
            }
            self.shown_status = Some(self.state.status);
        }
    }

    /// Pong instance: table, pointer collector, renderer
    struct PongGame {
        state: PongState,
        pointer: PongPointer,
        renderer: CanvasRenderer,
    }

    impl PongGame {
        fn frame(&mut self) {
            let input = self.pointer.snapshot();
            for event in pong::tick(&mut self.state, &input) {
                match event {
                    PongEvent::Scored(side) => log::info!(
                        "{:?} scores ({} - {})",
                        side,
                        self.state.player.score,
                        self.state.ai.score
                    ),
                    other => log::debug!("{:?}", other),
                }
            }
            self.renderer.draw(&pong_scene(&self.state));
        }
    }

    pub fn run() -> ArcadeResult<()> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }

        let document = web::document()?;
        if document.get_element_by_id(MAZE_CANVAS_ID).is_some() {
            start_maze()
        } else if document.get_element_by_id(PONG_CANVAS_ID).is_some() {
            start_pong()
        } else {
            log::warn!(
                "No #{} or #{} canvas on this page, nothing to run",
                MAZE_CANVAS_ID,
                PONG_CANVAS_ID
            );
            Ok(())
        }
    }

    fn start_maze() -> ArcadeResult<()> {
        log::info!("Glich starting...");

        let canvas = web::canvas_by_id(MAZE_CANVAS_ID)?;
        let config = web::load_config(&canvas).maze;
        let state = MazeState::with_level(config.level)?;
        let level = state.level_index();

        canvas.set_width((MAP_W as f32 * config.tile_size) as u32);
        canvas.set_height((MAP_H as f32 * config.tile_size) as u32);

        let status_el = match web::element_by_id(MAZE_STATUS_ID) {
            Ok(el) => Some(el),
            Err(e) => {
                log::warn!("Status line disabled: {}", e);
                None
            }
        };

        let game = Rc::new(RefCell::new(MazeGame {
            state,
            keys: MazeKeys::new(),
            renderer: CanvasRenderer::new(canvas)?,
            tile_size: config.tile_size,
            status_el,
            shown_status: None,
        }));

        setup_keyboard(game.clone())?;

        web::run_frame_loop(move |_time| game.borrow_mut().frame())?;
        log::info!("Glich running on level {}", level);
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<MazeGame>>) -> ArcadeResult<()> {
        let window = web::window()?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_down(&event.key());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn start_pong() -> ArcadeResult<()> {
        log::info!("Pong starting...");

        let canvas = web::canvas_by_id(PONG_CANVAS_ID)?;
        let renderer = CanvasRenderer::new(canvas.clone())?;
        let (width, height) = renderer.size();
        let config = web::load_config(&canvas).pong.with_size(width, height);

        let seed = js_sys::Date::now() as u64;
        let mut state = PongState::new(config, seed);
        state.reset_ball();
        log::info!("Table {}x{}, seed {}", width, height, seed);

        let game = Rc::new(RefCell::new(PongGame {
            state,
            pointer: PongPointer::new(),
            renderer,
        }));

        setup_pointer(&canvas, game.clone())?;

        web::run_frame_loop(move |_time| game.borrow_mut().frame())?;
        log::info!("Pong running!");
        Ok(())
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, game: Rc<RefCell<PongGame>>) -> ArcadeResult<()> {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            game.borrow_mut()
                .pointer
                .moved(event.client_y() as f32, rect.top() as f32);
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Arcade (native) starting...");
    log::info!("The games need a browser canvas: build for wasm32 and serve web/ to play");

    headless::run_maze();
    headless::run_pong();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted runs used when there is no browser
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_arcade::maze::{self, MazeCommand, MazeInput, MazeState};
    use canvas_arcade::pong::{self, PongEvent, PongInput, PongState};
    use canvas_arcade::{ArcadeConfig, renderer};

    const PONG_SEED: u64 = 0x5eed;
    const PONG_FRAMES: u64 = 60 * 60;

    pub fn run_maze() {
        let config = ArcadeConfig::default().maze;
        let mut state = match MazeState::with_level(config.level) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Maze unavailable: {}", e);
                return;
            }
        };

        // Freeze the enemy, wander, switch glitch power on and push east
        let command = |command| MazeInput {
            commands: vec![command],
            ..Default::default()
        };
        let right = MazeInput {
            right: true,
            ..Default::default()
        };
        let down = MazeInput {
            down: true,
            ..Default::default()
        };
        let script = [
            (command(MazeCommand::ToggleFreeze), 1),
            (right.clone(), 4),
            (down, 4),
            (command(MazeCommand::ToggleGlitch), 1),
            (right, 20),
            (MazeInput::default(), 1),
        ];

        let mut frames = 0;
        for (input, repeat) in &script {
            for _ in 0..*repeat {
                maze::tick(&mut state, input);
                frames += 1;
            }
        }

        let scene = renderer::maze_scene(&state, config.tile_size);
        log::info!(
            "Maze after {} frames: player {:?} alive={} bug_fixed={} status=\"{}\" ({} draw calls)",
            frames,
            state.player.pos,
            state.player.alive,
            state.flags.bug_fixed,
            state.status.as_str(),
            scene.commands.len()
        );
    }

    pub fn run_pong() {
        let mut state = PongState::new(ArcadeConfig::default().pong, PONG_SEED);
        state.reset_ball();

        let mut hits = 0;
        for _ in 0..PONG_FRAMES {
            // Stand-in human: follow the ball, a little late
            let input = PongInput {
                pointer_y: (state.frame % 3 == 0).then(|| state.ball.center_y()),
            };
            for event in pong::tick(&mut state, &input) {
                match event {
                    PongEvent::PaddleHit(_) => hits += 1,
                    PongEvent::Scored(side) => log::debug!("{:?} scores", side),
                    PongEvent::WallBounce => {}
                }
            }
        }

        log::info!(
            "Pong after {} frames (seed {:#x}): {} - {}, {} paddle hits",
            state.frame,
            PONG_SEED,
            state.player.score,
            state.ai.score,
            hits
        );
        match serde_json::to_string(&state) {
            Ok(json) => log::debug!("Final table: {}", json),
            Err(e) => log::warn!("Could not serialize table: {}", e),
        }
    }
}
