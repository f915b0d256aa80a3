use crate::{
    app::{
        control::Control,
        keyboard_control::input_event_for_key,
        rendering::CanvasRenderer,
    },
    basic::Point,
    color::Color,
    error::{AppError, AppErrorConversion, AppResult},
};
use ggez::{
    conf::{WindowMode, WindowSetup},
    event::{EventHandler, MouseButton},
    graphics::Canvas,
    input::keyboard::KeyInput,
    Context,
};
use tracing::debug;

pub use prefs::{Prefs, PrefsError};
pub use session::{GameSession, InputEvent, Lifecycle};

mod color_selector;
mod control;
mod game;
mod keyboard_control;
mod prefs;
mod rendering;
mod session;
mod snake;

pub struct App {
    session: GameSession,
    control: Control,
    prefs: Prefs,
    /// Last observed state, only used for logging transitions
    lifecycle: Lifecycle,
}

impl App {
    pub fn new(prefs: Prefs) -> AppResult<Self> {
        prefs
            .validate()
            .map_err(AppError::from)
            .with_trace_step("App::new")?;

        let session = GameSession::new(
            prefs.board_dim(),
            prefs.cell_size as f32,
            prefs.window_width as f32,
        );
        Ok(Self {
            lifecycle: session.lifecycle(),
            session,
            control: Control::new(prefs.fps as f64),
            prefs,
        })
    }

    pub fn wm(&self) -> WindowMode {
        WindowMode::default()
            .dimensions(self.prefs.window_width as f32, self.prefs.window_height as f32)
            .resizable(false)
    }

    pub fn ws(&self) -> WindowSetup {
        WindowSetup::default().title("Snake").vsync(true)
    }

    fn observe_lifecycle(&mut self) {
        let lifecycle = self.session.lifecycle();
        if lifecycle != self.lifecycle {
            debug!(from = ?self.lifecycle, to = ?lifecycle, "lifecycle changed");
            self.lifecycle = lifecycle;
        }
    }
}

impl EventHandler<AppError> for App {
    fn update(&mut self, _ctx: &mut Context) -> AppResult {
        for _ in 0..self.control.num_updates() {
            self.session.tick();
        }
        self.observe_lifecycle();
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let mut canvas = Canvas::from_frame(ctx, *Color::BLACK);
        self.session.draw(&mut CanvasRenderer::new(&mut canvas));
        canvas
            .finish(ctx)
            .map_err(AppError::from)
            .with_trace_step("App::draw")
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> AppResult {
        match input.keycode.and_then(input_event_for_key) {
            Some(event) => self.session.handle_input(event),
            None => debug!(keycode = ?input.keycode, "ignoring key"),
        }
        self.observe_lifecycle();
        Ok(())
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        _button: MouseButton,
        x: f32,
        y: f32,
    ) -> AppResult {
        self.session.handle_input(InputEvent::PointerDown(Point { x, y }));
        self.observe_lifecycle();
        Ok(())
    }
}
