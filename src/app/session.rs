use crate::{
    app::{color_selector::ColorSelector, game::Game, rendering::Renderer, snake::Snake},
    basic::{Dir, GridDim, Point},
};
use rand::{rngs::ThreadRng, Rng};
use tracing::{debug, info};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Lifecycle {
    ColorPicking,
    Playing,
    Finished,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    DirectionPressed(Dir),
    RestartPressed,
    PointerDown(Point),
}

/// Owns everything that changes during play, events and ticks are
/// applied one at a time
pub struct GameSession<R: Rng = ThreadRng> {
    snake: Snake,
    game: Game,
    color_selector: ColorSelector,
    color_committed: bool,

    board_dim: GridDim,
    cell_size: f32,
    rng: R,
}

impl GameSession<ThreadRng> {
    pub fn new(board_dim: GridDim, cell_size: f32, window_width: f32) -> Self {
        Self::with_rng(board_dim, cell_size, window_width, rand::thread_rng())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(board_dim: GridDim, cell_size: f32, window_width: f32, rng: R) -> Self {
        Self {
            snake: Snake::new(board_dim),
            game: Game::new(board_dim),
            color_selector: ColorSelector::new(window_width),
            color_committed: false,

            board_dim,
            cell_size,
            rng,
        }
    }

    #[cfg(test)]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[cfg(test)]
    pub fn color_selector(&self) -> &ColorSelector {
        &self.color_selector
    }

    #[cfg(test)]
    pub fn is_color_committed(&self) -> bool {
        self.color_committed
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.game.is_finished() {
            Lifecycle::Finished
        } else if !self.color_committed {
            Lifecycle::ColorPicking
        } else {
            Lifecycle::Playing
        }
    }

    /// One game step: move, eat, then look for a crash. The snake also
    /// moves while the color is still being picked and stays put once the
    /// game is over, but the hit and crash checks run on every tick.
    pub fn tick(&mut self) {
        if !self.game.is_finished() {
            self.snake.advance();
        }

        if self.game.check_hit(self.snake.head()) {
            self.game.record_hit(&mut self.rng);
            self.snake.grow();
            debug!(
                score = self.game.score(),
                target = ?self.game.target(),
                "target hit"
            );
        }

        if self.snake.has_self_collision() && !self.game.is_finished() {
            self.game.finish();
            info!(score = self.game.score(), "game over");
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::DirectionPressed(dir) => {
                if self.snake.can_change_dir_to(dir) {
                    self.snake.set_dir(dir);
                } else {
                    debug!(?dir, current = ?self.snake.dir(), "ignoring reversal");
                }
            }
            InputEvent::RestartPressed => {
                if self.game.is_finished() {
                    self.reset();
                }
            }
            InputEvent::PointerDown(point) => {
                if !self.color_committed {
                    self.color_selector.handle_click(point);
                    if let Some(color) = self.color_selector.selected_color() {
                        self.snake.color = color;
                        self.color_committed = true;
                        info!(%color, "snake color chosen");
                    }
                }
            }
        }
    }

    /// New snake and game, the color has to be confirmed again. The
    /// selector keeps its previous selection and highlights.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.board_dim);
        self.game = Game::new(self.board_dim);
        self.color_committed = false;
        info!("restarting");
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        self.snake.draw(renderer, self.cell_size);
        self.game.draw(renderer, self.cell_size);
        if !self.color_committed {
            self.color_selector.draw(renderer);
        }
    }

    #[cfg(test)]
    fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::rendering::{recording::RecordingRenderer, Layer},
        basic::GridPoint,
        color::SnakeColor,
    };
    use rand::{rngs::StdRng, SeedableRng};

    const DIM: GridDim = GridDim { cols: 32, rows: 24 };
    const FAR_AWAY: GridPoint = GridPoint::new(30, 2);

    fn session() -> GameSession<StdRng> {
        GameSession::with_rng(DIM, 20., 640., StdRng::seed_from_u64(42))
    }

    fn swatch_center(session: &GameSession<StdRng>, color: SnakeColor) -> Point {
        let swatch = session
            .color_selector()
            .swatches()
            .iter()
            .find(|s| s.color == color)
            .unwrap();
        swatch.pos + Point::square(swatch.size / 2.)
    }

    /// Grows the snake on five consecutive ticks by putting the
    /// target in front of it, then curls it into itself
    fn crash(session: &mut GameSession<StdRng>) {
        for _ in 0..5 {
            let next = session.snake().head().step(session.snake().dir(), DIM);
            session.game_mut().set_target(next);
            session.tick();
        }
        session.game_mut().set_target(FAR_AWAY);
        for dir in [Dir::Right, Dir::Up, Dir::Left] {
            session.handle_input(InputEvent::DirectionPressed(dir));
            session.tick();
        }
        assert_eq!(session.lifecycle(), Lifecycle::Finished);
    }

    #[test]
    fn test_starts_color_picking() {
        let session = session();
        assert_eq!(session.lifecycle(), Lifecycle::ColorPicking);
        assert_eq!(session.game().score(), 0);
        assert_eq!(session.snake().color, SnakeColor::Olive);
    }

    #[test]
    fn test_snake_moves_while_picking_color() {
        let mut session = session();
        session.tick();
        assert_eq!(session.snake().head(), GridPoint::new(2, 14));
        assert_eq!(session.lifecycle(), Lifecycle::ColorPicking);
    }

    #[test]
    fn test_click_commits_color() {
        let mut session = session();
        let teal = swatch_center(&session, SnakeColor::Teal);
        session.handle_input(InputEvent::PointerDown(teal));

        assert!(session.is_color_committed());
        assert_eq!(session.snake().color, SnakeColor::Teal);
        assert_eq!(session.lifecycle(), Lifecycle::Playing);

        // further clicks are ignored
        let orange = swatch_center(&session, SnakeColor::Orange);
        session.handle_input(InputEvent::PointerDown(orange));
        assert_eq!(session.snake().color, SnakeColor::Teal);
        assert_eq!(session.color_selector().selected_color(), Some(SnakeColor::Teal));
    }

    #[test]
    fn test_missed_click_does_not_commit() {
        let mut session = session();
        session.handle_input(InputEvent::PointerDown(Point { x: 1., y: 400. }));
        assert!(!session.is_color_committed());
        assert_eq!(session.lifecycle(), Lifecycle::ColorPicking);
    }

    #[test]
    fn test_direction_input_is_guarded() {
        let mut session = session();
        session.handle_input(InputEvent::DirectionPressed(Dir::Up));
        assert_eq!(session.snake().dir(), Dir::Down);

        session.handle_input(InputEvent::DirectionPressed(Dir::Left));
        assert_eq!(session.snake().dir(), Dir::Left);
        session.tick();
        assert_eq!(session.snake().head(), GridPoint::new(1, 13));
    }

    #[test]
    fn test_hit_grows_on_next_tick() {
        let mut session = session();
        session.game_mut().set_target(GridPoint::new(2, 14));

        session.tick();
        assert_eq!(session.game().score(), 1);
        assert!(session.snake().is_growing());
        assert_eq!(session.snake().len(), 4);
        assert!(DIM.contains(session.game().target()));

        session.game_mut().set_target(FAR_AWAY);
        session.tick();
        assert_eq!(session.snake().len(), 5);
        assert!(!session.snake().is_growing());
    }

    #[test]
    fn test_self_collision_finishes_game() {
        let mut session = session();
        crash(&mut session);
        assert_eq!(session.game().score(), 5);
        assert_eq!(
            session.game().display_text(),
            "Game over! Your Score: 5. Press 'Space' to restart."
        );

        // the snake stays put until restart
        let body = session.snake().body().to_vec();
        session.handle_input(InputEvent::DirectionPressed(Dir::Down));
        session.tick();
        session.tick();
        assert_eq!(session.snake().body(), &body[..]);
        assert_eq!(session.game().score(), 5);
        assert_eq!(session.lifecycle(), Lifecycle::Finished);
    }

    #[test]
    fn test_target_on_frozen_head_still_scores() {
        let mut session = session();
        session.game_mut().finish();
        let head = session.snake().head();
        session.game_mut().set_target(head);

        session.tick();
        assert_eq!(session.snake().head(), head);
        assert_eq!(session.game().score(), 1);
        assert!(session.snake().is_growing());
        assert_eq!(session.lifecycle(), Lifecycle::Finished);
    }

    #[test]
    fn test_restart_only_when_finished() {
        let mut session = session();
        session.tick();
        session.handle_input(InputEvent::RestartPressed);
        assert_eq!(session.snake().head(), GridPoint::new(2, 14));

        let silver = swatch_center(&session, SnakeColor::Silver);
        session.handle_input(InputEvent::PointerDown(silver));
        crash(&mut session);

        session.handle_input(InputEvent::RestartPressed);
        assert_eq!(session.lifecycle(), Lifecycle::ColorPicking);
        assert_eq!(session.snake().body(), &Snake::INITIAL_BODY[..]);
        assert_eq!(session.snake().color, SnakeColor::Olive);
        assert_eq!(session.game().score(), 0);
        assert_eq!(session.game().target(), Game::STARTING_TARGET);

        // the selector was not rebuilt
        assert_eq!(
            session.color_selector().selected_color(),
            Some(SnakeColor::Silver)
        );
    }

    #[test]
    fn test_missed_click_after_restart_reuses_color() {
        let mut session = session();
        let maroon = swatch_center(&session, SnakeColor::Maroon);
        session.handle_input(InputEvent::PointerDown(maroon));
        crash(&mut session);
        session.handle_input(InputEvent::RestartPressed);

        session.handle_input(InputEvent::PointerDown(Point { x: 1., y: 400. }));
        assert!(session.is_color_committed());
        assert_eq!(session.snake().color, SnakeColor::Maroon);
    }

    #[test]
    fn test_overlay_only_while_picking() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();
        session.draw(&mut renderer);
        assert_eq!(renderer.squares_on(Layer::Swatch).count(), 5);
        // 4 snake cells and the target
        assert_eq!(renderer.squares_on(Layer::Board).count(), 5);
        assert_eq!(renderer.texts(), vec!["Score: 0"]);

        let olive = swatch_center(&session, SnakeColor::Olive);
        session.handle_input(InputEvent::PointerDown(olive));
        let mut renderer = RecordingRenderer::default();
        session.draw(&mut renderer);
        assert_eq!(renderer.squares_on(Layer::Swatch).count(), 0);
        assert_eq!(renderer.squares_on(Layer::Overlay).count(), 0);
    }
}
