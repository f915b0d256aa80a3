use std::time::{Duration, Instant};

/// Turns wall-clock time into game ticks at a fixed rate, independent
/// of how often the window redraws
pub struct Control {
    game_frame_duration: Duration,
    last_update: Instant,

    // amount of time which game frames have not yet
    // been accounted for (will be included next time
    // this in done), in frames
    remainder: f64,
}

impl Control {
    pub fn new(fps: f64) -> Self {
        Self {
            // never below 1ns
            game_frame_duration: Duration::from_nanos(((1_000_000_000.0 / fps) as u64).max(1)),
            last_update: Instant::now(),
            remainder: 0.,
        }
    }

    // call in update(), run a game tick this many times
    pub fn num_updates(&mut self) -> usize {
        let game_frames = self.last_update.elapsed().as_secs_f64()
            / self.game_frame_duration.as_secs_f64()
            + self.remainder;
        let updates = game_frames as usize;

        if updates > 0 {
            self.remainder = game_frames % 1.;
            self.last_update = Instant::now();
        }
        updates
    }
}
