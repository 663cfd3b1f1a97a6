use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::js_sys::Date;

use crate::config;

/// A programmatic scroll from one offset to another over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollCommand {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to, duration_ms: config::SCROLL_DURATION_MS }
    }

    /// Offset `elapsed_ms` into the animation and whether it has finished.
    pub fn position_at(&self, elapsed_ms: f64) -> (f64, bool) {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return (self.to, true);
        }
        let t = (elapsed_ms / self.duration_ms).max(0.0);
        (self.from + (self.to - self.from) * ease_in_out_quad(t), false)
    }
}

pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Runs scroll commands against the window, one timer tick per frame.
/// Starting a new command supersedes whatever is in flight.
#[derive(Clone, Default)]
pub struct SmoothScroller {
    generation: Rc<Cell<u64>>,
}

impl SmoothScroller {
    pub fn start(&self, command: ScrollCommand) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        log::debug!("Smooth scroll {:.0} -> {:.0}", command.from, command.to);
        tick(self.generation.clone(), generation, command, Date::now());
    }

    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

fn tick(current: Rc<Cell<u64>>, generation: u64, command: ScrollCommand, started_at: f64) {
    if current.get() != generation {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let (offset, done) = command.position_at(Date::now() - started_at);
    window.scroll_to_with_x_and_y(0.0, offset);
    if done {
        return;
    }
    let timeout = Timeout::new(config::FRAME_MS, move || {
        tick(current, generation, command, started_at);
    });
    timeout.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let value = ease_in_out_quad(step as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn command_settles_on_target_after_duration() {
        let command = ScrollCommand::new(0.0, 1200.0);
        assert_eq!(command.position_at(0.0), (0.0, false));
        let (mid, done) = command.position_at(250.0);
        assert!(!done);
        assert!((mid - 600.0).abs() < 1e-9);
        assert_eq!(command.position_at(500.0), (1200.0, true));
        assert_eq!(command.position_at(10_000.0), (1200.0, true));
    }

    #[test]
    fn upward_scroll_interpolates_downwards() {
        let command = ScrollCommand::new(900.0, 100.0);
        let (early, _) = command.position_at(100.0);
        assert!(early < 900.0 && early > 100.0);
    }
}
