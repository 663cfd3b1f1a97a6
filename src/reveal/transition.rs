//! Entrance transitions expressed as inline CSS. The browser's transition
//! engine does the animating; this module only decides the from-state, the
//! to-state and the timing for each element.

/// Where a region is in its one-shot reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet seen. Children sit in their from-state.
    Pending,
    /// Seen. Children transition to their resting state.
    Revealed,
    /// No way to observe visibility. Children render at rest with no
    /// transition at all.
    Immediate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    Fade,
    /// Rise from `px` below.
    FadeUp(f64),
    /// Slide in from `px` to the left.
    FadeRight(f64),
    /// Grow from `scale`.
    Zoom(f64),
}

impl Entrance {
    fn hidden_transform(self) -> Option<String> {
        match self {
            Entrance::Fade => None,
            Entrance::FadeUp(px) => Some(format!("translateY({}px)", px)),
            Entrance::FadeRight(px) => Some(format!("translateX({}px)", -px)),
            Entrance::Zoom(scale) => Some(format!("scale({})", scale)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Timing {
    pub const fn new(delay_ms: u32, duration_ms: u32) -> Self {
        Self { delay_ms, duration_ms }
    }
}

/// Cascading delays for elements of one group: `base + index * step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
    pub duration_ms: u32,
}

impl Stagger {
    pub const fn new(base_ms: u32, step_ms: u32, duration_ms: u32) -> Self {
        Self { base_ms, step_ms, duration_ms }
    }

    pub fn timing(&self, index: usize) -> Timing {
        let delay = self.base_ms.saturating_add(self.step_ms.saturating_mul(index as u32));
        Timing::new(delay, self.duration_ms)
    }
}

const EASE: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";

fn transition(properties: &[&str], timing: Timing) -> String {
    properties
        .iter()
        .map(|p| format!("{} {}ms {} {}ms", p, timing.duration_ms, EASE, timing.delay_ms))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Inline style for one element of a revealing region.
pub fn reveal_style(phase: RevealPhase, entrance: Entrance, timing: Timing) -> String {
    match phase {
        RevealPhase::Immediate => "opacity: 1; transform: none; transition: none;".to_string(),
        RevealPhase::Revealed => format!(
            "opacity: 1; transform: none; transition: {};",
            transition(&["opacity", "transform"], timing)
        ),
        RevealPhase::Pending => {
            let transform = entrance.hidden_transform().unwrap_or_else(|| "none".to_string());
            format!(
                "opacity: 0; transform: {}; transition: {};",
                transform,
                transition(&["opacity", "transform"], timing)
            )
        }
    }
}

/// Inline style for a progress bar that fills to `percent` once revealed.
pub fn fill_style(phase: RevealPhase, percent: f64, timing: Timing) -> String {
    let percent = percent.clamp(0.0, 100.0);
    match phase {
        RevealPhase::Immediate => format!("width: {}%; transition: none;", percent),
        RevealPhase::Revealed => {
            format!("width: {}%; transition: {};", percent, transition(&["width"], timing))
        }
        RevealPhase::Pending => format!("width: 0%; transition: {};", transition(&["width"], timing)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_base_plus_index_times_step() {
        let stagger = Stagger::new(300, 100, 500);
        let delays: Vec<u32> = (0..4).map(|i| stagger.timing(i).delay_ms).collect();
        assert_eq!(delays, [300, 400, 500, 600]);
        assert_eq!(stagger.timing(2), stagger.timing(2));
    }

    #[test]
    fn pending_hides_with_entrance_offset() {
        let style = reveal_style(RevealPhase::Pending, Entrance::FadeUp(30.0), Timing::new(0, 600));
        assert!(style.starts_with("opacity: 0; transform: translateY(30px);"));
    }

    #[test]
    fn revealed_rests_and_carries_delay() {
        let style = reveal_style(RevealPhase::Revealed, Entrance::Zoom(0.9), Timing::new(450, 500));
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("opacity 500ms"));
        assert!(style.contains(" 450ms"));
    }

    #[test]
    fn immediate_rests_without_transition() {
        for entrance in [Entrance::Fade, Entrance::FadeUp(20.0), Entrance::FadeRight(30.0), Entrance::Zoom(0.95)] {
            let style = reveal_style(RevealPhase::Immediate, entrance, Timing::new(900, 600));
            assert_eq!(style, "opacity: 1; transform: none; transition: none;");
        }
        assert_eq!(fill_style(RevealPhase::Immediate, 47.4, Timing::new(800, 1000)), "width: 47.4%; transition: none;");
    }

    #[test]
    fn fill_starts_empty_and_is_clamped() {
        assert!(fill_style(RevealPhase::Pending, 92.1, Timing::new(0, 1000)).starts_with("width: 0%;"));
        assert!(fill_style(RevealPhase::Revealed, 140.0, Timing::new(0, 1000)).starts_with("width: 100%;"));
    }

    #[test]
    fn slide_in_comes_from_the_left() {
        let style = reveal_style(RevealPhase::Pending, Entrance::FadeRight(30.0), Timing::new(0, 500));
        assert!(style.contains("translateX(-30px)"));
    }
}
