use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::latch::RevealLatch;
use super::transition::RevealPhase;
use crate::config;

fn intersection_supported() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Phase a region starts in. Without an observer it renders at rest from the
/// very first frame.
fn initial_phase(observer_available: bool) -> RevealPhase {
    if observer_available {
        RevealPhase::Pending
    } else {
        RevealPhase::Immediate
    }
}

fn fail_open(reason: &str) {
    gloo_console::warn!(format!("Entrance animations disabled: {}", reason));
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Reveals `node` the first time it scrolls into view and never hides it
/// again. Without `IntersectionObserver` the region is shown at rest.
#[hook]
pub fn use_reveal(node: NodeRef) -> RevealPhase {
    let phase = use_state(|| initial_phase(intersection_supported()));
    let latch = use_mut_ref(RevealLatch::default);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut teardown: Option<(IntersectionObserver, ObserverCallback)> = None;

                if latch.borrow().is_fired() {
                    // Already revealed; a new node does not hide it again.
                } else if !intersection_supported() {
                    fail_open("IntersectionObserver unavailable");
                    latch.borrow_mut().force();
                    phase.set(RevealPhase::Immediate);
                } else if let Some(element) = node.cast::<Element>() {
                    let callback = {
                        let phase = phase.clone();
                        let latch = latch.clone();
                        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                            let visible = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|e| e.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if latch.borrow_mut().observe(visible) {
                                debug!("Region entered viewport, revealing");
                                observer.disconnect();
                                phase.set(RevealPhase::Revealed);
                            }
                        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
                    };

                    let init = IntersectionObserverInit::new();
                    init.set_root_margin(config::REVEAL_ROOT_MARGIN);
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            observer.observe(&element);
                            teardown = Some((observer, callback));
                        }
                        Err(_) => {
                            fail_open("IntersectionObserver could not be created");
                            latch.borrow_mut().force();
                            phase.set(RevealPhase::Immediate);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = teardown {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *phase
}

/// Reveals right after the first render, for content that is on screen when
/// the page loads.
#[hook]
pub fn use_mount_reveal() -> RevealPhase {
    let phase = use_state(|| RevealPhase::Pending);
    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                phase.set(RevealPhase::Revealed);
                || ()
            },
            (),
        );
    }
    *phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::transition::{reveal_style, Entrance, Timing};

    #[test]
    fn missing_observer_starts_at_rest() {
        let phase = initial_phase(false);
        assert_eq!(phase, RevealPhase::Immediate);
        let style = reveal_style(phase, Entrance::FadeUp(30.0), Timing::new(300, 600));
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("transition: none"));
    }

    #[test]
    fn available_observer_starts_hidden() {
        let phase = initial_phase(true);
        assert_eq!(phase, RevealPhase::Pending);
        let style = reveal_style(phase, Entrance::Fade, Timing::new(0, 600));
        assert!(style.contains("opacity: 0"));
    }
}
