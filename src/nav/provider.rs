use log::info;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::controller::{NavController, NavState};
use super::scroll_lock::BodyScrollLock;
use super::sections::{SectionRegion, SectionRegistry, SECTIONS};
use super::smooth_scroll::SmoothScroller;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Activate(&'static str),
    /// A link inside the mobile menu.
    MenuLink(&'static str),
    ToggleMenu,
    CloseMenu,
}

/// What the navbar and in-page links see of the navigation controller.
#[derive(Clone, PartialEq)]
pub struct NavContext {
    pub state: NavState,
    pub dispatch: Callback<NavAction>,
}

fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Measures every section anchor present in the document. Missing anchors
/// are left out, which the controller treats as "not intersecting".
fn measure_regions() -> Vec<SectionRegion> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let scroll = scroll_offset();
    SECTIONS
        .iter()
        .filter_map(|section| {
            let rect = document.get_element_by_id(section.id)?.get_bounding_client_rect();
            Some(SectionRegion::new(section.id, rect.top() + scroll, rect.height()))
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct NavProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the navigation controller for the lifetime of the page and feeds it
/// window scroll events.
#[function_component(NavProvider)]
pub fn nav_provider(props: &NavProviderProps) -> Html {
    let controller = use_mut_ref(|| NavController::new(SectionRegistry::page(), BodyScrollLock));
    let scroller = use_mut_ref(SmoothScroller::default);
    let state = use_state_eq(|| controller.borrow().state());

    let sample = {
        let controller = controller.clone();
        let state = state.clone();
        move || {
            let snapshot = {
                let mut nav = controller.borrow_mut();
                nav.on_scroll(scroll_offset(), &measure_regions());
                nav.state()
            };
            state.set(snapshot);
        }
    };

    {
        let sample = sample.clone();
        use_event_with_window("scroll", move |_: Event| sample());
    }

    // Initial check, the page may be restored mid-scroll.
    {
        let scroller = scroller.clone();
        use_effect_with_deps(
            move |_| {
                info!("Navigation controller mounted");
                sample();
                move || scroller.borrow().cancel()
            },
            (),
        );
    }

    let dispatch = {
        let controller = controller.clone();
        let state = state.clone();
        Callback::from(move |action: NavAction| {
            let (command, snapshot) = {
                let mut nav = controller.borrow_mut();
                let command = match action {
                    NavAction::Activate(id) => nav.activate(id, scroll_offset(), &measure_regions()),
                    NavAction::MenuLink(id) => nav.navigate_from_menu(id, scroll_offset(), &measure_regions()),
                    NavAction::ToggleMenu => {
                        nav.toggle_menu();
                        None
                    }
                    NavAction::CloseMenu => {
                        nav.close_menu();
                        None
                    }
                };
                (command, nav.state())
            };
            state.set(snapshot);
            // The menu lock is already released by the time the scroll starts.
            if let Some(command) = command {
                scroller.borrow().start(command);
            }
        })
    };

    let context = NavContext { state: *state, dispatch };

    html! {
        <ContextProvider<NavContext> {context}>
            { for props.children.iter() }
        </ContextProvider<NavContext>>
    }
}
