use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

/// Position of a slideshow that shows `per_view` slides at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    per_view: usize,
    index: usize,
}

impl CarouselState {
    pub fn new(len: usize, per_view: usize) -> Self {
        Self { len, per_view: per_view.max(1), index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    /// Last index a view can start at without running past the end.
    pub fn last_start(&self) -> usize {
        self.len.saturating_sub(self.per_view)
    }

    /// One pagination dot per reachable start.
    pub fn pages(&self) -> usize {
        if self.len == 0 { 0 } else { self.last_start() + 1 }
    }

    pub fn next(self) -> Self {
        let index = if self.index >= self.last_start() { 0 } else { self.index + 1 };
        Self { index, ..self }
    }

    pub fn prev(self) -> Self {
        let index = if self.index == 0 { self.last_start() } else { self.index - 1 };
        Self { index, ..self }
    }

    pub fn go_to(self, index: usize) -> Self {
        Self { index: index.min(self.last_start()), ..self }
    }

    /// Whether pagination dot `page` marks the current view.
    pub fn is_current(&self, page: usize) -> bool {
        self.index == page
    }

    pub fn with_per_view(self, per_view: usize) -> Self {
        let resized = Self { per_view: per_view.max(1), ..self };
        resized.go_to(self.index)
    }
}

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub src: String,
    pub caption: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
}

fn viewport_per_view() -> usize {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(config::slides_per_view)
        .unwrap_or(1)
}

/// Photo slideshow with prev/next buttons, pagination dots and autoplay.
/// Give it a `key` so a new slide set starts from the beginning.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let len = props.slides.len();
    let state = use_state(|| CarouselState::new(len, viewport_per_view()));

    {
        let state = state.clone();
        use_event_with_window("resize", move |_: Event| {
            let per_view = viewport_per_view();
            if per_view != state.per_view() {
                state.set((*state).with_per_view(per_view));
            }
        });
    }

    {
        let state = state.clone();
        use_interval(
            move || state.set((*state).next()),
            config::CAROUSEL_AUTOPLAY_MS,
        );
    }

    let on_prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set((*state).prev()))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set((*state).next()))
    };

    let slide_width = 100.0 / state.per_view() as f64;
    let track_style = format!(
        "transform: translateX(-{}%); transition: transform 500ms ease;",
        state.index() as f64 * slide_width
    );

    html! {
        <div class="carousel">
            <div class="carousel-viewport">
                <div class="carousel-track" style={track_style}>
                    { for props.slides.iter().enumerate().map(|(i, slide)| html! {
                        <div class="carousel-slide" key={i} style={format!("flex: 0 0 {}%;", slide_width)}>
                            <div class="gallery-item" style={format!("animation-delay: {}ms;", i * 100)}>
                                <div class="image-wrapper">
                                    <img src={slide.src.clone()} alt={slide.caption} loading="lazy" />
                                    <div class="image-overlay">
                                        <span class="image-caption">{slide.caption}</span>
                                    </div>
                                </div>
                            </div>
                        </div>
                    })}
                </div>
            </div>
            <button class="carousel-button prev" aria-label="上一张" onclick={on_prev}>{"‹"}</button>
            <button class="carousel-button next" aria-label="下一张" onclick={on_next}>{"›"}</button>
            <div class="carousel-pagination">
                { for (0..state.pages()).map(|page| {
                    let handle = state.clone();
                    let onclick = Callback::from(move |_: MouseEvent| handle.set((*handle).go_to(page)));
                    html! {
                        <button
                            key={page}
                            class={classes!("carousel-dot", state.is_current(page).then(|| "active"))}
                            {onclick}
                        />
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        let state = CarouselState::new(6, 1);
        assert_eq!(state.prev().index(), 5);
        let mut moved = state;
        for _ in 0..6 {
            moved = moved.next();
        }
        assert_eq!(moved.index(), 0);
    }

    #[test]
    fn multi_slide_views_stop_at_last_full_view() {
        let state = CarouselState::new(6, 3);
        assert_eq!(state.pages(), 4);
        assert_eq!(state.go_to(9).index(), 3);
        assert_eq!(state.go_to(3).next().index(), 0);
    }

    #[test]
    fn short_sequences_never_move() {
        let state = CarouselState::new(2, 3);
        assert_eq!(state.pages(), 1);
        assert_eq!(state.next().index(), 0);
        assert_eq!(state.prev().index(), 0);
    }

    #[test]
    fn resizing_keeps_index_in_range() {
        let state = CarouselState::new(4, 1).go_to(3);
        let wider = state.with_per_view(3);
        assert_eq!(wider.index(), 1);
        assert_eq!(wider.per_view(), 3);
        assert_eq!(CarouselState::new(4, 0).per_view(), 1);
    }

    #[test]
    fn exactly_one_dot_marks_the_current_view() {
        let state = CarouselState::new(6, 2).go_to(3);
        let current: Vec<_> = (0..state.pages()).filter(|page| state.is_current(*page)).collect();
        assert_eq!(current, [3]);

        let jumped = state.go_to(1);
        assert!(jumped.is_current(1));
        assert!(!jumped.is_current(3));
    }

    #[test]
    fn empty_carousel_has_no_pages() {
        assert_eq!(CarouselState::new(0, 2).pages(), 0);
    }
}
