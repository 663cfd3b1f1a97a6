use yew::prelude::*;

use crate::reveal::transition::{reveal_style, Entrance, RevealPhase, Timing};

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub label: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub phase: RevealPhase,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header" style={reveal_style(props.phase, Entrance::FadeUp(20.0), Timing::new(0, 600))}>
            <span class="section-label">{props.label}</span>
            <h2 class="section-title">{props.title}</h2>
            <p class="section-desc">{props.desc}</p>
        </div>
    }
}
