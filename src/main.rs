use log::info;
use yew::prelude::*;

mod config;
mod theme;
mod nav {
    pub mod sections;
    pub mod scroll_lock;
    pub mod smooth_scroll;
    pub mod controller;
    pub mod provider;
    pub mod navbar;
}
mod reveal {
    pub mod latch;
    pub mod transition;
    pub mod hooks;
}
mod components {
    pub mod icons;
    pub mod carousel;
    pub mod section_header;
    pub mod survey_chart;
}
mod sections {
    pub mod hero;
    pub mod theory;
    pub mod research;
    pub mod data;
    pub mod case_study;
    pub mod team;
}

use nav::{navbar::Navbar, provider::NavProvider};
use sections::{
    case_study::CaseStudy,
    data::DataAnalysis,
    hero::Hero,
    research::Research,
    team::Team,
    theory::Theory,
};
use theme::Theme;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Theme />
            <NavProvider>
                <Navbar />
                <main>
                    <Hero />
                    <Theory />
                    <Research />
                    <DataAnalysis />
                    <CaseStudy />
                    <Team />
                </main>
            </NavProvider>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
