use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::nav::provider::{NavAction, NavContext};
use crate::reveal::hooks::use_mount_reveal;
use crate::reveal::transition::{reveal_style, Entrance, Timing};

const LEAF_COUNT: usize = 12;

struct Stat {
    value: &'static str,
    unit: &'static str,
    label: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { value: "32.32", unit: "公顷", label: "公园面积" },
    Stat { value: "1.2", unit: "亿元", label: "建设投资" },
    Stat { value: "5", unit: "星级", label: "公园等级" },
];

/// Clamped linear map of `value` from `input` onto `output`.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_end;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// Stable pseudo-random fraction in [0, 1) for leaf `index`.
fn scatter(index: usize, salt: u64) -> f64 {
    let mut x = (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ salt;
    x ^= x >> 29;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 32;
    (x % 10_000) as f64 / 10_000.0
}

fn leaf_style(index: usize) -> String {
    let left = scatter(index, 1) * 100.0;
    let drift = scatter(index, 2) * 200.0 - 100.0;
    let duration = 15.0 + scatter(index, 3) * 10.0;
    let delay = scatter(index, 4) * 10.0;
    format!(
        "left: {:.2}%; --drift: {:.0}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
        left, drift, duration, delay
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let phase = use_mount_reveal();
    let scroll_y = use_state_eq(|| 0.0_f64);
    let nav = use_context::<NavContext>();

    {
        let scroll_y = scroll_y.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                scroll_y.set(y);
            }
        });
    }

    let go_to = |id: &'static str| {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(nav) = &nav {
                nav.dispatch.emit(NavAction::Activate(id));
            }
        })
    };

    let bg_y = interpolate(*scroll_y, (0.0, 500.0), (0.0, 150.0));
    let content_opacity = interpolate(*scroll_y, (0.0, 300.0), (1.0, 0.0));
    let enter = |entrance: Entrance, delay_ms: u32, duration_ms: u32| {
        reveal_style(phase, entrance, Timing::new(delay_ms, duration_ms))
    };

    html! {
        <section id="hero" class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        text-align: center;
                        padding: 0;
                    }
                    .hero-bg {
                        position: absolute;
                        inset: -10% 0 0 0;
                        background: linear-gradient(135deg, #1f4020 0%, #2d5a27 45%, #4a7c43 100%);
                        will-change: transform;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 30% 20%, rgba(255, 255, 255, 0.12), transparent 60%);
                    }
                    .floating-leaves .leaf {
                        position: absolute;
                        top: -100px;
                        font-size: 1.5rem;
                        opacity: 0.6;
                        animation-name: leaf-fall;
                        animation-timing-function: linear;
                        animation-iteration-count: infinite;
                    }
                    @keyframes leaf-fall {
                        from { transform: translate(0, 0) rotate(0deg); }
                        to { transform: translate(var(--drift), calc(100vh + 200px)) rotate(360deg); }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 900px;
                        padding: 0 24px;
                    }
                    .hero-badge {
                        display: inline-flex;
                        gap: 8px;
                        padding: 8px 20px;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.12);
                        border: 1px solid rgba(255, 255, 255, 0.25);
                        font-size: 0.9rem;
                    }
                    .hero-title {
                        font-size: clamp(2.2rem, 5vw, 3.8rem);
                        line-height: 1.25;
                        margin: 28px 0 16px;
                    }
                    .hero-title .title-line,
                    .hero-title .title-highlight {
                        display: block;
                    }
                    .hero-title .title-highlight {
                        color: var(--color-accent);
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        opacity: 0.9;
                    }
                    .hero-quote blockquote {
                        font-size: 1.4rem;
                        font-style: italic;
                        margin: 32px 0 4px;
                    }
                    .hero-quote cite {
                        opacity: 0.8;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 16px;
                        justify-content: center;
                        margin: 36px 0;
                    }
                    .hero-actions a {
                        text-decoration: none;
                    }
                    .hero-stats {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 32px;
                    }
                    .stat-item {
                        display: flex;
                        flex-direction: column;
                    }
                    .stat-value {
                        font-size: 2rem;
                        font-weight: 700;
                        color: var(--color-accent);
                    }
                    .stat-unit, .stat-label {
                        font-size: 0.85rem;
                        opacity: 0.85;
                    }
                    .stat-divider {
                        width: 1px;
                        height: 48px;
                        background: rgba(255, 255, 255, 0.3);
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 32px;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 1;
                    }
                    .scroll-indicator a {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                        font-size: 0.85rem;
                    }
                    .scroll-indicator .bounce {
                        animation: bounce 1.5s ease-in-out infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }
                "#}
            </style>

            <div class="hero-bg" style={format!("transform: translateY({:.1}px);", bg_y)}>
                <div class="hero-overlay"></div>
                <div class="floating-leaves">
                    { for (0..LEAF_COUNT).map(|i| html! {
                        <div class="leaf" key={i} style={leaf_style(i)}>{"🍃"}</div>
                    })}
                </div>
            </div>

            <div class="hero-content" style={format!("opacity: {:.3};", content_opacity)}>
                <div class="hero-badge" style={enter(Entrance::FadeUp(20.0), 200, 600)}>
                    <span class="badge-icon">{"🌿"}</span>
                    <span>{"习近平新时代中国特色社会主义思想概论 · 实践作业"}</span>
                </div>

                <h1 class="hero-title" style={enter(Entrance::FadeUp(30.0), 400, 800)}>
                    <span class="title-line">{"习近平生态文明思想的"}</span>
                    <span class="title-highlight">{"成都实践样本"}</span>
                </h1>

                <p class="hero-subtitle" style={enter(Entrance::FadeUp(30.0), 600, 800)}>
                    {"公园城市建设中的 \"生态 + 民生\" 共生之道"}
                </p>

                <div class="hero-quote" style={enter(Entrance::Fade, 800, 1000)}>
                    <blockquote>{"\"绿水青山就是金山银山\""}</blockquote>
                    <cite>{"—— 习近平"}</cite>
                </div>

                <div class="hero-actions" style={enter(Entrance::FadeUp(20.0), 1000, 600)}>
                    <a href="#theory" class="btn btn-primary" onclick={go_to("theory")}>{"开始探索"}</a>
                    <a href="#research" class="btn btn-outline" onclick={go_to("research")}>{"查看调研"}</a>
                </div>

                <div class="hero-stats" style={enter(Entrance::Fade, 1200, 800)}>
                    { for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <>
                            if i > 0 {
                                <div class="stat-divider"></div>
                            }
                            <div class="stat-item">
                                <span class="stat-value">{stat.value}</span>
                                <span class="stat-unit">{stat.unit}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        </>
                    })}
                </div>
            </div>

            <div class="scroll-indicator" style={enter(Entrance::Fade, 1500, 600)}>
                <a href="#theory" onclick={go_to("theory")}>
                    <div class="bounce"><Icon kind={IconKind::ChevronDown} size={28} /></div>
                    <span>{"向下滚动"}</span>
                </a>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_clamps_to_output_range() {
        assert_eq!(interpolate(-50.0, (0.0, 500.0), (0.0, 150.0)), 0.0);
        assert_eq!(interpolate(250.0, (0.0, 500.0), (0.0, 150.0)), 75.0);
        assert_eq!(interpolate(9000.0, (0.0, 500.0), (0.0, 150.0)), 150.0);
    }

    #[test]
    fn interpolate_handles_descending_output() {
        assert_eq!(interpolate(0.0, (0.0, 300.0), (1.0, 0.0)), 1.0);
        assert_eq!(interpolate(150.0, (0.0, 300.0), (1.0, 0.0)), 0.5);
        assert_eq!(interpolate(600.0, (0.0, 300.0), (1.0, 0.0)), 0.0);
    }

    #[test]
    fn leaves_are_deterministic_and_in_range() {
        for i in 0..LEAF_COUNT {
            let value = scatter(i, 1);
            assert!((0.0..1.0).contains(&value));
            assert_eq!(leaf_style(i), leaf_style(i));
        }
    }
}
