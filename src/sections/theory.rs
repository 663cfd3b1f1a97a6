use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::reveal::hooks::use_reveal;
use crate::reveal::transition::{reveal_style, Entrance, Stagger, Timing};

struct TheoryCard {
    icon: IconKind,
    title: &'static str,
    content: &'static str,
    highlight: &'static str,
}

const THEORY_CARDS: [TheoryCard; 4] = [
    TheoryCard {
        icon: IconKind::Book,
        title: "\"生态惠民\"价值导向",
        content: "习近平生态文明思想深刻揭示了生态环境与人民福祉的内在统一性。\"发展经济是为了民生，保护生态环境同样也是为了民生\"——这一重要论断打破了\"环保与发展对立\"的传统思维。",
        highlight: "良好生态环境是最普惠的民生福祉",
    },
    TheoryCard {
        icon: IconKind::Search,
        title: "公园城市理念",
        content: "2018年，习近平总书记在成都考察时首次提出\"公园城市\"理念，强调\"要突出公园城市特点，把生态价值考虑进去\"，实现\"城在园中、园在城中\"的空间重构。",
        highlight: "人城境业和谐统一",
    },
    TheoryCard {
        icon: IconKind::House,
        title: "成都实践创新",
        content: "成都建立全国首个市级公园城市建设管理局，颁布全国首部公园城市地方性法规，构建涵盖八大维度的公园城市建设指标体系。",
        highlight: "全国公园城市示范区",
    },
    TheoryCard {
        icon: IconKind::CheckCircle,
        title: "建设成效",
        content: "截至2024年底，成都全市建成各类公园1414个、绿道5327公里，人均公园绿地面积达15.3平方米，城市绿化覆盖率超45%。",
        highlight: "推窗见绿、出门入园",
    },
];

const KEY_POINTS: [(&str, &str); 4] = [
    ("人与自然", "和谐共生"),
    ("绿水青山", "就是金山银山"),
    ("生态环境", "最普惠民生"),
    ("山水林田湖草", "生命共同体"),
];

const CASCADE: Stagger = Stagger::new(0, 150, 600);

#[function_component(Theory)]
pub fn theory() -> Html {
    let section_ref = use_node_ref();
    let phase = use_reveal(section_ref.clone());

    html! {
        <section id="theory" class="theory-section" ref={section_ref}>
            <style>
                {r#"
                    .theory-section {
                        background: var(--color-bg);
                    }
                    .key-points-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 16px;
                        margin-bottom: 48px;
                    }
                    .key-point-item {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 20px;
                        border-radius: var(--radius);
                        background: linear-gradient(135deg, var(--color-primary), var(--color-primary-light));
                        color: #fff;
                    }
                    .key-label {
                        font-size: 0.9rem;
                        opacity: 0.85;
                    }
                    .key-value {
                        font-size: 1.2rem;
                        font-weight: 700;
                    }
                    .theory-cards {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 24px;
                    }
                    .theory-card {
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .theory-card:hover {
                        transform: translateY(-8px) !important;
                        box-shadow: 0 20px 40px rgba(45, 90, 39, 0.15);
                    }
                    .card-icon {
                        color: var(--color-primary);
                    }
                    .card-title {
                        margin: 12px 0;
                        color: var(--color-primary);
                    }
                    .card-content {
                        color: var(--color-text-muted);
                    }
                    .card-highlight {
                        margin-top: 16px;
                        padding: 10px 14px;
                        border-left: 3px solid var(--color-accent);
                        background: rgba(201, 162, 39, 0.08);
                        font-weight: 600;
                    }
                    .highlight-decoration {
                        color: var(--color-accent);
                        margin-right: 8px;
                    }
                    .theory-quote {
                        position: relative;
                        margin: 56px auto 0;
                        max-width: 820px;
                        padding: 40px 48px;
                        border-radius: var(--radius);
                        background: var(--color-surface);
                        box-shadow: var(--shadow-card);
                        font-size: 1.15rem;
                    }
                    .quote-decoration {
                        position: absolute;
                        top: -10px;
                        left: 20px;
                        font-size: 5rem;
                        color: var(--color-accent);
                        opacity: 0.3;
                    }
                    .quote-source {
                        text-align: right;
                        color: var(--color-text-muted);
                    }
                    .theory-bg-decoration .bg-circle {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(74, 124, 67, 0.06);
                    }
                    .bg-circle-1 { width: 400px; height: 400px; top: -120px; right: -120px; }
                    .bg-circle-2 { width: 280px; height: 280px; bottom: -80px; left: -80px; }
                    @media (max-width: 768px) {
                        .key-points-grid { grid-template-columns: repeat(2, 1fr); }
                        .theory-cards { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader
                    label="第一章"
                    title="理论基础"
                    desc="习近平生态文明思想引领下的\"生态惠民\"与公园城市实践"
                    {phase}
                />

                <div class="key-points-grid">
                    { for KEY_POINTS.iter().enumerate().map(|(i, (label, value))| html! {
                        <div class="key-point-item" key={i} style={reveal_style(phase, Entrance::FadeUp(30.0), CASCADE.timing(i))}>
                            <span class="key-label">{*label}</span>
                            <span class="key-value">{*value}</span>
                        </div>
                    })}
                </div>

                <div class="theory-cards">
                    { for THEORY_CARDS.iter().enumerate().map(|(i, card)| html! {
                        <div class="theory-card card" key={i} style={reveal_style(phase, Entrance::FadeUp(30.0), CASCADE.timing(i))}>
                            <div class="card-icon"><Icon kind={card.icon} size={28} /></div>
                            <h3 class="card-title">{card.title}</h3>
                            <p class="card-content">{card.content}</p>
                            <div class="card-highlight">
                                <span class="highlight-decoration">{"✦"}</span>
                                {card.highlight}
                            </div>
                        </div>
                    })}
                </div>

                <blockquote class="theory-quote" style={reveal_style(phase, Entrance::Zoom(0.95), Timing::new(600, 800))}>
                    <div class="quote-decoration">{"\""}</div>
                    <p>
                        {"生态兴则文明兴，生态衰则文明衰。把生态文明建设纳入\"五位一体\"总体布局，是中国共产党对人类文明发展规律的深刻总结和战略选择。"}
                    </p>
                    <div class="quote-source">
                        <span>{"—— 《习近平生态文明文选》"}</span>
                    </div>
                </blockquote>
            </div>

            <div class="theory-bg-decoration">
                <div class="bg-circle bg-circle-1"></div>
                <div class="bg-circle bg-circle-2"></div>
            </div>
        </section>
    }
}
