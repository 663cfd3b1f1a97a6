use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::reveal::hooks::use_reveal;
use crate::reveal::transition::{reveal_style, Entrance, Stagger, Timing};

const MECHANISMS: [(IconKind, &str, &str); 4] = [
    (
        IconKind::Mountain,
        "山水人城和谐融合",
        "借助浣花溪天然水系和沿岸林地，将自然山水景观融入城市肌理，实现\"城在园中，园在城中\"。",
    ),
    (
        IconKind::Family,
        "以人为本宜居导向",
        "无障碍步道、亲水平台、休憩长椅等细节让不同人群都能便利使用，满足精神生活需要。",
    ),
    (
        IconKind::Money,
        "生态价值创造转化",
        "公园带来经济和社会效益，周边房产增值、商业配套升级，文创产业蓬勃发展。",
    ),
    (
        IconKind::Handshake,
        "公众参与共建共享",
        "通过志愿者服务、社区共治等方式吸纳公众参与管理，建立\"浣花溪守护者\"志愿服务队。",
    ),
];

const EXPERIENCES: [(&str, &str); 4] = [
    ("高位统筹规划", "政府高层面的重视和系统规划，将浣花溪等绿地纳入城市生态安全格局，确保生态空间连通性。"),
    ("精准对接需求", "充分考虑市民多样化需求，既提供绿色美景，又完善健身、休闲、文化等功能。"),
    ("文化赋能生态", "将历史文化融入生态空间，使公园既有自然之美又有人文之韵，提升文化认同。"),
    ("建立长效机制", "建立公园共建共管机制，形成政府主导、公众参与的良好治理模式。"),
];

const PROBLEMS: [(&str, &str); 4] = [
    ("高峰期管理压力", "节假日和周末人流密集，停车难、如厕排队等现象突出，服务承载能力接近饱和。"),
    ("公共配套细节", "直饮水点数量偏少，部分健身器材老化，儿童游乐设施缺乏，夜间照明存在盲区。"),
    ("宣传教育不足", "公众对\"公园城市\"理念和生态文明知识知之甚少，科普宣传功能不够强。"),
    ("生态保护矛盾", "如何在保证游客亲近自然的同时不干扰动物，需要更精细的边界管控。"),
];

const SUGGESTIONS: [(IconKind, &str, &str); 5] = [
    (IconKind::Robot, "智慧客流管理", "引入线上预约、限流措施平衡客流"),
    (IconKind::Tools, "完善配套设施", "增加直饮水点、更新健身器材"),
    (IconKind::Book, "加强生态宣传", "增设科普长廊，开发智能导览APP"),
    (IconKind::Tree, "生态管控监测", "划定保育核心区，完善环境监测"),
    (IconKind::Globe, "数字化展示", "建设网上生态展厅，扩大理念传播"),
];

const MECHANISM_CASCADE: Stagger = Stagger::new(300, 100, 500);
const TIMELINE_CASCADE: Stagger = Stagger::new(500, 100, 500);
const PROBLEM_CASCADE: Stagger = Stagger::new(600, 100, 500);
const SUGGESTION_CASCADE: Stagger = Stagger::new(800, 80, 500);

#[function_component(CaseStudy)]
pub fn case_study() -> Html {
    let section_ref = use_node_ref();
    let phase = use_reveal(section_ref.clone());
    let block = |delay_ms: u32| reveal_style(phase, Entrance::FadeUp(30.0), Timing::new(delay_ms, 600));

    html! {
        <section id="case" class="case-section" ref={section_ref}>
            <style>
                {r#"
                    .case-section {
                        background: var(--color-surface);
                    }
                    .subsection-title {
                        display: flex;
                        align-items: center;
                        gap: 10px;
                        color: var(--color-primary);
                        margin: 48px 0 24px;
                    }
                    .problems-title {
                        color: var(--color-warning);
                    }
                    .mechanisms-grid, .problems-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 20px;
                    }
                    .mechanism-card {
                        display: flex;
                        gap: 16px;
                        padding: 24px;
                        border-radius: var(--radius);
                        background: var(--color-bg);
                        transition: box-shadow 0.3s ease;
                    }
                    .mechanism-card:hover {
                        box-shadow: 0 12px 32px rgba(45, 90, 39, 0.12);
                    }
                    .mechanism-icon {
                        color: var(--color-primary);
                        flex-shrink: 0;
                    }
                    .mechanism-content h4, .problem-card h4 {
                        margin: 0 0 8px;
                    }
                    .mechanism-content p, .problem-card p {
                        margin: 0;
                        color: var(--color-text-muted);
                    }
                    .experience-timeline {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 20px;
                    }
                    .timeline-item {
                        text-align: center;
                    }
                    .timeline-marker span {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        background: var(--color-primary);
                        color: #fff;
                        font-weight: 700;
                    }
                    .timeline-content p {
                        color: var(--color-text-muted);
                        font-size: 0.95rem;
                    }
                    .problem-card {
                        padding: 24px;
                        border-radius: var(--radius);
                        border-left: 4px solid var(--color-warning);
                        background: rgba(192, 57, 43, 0.04);
                    }
                    .suggestions-flow {
                        display: grid;
                        grid-template-columns: repeat(5, 1fr);
                        gap: 16px;
                    }
                    .suggestion-item {
                        text-align: center;
                        padding: 20px 12px;
                        border-radius: var(--radius);
                        background: var(--color-bg);
                    }
                    .suggestion-icon {
                        color: var(--color-primary);
                        display: inline-flex;
                    }
                    .suggestion-item h4 {
                        margin: 8px 0;
                    }
                    .suggestion-item p {
                        margin: 0;
                        font-size: 0.85rem;
                        color: var(--color-text-muted);
                    }
                    .case-conclusion {
                        margin-top: 56px;
                        padding: 40px;
                        border-radius: var(--radius);
                        background: linear-gradient(135deg, var(--color-primary), var(--color-primary-light));
                        color: #fff;
                        text-align: center;
                    }
                    .conclusion-badge {
                        display: inline-block;
                        padding: 4px 16px;
                        border-radius: 999px;
                        background: var(--color-accent);
                        margin-bottom: 16px;
                    }
                    .case-conclusion blockquote {
                        margin: 0;
                        font-size: 1.15rem;
                    }
                    @media (max-width: 900px) {
                        .mechanisms-grid, .problems-grid { grid-template-columns: 1fr; }
                        .experience-timeline { grid-template-columns: repeat(2, 1fr); }
                        .suggestions-flow { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader
                    label="第四章"
                    title="案例剖析"
                    desc="\"生态+民生\"良性循环的实现机制与经验启示"
                    {phase}
                />

                <div class="mechanisms-section" style={block(200)}>
                    <h3 class="subsection-title">
                        <Icon kind={IconKind::CheckCircle} />
                        {"成功机制"}
                    </h3>
                    <div class="mechanisms-grid">
                        { for MECHANISMS.iter().enumerate().map(|(i, (icon, title, desc))| html! {
                            <div class="mechanism-card" key={i} style={reveal_style(phase, Entrance::FadeRight(30.0), MECHANISM_CASCADE.timing(i))}>
                                <span class="mechanism-icon"><Icon kind={*icon} /></span>
                                <div class="mechanism-content">
                                    <h4>{*title}</h4>
                                    <p>{*desc}</p>
                                </div>
                            </div>
                        })}
                    </div>
                </div>

                <div class="experience-section" style={block(400)}>
                    <h3 class="subsection-title">
                        <span class="title-icon"><Icon kind={IconKind::Book} /></span>
                        {"经验启示"}
                    </h3>
                    <div class="experience-timeline">
                        { for EXPERIENCES.iter().enumerate().map(|(i, (title, content))| html! {
                            <div class="timeline-item" key={i} style={reveal_style(phase, Entrance::FadeUp(20.0), TIMELINE_CASCADE.timing(i))}>
                                <div class="timeline-marker">
                                    <span>{(i + 1).to_string()}</span>
                                </div>
                                <div class="timeline-content">
                                    <h4>{*title}</h4>
                                    <p>{*content}</p>
                                </div>
                            </div>
                        })}
                    </div>
                </div>

                <div class="problems-section" style={block(500)}>
                    <h3 class="subsection-title problems-title">
                        <Icon kind={IconKind::AlertCircle} />
                        {"问题与不足"}
                    </h3>
                    <div class="problems-grid">
                        { for PROBLEMS.iter().enumerate().map(|(i, (title, desc))| html! {
                            <div class="problem-card" key={i} style={reveal_style(phase, Entrance::Zoom(0.95), PROBLEM_CASCADE.timing(i))}>
                                <h4>{*title}</h4>
                                <p>{*desc}</p>
                            </div>
                        })}
                    </div>
                </div>

                <div class="suggestions-section" style={block(700)}>
                    <h3 class="subsection-title">
                        <Icon kind={IconKind::ArrowRight} />
                        {"改进建议"}
                    </h3>
                    <div class="suggestions-flow">
                        { for SUGGESTIONS.iter().enumerate().map(|(i, (icon, title, desc))| html! {
                            <div class="suggestion-item" key={i} style={reveal_style(phase, Entrance::FadeUp(20.0), SUGGESTION_CASCADE.timing(i))}>
                                <span class="suggestion-icon"><Icon kind={*icon} /></span>
                                <h4>{*title}</h4>
                                <p>{*desc}</p>
                            </div>
                        })}
                    </div>
                </div>

                <div class="case-conclusion" style={reveal_style(phase, Entrance::Zoom(0.95), Timing::new(900, 600))}>
                    <div class="conclusion-badge">{"核心结论"}</div>
                    <blockquote>
                        {"浣花溪公园的发展经验印证了\""}<strong>{"生态惠民—民生促生态"}</strong>
                        {"\"的循环：投入生态建设带来民生收益，民众满意度提升促成更大的支持和参与，从而形成生态文明建设的社会共识。"}
                    </blockquote>
                </div>
            </div>
        </section>
    }
}
