use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::components::survey_chart::SurveyChart;
use crate::config::resource_url;
use crate::reveal::hooks::use_reveal;
use crate::reveal::transition::{fill_style, reveal_style, Entrance, Stagger, Timing};

/// One questionnaire result. Percentages are pre-computed from the 38
/// returned questionnaires.
#[derive(Debug, PartialEq)]
pub struct SurveyItem {
    pub id: &'static str,
    pub title: &'static str,
    pub short: &'static str,
    pub image: &'static str,
    pub insight: &'static str,
    pub percentage: f64,
    pub is_low: bool,
}

pub static SURVEY: [SurveyItem; 10] = [
    SurveyItem {
        id: "frequency",
        title: "公园使用频率",
        short: "频率",
        image: "收集表可视化/公园使用频率收集图.png",
        insight: "每月至少一次占比最高（47.4%），但高频日常化使用仍不足",
        percentage: 47.4,
        is_low: false,
    },
    SurveyItem {
        id: "satisfaction",
        title: "生态环境满意度",
        short: "生态",
        image: "收集表可视化/生态环境满意度收集图.png",
        insight: "满意率高达92.1%，生态质量得到广泛认可",
        percentage: 92.1,
        is_low: false,
    },
    SurveyItem {
        id: "impact",
        title: "环境对生活质量影响",
        short: "生活",
        image: "收集表可视化/环境影响收集图.png",
        insight: "92.1%受访者认为环境改善提升了生活质量",
        percentage: 92.1,
        is_low: false,
    },
    SurveyItem {
        id: "activities",
        title: "活动内容",
        short: "活动",
        image: "收集表可视化/活动内容收集图.png",
        insight: "散步休憩（71.1%）与体育锻炼（55.3%）为主流选择",
        percentage: 71.1,
        is_low: false,
    },
    SurveyItem {
        id: "duration",
        title: "停留时长",
        short: "时长",
        image: "收集表可视化/停留时长调查收集图.png",
        insight: "1-2小时占比最高（55.3%），空间体验感良好",
        percentage: 55.3,
        is_low: false,
    },
    SurveyItem {
        id: "service",
        title: "公共服务设施满意度",
        short: "设施",
        image: "收集表可视化/公共服务设施调查收集图.png",
        insight: "满意率达89.5%，设施保障较为完善",
        percentage: 89.5,
        is_low: false,
    },
    SurveyItem {
        id: "culture",
        title: "文化氛围体验",
        short: "文化",
        image: "收集表可视化/文化氛围体验调查收集图.png",
        insight: "78.9%认同文化特色，但感知深度不均衡",
        percentage: 78.9,
        is_low: false,
    },
    SurveyItem {
        id: "awareness",
        title: "理念知晓情况",
        short: "知晓",
        image: "收集表可视化/理念知晓情况收集图.png",
        insight: "仅15.8%了解并认同公园城市/生态文明理念",
        percentage: 15.8,
        is_low: true,
    },
    SurveyItem {
        id: "improvement",
        title: "改进民意调查",
        short: "改进",
        image: "收集表可视化/改进民意调查情况收集图.png",
        insight: "环境卫生维护（44.7%）与配套设施完善（36.8%）需求突出",
        percentage: 44.7,
        is_low: false,
    },
    SurveyItem {
        id: "happiness",
        title: "幸福感提升",
        short: "幸福",
        image: "收集表可视化/幸福感提升情况收集图.png",
        insight: "86.8%认为公园对幸福感提升有作用",
        percentage: 86.8,
        is_low: false,
    },
];

struct KeyFinding {
    label: &'static str,
    value: &'static str,
    icon: IconKind,
    is_low: bool,
}

const KEY_FINDINGS: [KeyFinding; 4] = [
    KeyFinding { label: "有效样本", value: "38份", icon: IconKind::Clipboard, is_low: false },
    KeyFinding { label: "生态满意度", value: "92.1%", icon: IconKind::Leaf, is_low: false },
    KeyFinding { label: "幸福感提升", value: "86.8%", icon: IconKind::Smile, is_low: false },
    KeyFinding { label: "理念知晓率", value: "15.8%", icon: IconKind::Bulb, is_low: true },
];

const FINDING_CASCADE: Stagger = Stagger::new(300, 100, 500);
const CARD_CASCADE: Stagger = Stagger::new(500, 50, 500);
const FILL_CASCADE: Stagger = Stagger::new(800, 50, 1000);

/// Clicking the selected card clears the selection.
fn toggle_selection(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(DataAnalysis)]
pub fn data_analysis() -> Html {
    let section_ref = use_node_ref();
    let phase = use_reveal(section_ref.clone());
    let selected_chart = use_state(|| None::<usize>);

    html! {
        <section id="data" class="data-section" ref={section_ref}>
            <style>
                {r#"
                    .data-section {
                        background: var(--color-bg);
                    }
                    .key-findings {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 20px;
                        margin-bottom: 48px;
                    }
                    .finding-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 24px;
                        border-radius: var(--radius);
                        background: var(--color-surface);
                        box-shadow: var(--shadow-card);
                    }
                    .finding-icon {
                        color: var(--color-primary);
                    }
                    .finding-value {
                        font-size: 2rem;
                        font-weight: 700;
                        color: var(--color-primary);
                    }
                    .finding-label {
                        color: var(--color-text-muted);
                    }
                    .finding-low .finding-value,
                    .finding-low .finding-icon {
                        color: var(--color-warning);
                    }
                    .finding-warning {
                        position: absolute;
                        top: 10px;
                        right: 10px;
                        padding: 2px 8px;
                        border-radius: 999px;
                        font-size: 0.75rem;
                        background: rgba(192, 57, 43, 0.12);
                        color: var(--color-warning);
                    }
                    .survey-chart {
                        margin-bottom: 48px;
                    }
                    .charts-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 24px;
                    }
                    .chart-card {
                        cursor: pointer;
                        transition: box-shadow 0.3s ease;
                    }
                    .chart-card:hover {
                        box-shadow: 0 20px 40px rgba(45, 90, 39, 0.15);
                    }
                    .chart-card.selected {
                        grid-column: 1 / -1;
                        outline: 2px solid var(--color-primary);
                    }
                    .chart-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: baseline;
                    }
                    .chart-title {
                        margin: 0;
                    }
                    .percentage-value {
                        font-size: 1.8rem;
                        font-weight: 700;
                        color: var(--color-primary);
                    }
                    .percentage-low .percentage-value {
                        color: var(--color-warning);
                    }
                    .chart-image-wrapper {
                        margin: 16px 0;
                        border-radius: 12px;
                        overflow: hidden;
                        background: var(--color-bg);
                    }
                    .chart-insight {
                        display: flex;
                        gap: 8px;
                        color: var(--color-text-muted);
                    }
                    .chart-insight p {
                        margin: 0;
                    }
                    .chart-progress {
                        margin-top: 16px;
                        height: 8px;
                        border-radius: 4px;
                        background: rgba(45, 90, 39, 0.1);
                        overflow: hidden;
                    }
                    .progress-bar {
                        height: 100%;
                        background: linear-gradient(90deg, var(--color-primary), var(--color-primary-light));
                    }
                    .progress-low {
                        background: var(--color-warning);
                    }
                    .data-conclusion {
                        margin-top: 56px;
                        text-align: center;
                    }
                    .conclusion-icon {
                        color: var(--color-primary);
                        display: inline-flex;
                    }
                    .conclusion-highlight {
                        margin-top: 16px;
                        padding: 16px;
                        border-radius: 12px;
                        background: rgba(201, 162, 39, 0.1);
                    }
                    .conclusion-highlight em {
                        color: var(--color-primary);
                        font-weight: 600;
                    }
                    @media (max-width: 768px) {
                        .key-findings { grid-template-columns: repeat(2, 1fr); }
                        .charts-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader
                    label="第三章"
                    title="数据分析"
                    desc="基于问卷调查的公众认知与满意度研究"
                    {phase}
                />

                <div class="key-findings">
                    { for KEY_FINDINGS.iter().enumerate().map(|(i, finding)| html! {
                        <div
                            key={i}
                            class={classes!("finding-card", finding.is_low.then(|| "finding-low"))}
                            style={reveal_style(phase, Entrance::Zoom(0.9), FINDING_CASCADE.timing(i))}
                        >
                            <span class="finding-icon"><Icon kind={finding.icon} size={24} /></span>
                            <span class="finding-value">{finding.value}</span>
                            <span class="finding-label">{finding.label}</span>
                            if finding.is_low {
                                <span class="finding-warning">{"需改进"}</span>
                            }
                        </div>
                    })}
                </div>

                <div style={reveal_style(phase, Entrance::Fade, Timing::new(400, 600))}>
                    <SurveyChart items={&SURVEY[..]} />
                </div>

                <div class="charts-grid">
                    { for SURVEY.iter().enumerate().map(|(i, item)| {
                        let onclick = {
                            let selected_chart = selected_chart.clone();
                            Callback::from(move |_: MouseEvent| {
                                selected_chart.set(toggle_selection(*selected_chart, i));
                            })
                        };
                        html! {
                            <div
                                key={item.id}
                                class={classes!(
                                    "chart-card",
                                    "card",
                                    item.is_low.then(|| "chart-low"),
                                    (*selected_chart == Some(i)).then(|| "selected")
                                )}
                                style={reveal_style(phase, Entrance::FadeUp(30.0), CARD_CASCADE.timing(i))}
                                {onclick}
                            >
                                <div class="chart-header">
                                    <h4 class="chart-title">{item.title}</h4>
                                    <div class={classes!("chart-percentage", item.is_low.then(|| "percentage-low"))}>
                                        <span class="percentage-value">{item.percentage.to_string()}</span>
                                        <span class="percentage-symbol">{"%"}</span>
                                    </div>
                                </div>
                                <div class="chart-image-wrapper">
                                    <img src={resource_url(item.image)} alt={item.title} loading="lazy" />
                                </div>
                                <div class="chart-insight">
                                    <span class="insight-icon"><Icon kind={IconKind::Bulb} size={20} /></span>
                                    <p>{item.insight}</p>
                                </div>
                                <div class="chart-progress">
                                    <div
                                        class={classes!("progress-bar", item.is_low.then(|| "progress-low"))}
                                        style={fill_style(phase, item.percentage, FILL_CASCADE.timing(i))}
                                    />
                                </div>
                            </div>
                        }
                    })}
                </div>

                <div class="data-conclusion card" style={reveal_style(phase, Entrance::FadeUp(30.0), Timing::new(800, 600))}>
                    <div class="conclusion-icon"><Icon kind={IconKind::Chart} size={32} /></div>
                    <h3>{"调研结论"}</h3>
                    <p>
                        {"问卷表明浣花溪公园在"}<strong>{"生态环境"}</strong>{"、"}<strong>{"服务体验"}</strong>
                        {"与"}<strong>{"民生幸福感"}</strong>{"方面表现突出，但青年群体到访频率不高、生态文明与公园城市理念认知偏弱。"}
                    </p>
                    <div class="conclusion-highlight">
                        {"因此，后续提升的关键不只是\"把公园做得更好\"，更在于"}
                        <em>{"把公园讲得更清楚、传得更广、让更多人愿意来"}</em>
                        {"。"}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_percentages_are_percentages() {
        for item in SURVEY.iter() {
            assert!((0.0..=100.0).contains(&item.percentage), "{}", item.id);
        }
    }

    #[test]
    fn only_awareness_is_flagged_low() {
        let low: Vec<_> = SURVEY.iter().filter(|item| item.is_low).map(|item| item.id).collect();
        assert_eq!(low, ["awareness"]);
    }

    #[test]
    fn selecting_a_card_twice_clears_it() {
        let selected = toggle_selection(None, 3);
        assert_eq!(selected, Some(3));
        assert_eq!(toggle_selection(selected, 5), Some(5));
        assert_eq!(toggle_selection(Some(5), 5), None);
    }
}
