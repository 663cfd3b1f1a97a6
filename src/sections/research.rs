use yew::prelude::*;

use crate::components::carousel::{Carousel, Slide};
use crate::components::icons::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::config::resource_url;
use crate::reveal::hooks::use_reveal;
use crate::reveal::transition::{reveal_style, Entrance, Stagger, Timing};

pub struct Photo {
    pub path: &'static str,
    pub caption: &'static str,
}

pub struct PhotoCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub photos: &'static [Photo],
}

pub const PHOTO_CATEGORIES: [PhotoCategory; 3] = [
    PhotoCategory {
        id: "nature",
        title: "人与自然",
        subtitle: "生态和谐共生",
        photos: &[
            Photo { path: "人与自然/争抢鱼食的锦鲤.jpg", caption: "争抢鱼食的锦鲤" },
            Photo { path: "人与自然/植被茂密的林间溪流.jpg", caption: "植被茂密的林间溪流" },
            Photo { path: "人与自然/绿树环绕的静谧河道.jpg", caption: "绿树环绕的静谧河道" },
            Photo { path: "人与自然/湖畔荷叶.jpg", caption: "湖畔荷叶" },
            Photo { path: "人与自然/园林白墙与街边一角.jpg", caption: "园林白墙与街边一角" },
            Photo { path: "人与自然/池边观赏锦鲤.jpg", caption: "池边观赏锦鲤" },
        ],
    },
    PhotoCategory {
        id: "humanistic",
        title: "人文关怀",
        subtitle: "以人为本服务",
        photos: &[
            Photo { path: "人文关怀/人车分流的专用步道.jpg", caption: "人车分流的专用步道" },
            Photo { path: "人文关怀/免费开水.jpg", caption: "便民免费开水供应" },
            Photo { path: "人文关怀/好看的公共厕所.jpg", caption: "美观的公共厕所设施" },
            Photo { path: "人文关怀/好看的公共厕所2.jpg", caption: "精心设计的公厕" },
        ],
    },
    PhotoCategory {
        id: "culture",
        title: "文化承载",
        subtitle: "诗意栖居之地",
        photos: &[
            Photo { path: "文化承载/杜甫草堂大门.jpg", caption: "杜甫草堂大门" },
            Photo { path: "文化承载/古典园林亭子.jpg", caption: "古典园林亭子" },
            Photo { path: "文化承载/岩壁石刻诗词群.jpg", caption: "岩壁石刻诗词" },
            Photo { path: "文化承载/艾青诗歌石刻.jpg", caption: "艾青诗歌石刻" },
            Photo { path: "文化承载/爱情诗篇书籍雕塑.jpg", caption: "诗歌书籍雕塑" },
            Photo { path: "文化承载/我们观赏人物雕像.jpg", caption: "小组成员观赏雕像" },
        ],
    },
];

const HIGHLIGHTS: [(IconKind, &str, &str); 4] = [
    (IconKind::Tree, "城市绿心", "32.32公顷开放式城市森林公园"),
    (IconKind::Bird, "生态修复", "白鹭、灰鹭等水鸟栖息嬉戏"),
    (IconKind::Scroll, "文化融合", "杜甫诗歌文化与现代生态结合"),
    (IconKind::House, "社区共生", "周边居民共享绿色福祉"),
];

const OVERVIEW: [(&str, &str); 4] = [
    (
        "🏞️ 公园概况",
        "浣花溪公园坐落于成都市青羊区浣花溪畔，因唐代女诗人薛涛常于此浣纱而得名。园区占地约32公顷，以\"山水交融、草木繁茂\"为基调，是成都市规模最大的开放式城市森林公园。",
    ),
    (
        "🌿 生态屏障",
        "公园作为城市\"绿肺\"与\"海绵体\"，兼具水源涵养、雨水滞蓄与地下水补给功能，湖面常有野鸭、白鹭、灰鹭等水鸟栖息，印证了生物多样性的显著恢复。",
    ),
    (
        "👥 民生服务",
        "公园实行全天免费开放（6:00–22:00），园内设施完备，滨水步道、健身路径、太极广场等运动设施覆盖全龄需求，真正实现\"推窗见绿、出门入园\"。",
    ),
    (
        "🏘️ 社区共生",
        "浣花溪公园带动了周边片区的更新与人居品质提升，邻里互动更加频繁，社区凝聚力明显增强，真正实现了生态建设与民生改善的\"双赢\"。",
    ),
];

const HIGHLIGHT_CASCADE: Stagger = Stagger::new(300, 100, 500);

fn slides(category: &PhotoCategory) -> Vec<Slide> {
    category
        .photos
        .iter()
        .map(|photo| Slide { src: resource_url(photo.path), caption: photo.caption })
        .collect()
}

#[function_component(Research)]
pub fn research() -> Html {
    let section_ref = use_node_ref();
    let phase = use_reveal(section_ref.clone());
    let active_category = use_state(|| 0usize);

    let category = &PHOTO_CATEGORIES[(*active_category).min(PHOTO_CATEGORIES.len() - 1)];

    html! {
        <section id="research" class="research-section" ref={section_ref}>
            <style>
                {r#"
                    .research-section {
                        background: var(--color-surface);
                    }
                    .research-highlights {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 20px;
                        margin-bottom: 48px;
                    }
                    .highlight-item {
                        text-align: center;
                        padding: 24px 16px;
                        border-radius: var(--radius);
                        background: var(--color-bg);
                        transition: transform 0.3s ease;
                    }
                    .highlight-item:hover {
                        transform: translateY(-5px) scale(1.02) !important;
                    }
                    .highlight-icon {
                        color: var(--color-primary);
                        display: inline-flex;
                    }
                    .highlight-title {
                        margin: 10px 0 6px;
                    }
                    .highlight-desc {
                        margin: 0;
                        font-size: 0.9rem;
                        color: var(--color-text-muted);
                    }
                    .category-tabs {
                        display: flex;
                        justify-content: center;
                        gap: 16px;
                        margin-bottom: 32px;
                        flex-wrap: wrap;
                    }
                    .category-tab {
                        display: flex;
                        flex-direction: column;
                        padding: 12px 28px;
                        border-radius: var(--radius);
                        border: 2px solid rgba(45, 90, 39, 0.2);
                        background: transparent;
                        cursor: pointer;
                        color: var(--color-text);
                        transition: all 0.2s ease;
                    }
                    .category-tab.active {
                        background: var(--color-primary);
                        border-color: var(--color-primary);
                        color: #fff;
                    }
                    .tab-title {
                        font-weight: 700;
                    }
                    .tab-subtitle {
                        font-size: 0.8rem;
                        opacity: 0.8;
                    }
                    .carousel {
                        position: relative;
                        padding-bottom: 40px;
                    }
                    .carousel-viewport {
                        overflow: hidden;
                    }
                    .carousel-track {
                        display: flex;
                    }
                    .carousel-slide {
                        padding: 0 10px;
                    }
                    .gallery-item {
                        animation: slide-in 500ms ease both;
                    }
                    @keyframes slide-in {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .image-wrapper {
                        position: relative;
                        border-radius: var(--radius);
                        overflow: hidden;
                        aspect-ratio: 4 / 3;
                        background: var(--color-bg);
                    }
                    .image-wrapper img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .image-overlay {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 24px 16px 12px;
                        background: linear-gradient(transparent, rgba(0, 0, 0, 0.6));
                        color: #fff;
                    }
                    .carousel-button {
                        position: absolute;
                        top: calc(50% - 20px);
                        transform: translateY(-50%);
                        width: 44px;
                        height: 44px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.9);
                        color: var(--color-primary);
                        font-size: 1.6rem;
                        cursor: pointer;
                        box-shadow: var(--shadow-card);
                    }
                    .carousel-button.prev { left: 0; }
                    .carousel-button.next { right: 0; }
                    .carousel-pagination {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        display: flex;
                        justify-content: center;
                        gap: 8px;
                    }
                    .carousel-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: none;
                        padding: 0;
                        background: rgba(45, 90, 39, 0.25);
                        cursor: pointer;
                    }
                    .carousel-dot.active {
                        background: var(--color-primary);
                        width: 24px;
                        border-radius: 5px;
                    }
                    .content-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 24px;
                        margin-top: 48px;
                    }
                    .content-card h3 {
                        margin-top: 0;
                        color: var(--color-primary);
                    }
                    .content-card p {
                        color: var(--color-text-muted);
                        margin-bottom: 0;
                    }
                    .team-photo-section {
                        margin-top: 48px;
                    }
                    .team-photo-card {
                        border-radius: var(--radius);
                        overflow: hidden;
                        box-shadow: var(--shadow-card);
                    }
                    .team-photo-caption {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 8px;
                        padding: 16px;
                        background: var(--color-surface);
                        color: var(--color-text-muted);
                    }
                    @media (max-width: 768px) {
                        .research-highlights { grid-template-columns: repeat(2, 1fr); }
                        .content-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader
                    label="第二章"
                    title="实地调研"
                    desc="浣花溪公园：城市绿心与民生福祉的共生典范"
                    {phase}
                />

                <div class="research-highlights" style={reveal_style(phase, Entrance::FadeUp(30.0), Timing::new(200, 600))}>
                    { for HIGHLIGHTS.iter().enumerate().map(|(i, (icon, title, desc))| html! {
                        <div class="highlight-item" key={i} style={reveal_style(phase, Entrance::Zoom(0.9), HIGHLIGHT_CASCADE.timing(i))}>
                            <span class="highlight-icon"><Icon kind={*icon} size={28} /></span>
                            <h4 class="highlight-title">{*title}</h4>
                            <p class="highlight-desc">{*desc}</p>
                        </div>
                    })}
                </div>

                <div class="category-tabs" style={reveal_style(phase, Entrance::Fade, Timing::new(400, 600))}>
                    { for PHOTO_CATEGORIES.iter().enumerate().map(|(i, tab)| {
                        let onclick = {
                            let active_category = active_category.clone();
                            Callback::from(move |_: MouseEvent| active_category.set(i))
                        };
                        html! {
                            <button
                                key={tab.id}
                                class={classes!("category-tab", (*active_category == i).then(|| "active"))}
                                {onclick}
                            >
                                <span class="tab-title">{tab.title}</span>
                                <span class="tab-subtitle">{tab.subtitle}</span>
                            </button>
                        }
                    })}
                </div>

                <div class="gallery-container" style={reveal_style(phase, Entrance::FadeUp(30.0), Timing::new(500, 600))}>
                    <Carousel key={category.id} slides={slides(category)} />
                </div>

                <div class="content-grid" style={reveal_style(phase, Entrance::FadeUp(30.0), Timing::new(600, 600))}>
                    { for OVERVIEW.iter().map(|(title, body)| html! {
                        <div class="content-card card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    })}
                </div>

                <div class="team-photo-section" style={reveal_style(phase, Entrance::FadeUp(30.0), Timing::new(700, 600))}>
                    <div class="team-photo-card">
                        <img src={resource_url("小组合照.jpg")} alt="小组合照" />
                        <div class="team-photo-caption">
                            <span class="caption-icon"><Icon kind={IconKind::Camera} size={20} /></span>
                            <span>{"小组成员实地调研合影留念"}</span>
                        </div>
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
    fn every_category_has_photos_and_unique_id() {
        for (i, category) in PHOTO_CATEGORIES.iter().enumerate() {
            assert!(!category.photos.is_empty());
            assert!(PHOTO_CATEGORIES[..i].iter().all(|c| c.id != category.id));
        }
    }

    #[test]
    fn slides_point_at_encoded_resources() {
        let slides = slides(&PHOTO_CATEGORIES[1]);
        assert_eq!(slides.len(), 4);
        assert!(slides.iter().all(|s| s.src.starts_with("/resource/%E4%BA%BA%E6%96%87")));
        assert_eq!(slides[1].caption, "便民免费开水供应");
    }
}
