use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::reveal::hooks::use_reveal;
use crate::reveal::transition::{reveal_style, Entrance, Stagger, Timing};

pub struct Member {
    pub name: &'static str,
    pub student_id: &'static str,
    pub role: &'static str,
}

impl Member {
    pub fn is_leader(&self) -> bool {
        self.role == "组长"
    }
}

pub const MEMBERS: [Member; 4] = [
    Member { name: "侯 懿", student_id: "2023115323", role: "组长" },
    Member { name: "高年平", student_id: "2023112569", role: "组员" },
    Member { name: "张炜乐", student_id: "2023112590", role: "组员" },
    Member { name: "颜 可", student_id: "2023115234", role: "组员" },
];

const PROJECT_INFO: [(IconKind, &str, &str); 3] = [
    (IconKind::Book, "课程名称", "习近平新时代中国特色社会主义思想概论"),
    (IconKind::Avatar, "任课教师", "王斌"),
    (IconKind::Calendar, "学期", "2025-2026学年第1学期"),
];

const MEMBER_CASCADE: Stagger = Stagger::new(400, 100, 500);

#[function_component(Team)]
pub fn team() -> Html {
    let section_ref = use_node_ref();
    let phase = use_reveal(section_ref.clone());

    html! {
        <section id="team" class="team-section" ref={section_ref}>
            <style>
                {r#"
                    .team-section {
                        background: var(--color-bg);
                        padding-bottom: 40px;
                    }
                    .project-info-card {
                        padding: 28px;
                        border-radius: var(--radius);
                        background: var(--color-surface);
                        box-shadow: var(--shadow-card);
                        margin-bottom: 48px;
                    }
                    .project-info-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 24px;
                    }
                    .info-item {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                    }
                    .info-icon {
                        color: var(--color-primary);
                        display: inline-flex;
                    }
                    .info-content {
                        display: flex;
                        flex-direction: column;
                    }
                    .info-label {
                        font-size: 0.8rem;
                        color: var(--color-text-muted);
                    }
                    .info-value {
                        font-weight: 600;
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 24px;
                    }
                    .member-card {
                        position: relative;
                        padding: 32px 20px;
                        border-radius: var(--radius);
                        background: var(--color-surface);
                        box-shadow: var(--shadow-card);
                        text-align: center;
                        transition: transform 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .member-card:hover {
                        transform: translateY(-12px) !important;
                    }
                    .member-card.leader {
                        border: 2px solid var(--color-accent);
                    }
                    .member-avatar {
                        position: relative;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 80px;
                        height: 80px;
                        border-radius: 50%;
                        background: rgba(45, 90, 39, 0.08);
                        color: var(--color-primary);
                    }
                    .leader-badge {
                        position: absolute;
                        top: -8px;
                        right: -8px;
                        color: var(--color-accent);
                        animation: crown-sway 5s ease-in-out infinite;
                    }
                    @keyframes crown-sway {
                        0%, 60%, 100% { transform: rotate(0deg); }
                        20% { transform: rotate(10deg); }
                        40% { transform: rotate(-10deg); }
                    }
                    .member-info {
                        display: flex;
                        flex-direction: column;
                        gap: 4px;
                        margin-top: 16px;
                    }
                    .member-name {
                        margin: 0;
                        font-size: 1.2rem;
                    }
                    .member-id {
                        color: var(--color-text-muted);
                        font-size: 0.85rem;
                    }
                    .member-role {
                        align-self: center;
                        padding: 2px 12px;
                        border-radius: 999px;
                        background: rgba(45, 90, 39, 0.1);
                        color: var(--color-primary);
                        font-size: 0.8rem;
                    }
                    .reflection-section {
                        margin-top: 56px;
                    }
                    .reflection-title {
                        display: flex;
                        align-items: center;
                        gap: 10px;
                        color: var(--color-primary);
                    }
                    .reflection-content p {
                        color: var(--color-text-muted);
                        line-height: 1.9;
                    }
                    .reflection-quote {
                        margin: 24px 0 0;
                        padding: 16px 24px;
                        border-left: 4px solid var(--color-accent);
                        background: rgba(201, 162, 39, 0.08);
                        font-size: 1.1rem;
                        font-weight: 600;
                    }
                    .team-footer {
                        margin-top: 64px;
                        padding-top: 24px;
                        border-top: 1px solid rgba(45, 90, 39, 0.15);
                        text-align: center;
                    }
                    .footer-logo {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        color: var(--color-primary);
                        font-weight: 700;
                    }
                    .footer-copyright {
                        color: var(--color-text-muted);
                        font-size: 0.85rem;
                    }
                    @media (max-width: 900px) {
                        .project-info-grid { grid-template-columns: 1fr; }
                        .team-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader
                    label="关于我们"
                    title="团队介绍"
                    desc="美丽中国 · 青春担当"
                    {phase}
                />

                <div class="project-info-card" style={reveal_style(phase, Entrance::FadeUp(30.0), Timing::new(200, 600))}>
                    <div class="project-info-grid">
                        { for PROJECT_INFO.iter().map(|(icon, label, value)| html! {
                            <div class="info-item">
                                <span class="info-icon"><Icon kind={*icon} /></span>
                                <div class="info-content">
                                    <span class="info-label">{*label}</span>
                                    <span class="info-value">{*value}</span>
                                </div>
                            </div>
                        })}
                    </div>
                </div>

                <div class="team-grid" style={reveal_style(phase, Entrance::Fade, Timing::new(300, 600))}>
                    { for MEMBERS.iter().enumerate().map(|(i, member)| html! {
                        <div
                            key={member.student_id}
                            class={classes!("member-card", member.is_leader().then(|| "leader"))}
                            style={reveal_style(phase, Entrance::FadeUp(30.0), MEMBER_CASCADE.timing(i))}
                        >
                            <div class="member-avatar">
                                <Icon kind={IconKind::Avatar} size={48} />
                                if member.is_leader() {
                                    <span class="leader-badge"><Icon kind={IconKind::Crown} size={20} /></span>
                                }
                            </div>
                            <div class="member-info">
                                <h4 class="member-name">{member.name}</h4>
                                <span class="member-id">{member.student_id}</span>
                                <span class="member-role">{member.role}</span>
                            </div>
                        </div>
                    })}
                </div>

                <div class="reflection-section" style={reveal_style(phase, Entrance::FadeUp(30.0), Timing::new(600, 600))}>
                    <h3 class="reflection-title">
                        <Icon kind={IconKind::Thought} size={28} />
                        {"思政体会"}
                    </h3>
                    <div class="reflection-content">
                        <p>
                            {"通过本次课程实践，我们深刻体会到习近平生态文明思想在基层城市建设中的巨大指导作用和现实意义。浣花溪公园的调研让我们看到，\"绿水青山就是金山银山\"绝不是一句抽象的口号，而是实实在在体现在我们身边的变化。"}
                        </p>
                        <p>
                            {"作为新时代青年，我们既是生态文明建设的受益者，更应是参与者、推动者。未来无论走上什么工作岗位，我们都会铭记此次实践的收获：坚持可持续发展的理念，像爱护眼睛一样爱护生态环境；主动传播环保知识，影响带动身边更多的人参与环保行动。"}
                        </p>
                        <blockquote class="reflection-quote">
                            {"\"生态兴则文明兴，生态衰则文明衰\""}
                        </blockquote>
                    </div>
                </div>

                <footer class="team-footer" style={reveal_style(phase, Entrance::Fade, Timing::new(800, 600))}>
                    <div class="footer-logo">
                        <Icon kind={IconKind::Leaf} />
                        <span>{"生态文明 · 美丽中国"}</span>
                    </div>
                    <p class="footer-copyright">
                        {"© 2025 习近平生态文明思想成都实践调研小组 | 西南交通大学"}
                    </p>
                </footer>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_leader() {
        assert_eq!(MEMBERS.iter().filter(|m| m.is_leader()).count(), 1);
        assert!(MEMBERS[0].is_leader());
    }

    #[test]
    fn student_ids_are_unique() {
        for (i, member) in MEMBERS.iter().enumerate() {
            assert_eq!(member.student_id.len(), 10);
            assert!(MEMBERS[..i].iter().all(|m| m.student_id != member.student_id));
        }
    }
}
