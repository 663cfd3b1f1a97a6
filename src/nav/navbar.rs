use stylist::yew::styled_component;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::provider::{NavAction, NavContext};
use super::sections::SECTIONS;
use crate::components::icons::{Icon, IconKind};
use crate::reveal::transition::Stagger;

const MENU_STAGGER: Stagger = Stagger::new(0, 100, 300);

#[styled_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_context::<NavContext>();

    let style = css!(r#"
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        height: var(--nav-height);
        display: flex;
        align-items: center;
        background: transparent;
        animation: nav-drop 600ms ease-out;
        transition: background 0.3s ease, box-shadow 0.3s ease, height 0.3s ease;

        &.scrolled {
            height: 64px;
            background: rgba(255, 255, 255, 0.92);
            backdrop-filter: blur(12px);
            box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
        }

        .navbar-container {
            width: 100%;
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 24px;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }

        .navbar-logo {
            display: flex;
            align-items: center;
            gap: 8px;
            font-weight: 700;
            font-size: 1.2rem;
            color: #fff;
            transition: transform 0.2s ease, color 0.3s ease;
        }
        .navbar-logo:hover {
            transform: scale(1.05);
        }
        &.scrolled .navbar-logo {
            color: var(--color-primary);
        }

        .navbar-menu {
            display: flex;
            gap: 8px;
            list-style: none;
            margin: 0;
            padding: 0;
        }

        .nav-link {
            display: block;
            padding: 8px 16px;
            border-radius: 999px;
            color: rgba(255, 255, 255, 0.9);
            text-decoration: none;
            cursor: pointer;
            transition: background 0.2s ease, color 0.2s ease;
        }
        &.scrolled .nav-link {
            color: var(--color-text);
        }
        .nav-link:hover {
            background: rgba(45, 90, 39, 0.1);
        }
        .nav-link.active {
            background: var(--color-primary);
            color: #fff;
        }

        .mobile-menu-btn {
            display: none;
            background: none;
            border: none;
            color: inherit;
            cursor: pointer;
            padding: 8px;
            transition: transform 0.1s ease;
        }
        .mobile-menu-btn:active {
            transform: scale(0.95);
        }

        @media (max-width: 900px) {
            .navbar-menu {
                display: none;
            }
            .mobile-menu-btn {
                display: flex;
                color: #fff;
            }
            &.scrolled .mobile-menu-btn {
                color: var(--color-primary);
            }
        }
    "#);

    let overlay_style = css!(r#"
        position: fixed;
        inset: 0;
        z-index: 200;
        background: rgba(0, 0, 0, 0.4);
        animation: overlay-in 300ms ease;

        .mobile-menu {
            position: absolute;
            top: 0;
            right: 0;
            bottom: 0;
            width: min(320px, 85vw);
            background: var(--color-surface);
            display: flex;
            flex-direction: column;
            padding: 32px 24px;
            animation: drawer-in 400ms cubic-bezier(0.22, 1, 0.36, 1);
        }
        .mobile-menu-header {
            display: flex;
            align-items: center;
            gap: 8px;
            font-weight: 700;
            color: var(--color-primary);
            margin-bottom: 32px;
        }
        .mobile-menu-list {
            list-style: none;
            padding: 0;
            margin: 0;
            flex: 1;
        }
        .mobile-menu-list li {
            opacity: 0;
            animation: entry-in 300ms ease forwards;
        }
        .mobile-nav-link {
            display: flex;
            align-items: center;
            gap: 12px;
            padding: 14px 8px;
            color: var(--color-text);
            text-decoration: none;
            border-bottom: 1px solid rgba(45, 90, 39, 0.08);
        }
        .mobile-nav-link.active {
            color: var(--color-primary);
            font-weight: 600;
        }
        .mobile-menu-footer {
            color: var(--color-text-muted);
            font-size: 0.85rem;
            text-align: center;
        }
        .mobile-menu-footer p {
            margin: 4px 0;
        }
    "#);

    let Some(nav) = nav else {
        log::warn!("Navbar rendered outside NavProvider");
        return html! {};
    };
    let state = nav.state;

    let link = |action: NavAction| {
        let dispatch = nav.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(action);
        })
    };

    let toggle_menu = link(NavAction::ToggleMenu);
    let close_menu = link(NavAction::CloseMenu);
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            <style>
                {r#"
                    @keyframes nav-drop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    @keyframes overlay-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes drawer-in {
                        from { transform: translateX(100%); }
                        to { transform: translateX(0); }
                    }
                    @keyframes entry-in {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                "#}
            </style>
            <nav class={classes!(style, "navbar", state.has_scrolled.then(|| "scrolled"))}>
                <div class="navbar-container">
                    <div class="navbar-logo">
                        <Icon kind={IconKind::Leaf} size={26} />
                        <span class="logo-text">{"实践作业"}</span>
                    </div>

                    <ul class="navbar-menu">
                        { for SECTIONS.iter().map(|section| html! {
                            <li key={section.id}>
                                <a
                                    href={format!("#{}", section.id)}
                                    class={classes!("nav-link", (state.active_section == section.id).then(|| "active"))}
                                    onclick={link(NavAction::Activate(section.id))}
                                >
                                    {section.label}
                                </a>
                            </li>
                        })}
                    </ul>

                    <button class="mobile-menu-btn" aria-label="菜单" onclick={toggle_menu}>
                        <Icon kind={if state.is_menu_open { IconKind::Close } else { IconKind::Menu }} size={26} />
                    </button>
                </div>
            </nav>

            if state.is_menu_open {
                <div class={classes!(overlay_style)} onclick={close_menu}>
                    <div class="mobile-menu" onclick={keep_open}>
                        <div class="mobile-menu-header">
                            <Icon kind={IconKind::Leaf} size={22} />
                            <span>{"导航菜单"}</span>
                        </div>
                        <ul class="mobile-menu-list">
                            { for SECTIONS.iter().enumerate().map(|(i, section)| html! {
                                <li key={section.id} style={format!("animation-delay: {}ms;", MENU_STAGGER.timing(i).delay_ms)}>
                                    <a
                                        href={format!("#{}", section.id)}
                                        class={classes!("mobile-nav-link", (state.active_section == section.id).then(|| "active"))}
                                        onclick={link(NavAction::MenuLink(section.id))}
                                    >
                                        <span class="nav-icon"><Icon kind={section.icon} size={18} /></span>
                                        <span class="nav-label">{section.label}</span>
                                    </a>
                                </li>
                            })}
                        </ul>
                        <div class="mobile-menu-footer">
                            <p>{"习近平生态文明思想"}</p>
                            <p>{"成都实践样本"}</p>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
