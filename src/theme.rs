use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide palette, typography and the layout rules every section shares.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --color-primary: #2d5a27;
                --color-primary-light: #4a7c43;
                --color-accent: #c9a227;
                --color-warning: #c0392b;
                --color-bg: #f7f5ef;
                --color-surface: #ffffff;
                --color-text: #2c3e2d;
                --color-text-muted: #6b7b6c;
                --shadow-card: 0 8px 24px rgba(45, 90, 39, 0.08);
                --radius: 16px;
                --nav-height: 80px;
            }
            *, *::before, *::after {
                box-sizing: border-box;
            }
            html {
                scroll-behavior: auto;
            }
            body {
                margin: 0;
                background: var(--color-bg);
                color: var(--color-text);
                font-family: "PingFang SC", "Noto Sans SC", "Microsoft YaHei", -apple-system, sans-serif;
                line-height: 1.7;
            }
            section {
                position: relative;
                padding: 120px 0 100px;
                overflow: hidden;
            }
            .container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 24px;
                position: relative;
                z-index: 1;
            }
            .section-header {
                text-align: center;
                margin-bottom: 56px;
            }
            .section-label {
                display: inline-block;
                padding: 4px 16px;
                border-radius: 999px;
                background: rgba(45, 90, 39, 0.1);
                color: var(--color-primary);
                font-size: 0.85rem;
                letter-spacing: 0.1em;
            }
            .section-title {
                font-size: 2.5rem;
                margin: 16px 0 8px;
                color: var(--color-primary);
            }
            .section-desc {
                color: var(--color-text-muted);
                font-size: 1.1rem;
            }
            .card {
                background: var(--color-surface);
                border-radius: var(--radius);
                box-shadow: var(--shadow-card);
                padding: 28px;
            }
            .btn {
                display: inline-block;
                padding: 12px 32px;
                border-radius: 999px;
                font-size: 1rem;
                cursor: pointer;
                border: 2px solid transparent;
                transition: transform 0.2s ease, background 0.2s ease;
            }
            .btn:hover {
                transform: translateY(-2px);
            }
            .btn-primary {
                background: var(--color-accent);
                color: #fff;
            }
            .btn-outline {
                background: transparent;
                color: #fff;
                border-color: rgba(255, 255, 255, 0.8);
            }
            img {
                max-width: 100%;
                display: block;
            }
            @media (max-width: 768px) {
                section {
                    padding: 96px 0 72px;
                }
                .section-title {
                    font-size: 2rem;
                }
            }
        "#)} />
    }
}
