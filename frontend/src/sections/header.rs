use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::scroll;
use crate::config;
use crate::content::{section_ids, NAV_LINKS};
use crate::context::{Theme, ThemeAction, ThemeContext, ViewportContext};
use crate::platform::dom;

#[function_component(Header)]
pub fn header() -> Html {
    let config = config::animation();
    let viewport = use_context::<ViewportContext>().unwrap_or(ViewportContext { scroll_y: 0.0 });
    let theme = use_context::<ThemeContext>();
    let menu_open = use_state(|| false);
    let active_section = use_state(|| "home");

    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                match dom::section_tops(&section_ids()) {
                    Ok(tops) => {
                        if let Some(id) = scroll::active_section(&tops, &config) {
                            active_section.set(id);
                        }
                    }
                    Err(e) => log::warn!("cannot locate sections: {}", e),
                }
                || ()
            },
            viewport.scroll_y.to_bits(),
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(theme) = &theme {
                theme.dispatch(ThemeAction::Toggle);
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let is_dark = theme.map(|t| t.theme == Theme::Dark).unwrap_or(false);
    let theme_icon = if is_dark { "☀" } else { "☾" };

    let nav_items = |mobile: bool| {
        NAV_LINKS
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let is_active = *active_section == link.section;
                let style = if mobile {
                    format!("transition-delay: {}ms;", index * 50)
                } else {
                    format!("animation-delay: {}ms;", index * 50)
                };
                html! {
                    <a
                        href={format!("#{}", link.section)}
                        class={classes!("nav-link", is_active.then_some("active"))}
                        onclick={close_menu.clone()}
                        style={style}
                    >
                        <span>{link.name}</span>
                        <span class="nav-indicator"></span>
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <header class={classes!("site-header", scroll::is_scrolled(viewport.scroll_y, &config).then_some("scrolled"))}>
            <style>{HEADER_CSS}</style>
            <div class="container header-row">
                <a href="#home" class="logo">
                    <span class="logo-front">{"LOGO"}</span>
                    <span class="logo-back">{"LOGO"}</span>
                </a>
                <nav class="nav-desktop">{ nav_items(false) }</nav>
                <div class="header-actions">
                    <a href="/cv.pdf" class="button-primary download-cv" download="cv.pdf">
                        {"⬇ Download CV"}
                    </a>
                    <button class="icon-button" onclick={toggle_theme} aria-label="Toggle theme">
                        {theme_icon}
                    </button>
                    <button class="icon-button burger" onclick={toggle_menu} aria-label="Toggle menu">
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>
            <div class={classes!("nav-mobile", (*menu_open).then_some("open"))}>
                { nav_items(true) }
            </div>
        </header>
    }
}

const HEADER_CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        padding: 1.25rem 1.5rem;
        transition: all 0.5s;
    }
    .site-header.scrolled {
        padding: 0.75rem 1.5rem;
        background: var(--surface);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        backdrop-filter: blur(12px);
    }
    .header-row { display: flex; align-items: center; justify-content: space-between; }
    .logo {
        position: relative;
        overflow: hidden;
        font-size: 1.5rem;
        font-weight: 700;
        color: var(--primary);
        text-decoration: none;
    }
    .logo span { display: inline-block; transition: transform 0.3s; }
    .logo-back { position: absolute; top: 0; left: 0; transform: translateY(100%); }
    .logo:hover .logo-front { transform: translateY(-100%); }
    .logo:hover .logo-back { transform: translateY(0); }
    .nav-desktop { display: flex; gap: 0.25rem; }
    .nav-link {
        position: relative;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        color: var(--muted);
        text-decoration: none;
        font-size: 0.875rem;
        font-weight: 500;
        transition: all 0.3s;
    }
    .nav-link:hover, .nav-link.active { color: var(--primary); }
    .nav-indicator {
        position: absolute;
        bottom: 0;
        left: 50%;
        width: 0;
        height: 2px;
        background: var(--primary);
        transform: translateX(-50%);
        transition: width 0.3s;
    }
    .nav-link:hover .nav-indicator { width: 1rem; }
    .nav-link.active .nav-indicator { width: 1.5rem; }
    .header-actions { display: flex; gap: 0.75rem; align-items: center; }
    .download-cv { text-decoration: none; font-size: 0.875rem; padding: 0.5rem 1rem; }
    .icon-button {
        padding: 0.625rem;
        border-radius: 0.75rem;
        border: none;
        background: var(--surface-alt);
        color: var(--muted);
        cursor: pointer;
        transition: all 0.3s;
    }
    .icon-button:hover { background: var(--primary); color: #fff; transform: rotate(12deg); }
    .burger { display: none; }
    .nav-mobile {
        display: none;
        flex-direction: column;
        max-height: 0;
        opacity: 0;
        overflow: hidden;
        background: var(--surface);
        transition: all 0.5s;
    }
    .nav-mobile .nav-link { transform: translateX(-20px); opacity: 0; }
    .nav-mobile.open { max-height: 500px; opacity: 1; padding: 1rem; }
    .nav-mobile.open .nav-link { transform: none; opacity: 1; }
    @media (max-width: 1024px) {
        .nav-desktop, .download-cv { display: none; }
        .burger { display: inline-block; }
        .nav-mobile { display: flex; }
    }
"#;
