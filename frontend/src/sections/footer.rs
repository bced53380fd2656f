use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::scroll;
use crate::config;
use crate::content::{NAV_LINKS, OWNER_NAME, SOCIAL_LINKS};
use crate::context::ViewportContext;
use crate::platform::dom;
use crate::sections::shared::stagger_style;

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = config::animation();
    let viewport = use_context::<ViewportContext>().unwrap_or(ViewportContext { scroll_y: 0.0 });
    let hovered_link = use_state(|| None::<&'static str>);
    let year = chrono::Local::now().year();

    let scroll_to_top = Callback::from(|_: MouseEvent| {
        if let Err(e) = dom::scroll_to_top() {
            log::warn!("scroll to top failed: {}", e);
        }
    });

    let show_scroll_top = scroll::shows_scroll_top(viewport.scroll_y, &config);

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-border"></div>
            <div class="container footer-body">
                <h3 class="footer-brand">{"Coding With Truong"}</h3>

                <nav class="footer-nav">
                    { for NAV_LINKS.iter().map(|link| {
                        let on_enter = {
                            let hovered_link = hovered_link.clone();
                            Callback::from(move |_: MouseEvent| hovered_link.set(Some(link.name)))
                        };
                        let on_leave = {
                            let hovered_link = hovered_link.clone();
                            Callback::from(move |_: MouseEvent| hovered_link.set(None))
                        };
                        let underlined = *hovered_link == Some(link.name);
                        html! {
                            <a
                                href={format!("#{}", link.section)}
                                onmouseenter={on_enter}
                                onmouseleave={on_leave}
                            >
                                {link.name}
                                <span class={classes!("footer-underline", underlined.then_some("full"))}></span>
                            </a>
                        }
                    }) }
                </nav>

                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().enumerate().map(|(index, social)| html! {
                        <a
                            href={social.href}
                            aria-label={social.label}
                            class={classes!("footer-social-link", social.hover_class)}
                            style={stagger_style(index, 50)}
                        >
                            {social.glyph}
                        </a>
                    }) }
                </div>

                <div class="footer-divider"></div>

                <p class="footer-copyright">
                    {format!("© {} Code by ", year)}
                    <a href="#">{OWNER_NAME}</a>
                    {" & Design by "}
                    <a href="#">{"Fawziuiux"}</a>
                </p>
                <p class="footer-love">{"Made with ❤ in Vietnam"}</p>
            </div>

            <button
                class={classes!("scroll-top", show_scroll_top.then_some("shown"))}
                onclick={scroll_to_top}
                aria-label="Scroll to top"
            >
                {"↑"}
            </button>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer { position: relative; background: var(--surface-alt); overflow: hidden; }
    .footer-border {
        position: absolute;
        top: 0;
        left: 0;
        right: 0;
        height: 4px;
        background: linear-gradient(to right, transparent, var(--primary), transparent);
    }
    .footer-body { display: flex; flex-direction: column; align-items: center; padding: 4rem 1.5rem; }
    .footer-brand {
        font-size: 1.5rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: #9ca3af;
        transition: color 0.3s;
    }
    .footer-brand:hover { color: var(--primary); }
    .footer-nav { display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; margin-bottom: 2.5rem; }
    .footer-nav a { position: relative; color: var(--muted); text-decoration: none; font-size: 0.875rem; padding: 0.25rem 0; }
    .footer-nav a:hover { color: var(--primary); }
    .footer-underline {
        position: absolute;
        bottom: 0;
        left: 0;
        width: 0;
        height: 2px;
        background: var(--primary);
        transition: width 0.3s;
    }
    .footer-underline.full { width: 100%; }
    .footer-social { display: flex; gap: 1rem; margin-bottom: 3rem; }
    .footer-social-link {
        padding: 0.875rem 1.1rem;
        border-radius: 0.75rem;
        background: var(--surface);
        color: var(--muted);
        text-decoration: none;
        transition: all 0.3s;
    }
    .footer-social-link:hover { color: #fff; transform: translateY(-4px); }
    .social--facebook:hover { background: #3b82f6; }
    .social--github:hover { background: #1f2937; }
    .social--linkedin:hover { background: #2563eb; }
    .social--youtube:hover { background: #ef4444; }
    .footer-divider {
        width: 100%;
        max-width: 28rem;
        height: 1px;
        background: linear-gradient(to right, transparent, #d1d5db, transparent);
        margin-bottom: 2rem;
    }
    .footer-copyright { font-size: 0.875rem; color: #6b7280; }
    .footer-copyright a { color: var(--primary); text-decoration: none; font-weight: 500; }
    .footer-love { font-size: 0.75rem; color: #9ca3af; }
    .scroll-top {
        position: fixed;
        right: 1.5rem;
        bottom: 1.5rem;
        z-index: 40;
        padding: 1rem 1.25rem;
        border: none;
        border-radius: 9999px;
        background: var(--primary);
        color: #fff;
        cursor: pointer;
        opacity: 0;
        transform: translateY(2.5rem) scale(0.75);
        pointer-events: none;
        transition: all 0.5s;
    }
    .scroll-top.shown { opacity: 1; transform: none; pointer-events: auto; }
"#;
