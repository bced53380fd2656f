use yew::prelude::*;

use crate::config;
use crate::content::{OWNER_NAME, SOCIAL_LINKS};
use crate::hooks::reveal::use_reveal;
use crate::hooks::timed::{use_delayed_flag, use_typewriter};
use crate::sections::shared::{reveal_classes, Enter};

const PARTICLE_COUNT: usize = 15;

/// Spread the particles deterministically so re-renders don't make them jump.
fn particle_style(index: usize) -> String {
    let left = (index * 37 + 11) % 100;
    let top = (index * 53 + 29) % 100;
    let delay = (index * 7 % 30) as f64 / 10.0;
    let duration = 3.0 + (index * 13 % 20) as f64 / 10.0;
    format!(
        "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
        left, top, delay, duration
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = config::animation();
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config.reveal_threshold);
    let is_loaded = use_delayed_flag(config.hero_load_delay_ms);
    let name = use_typewriter(OWNER_NAME, config.typewriter_interval_ms, config.typewriter_delay_ms);

    let loaded = |extra: &'static str| classes!("hero-fade", extra, is_loaded.then_some("loaded"));

    html! {
        <section id="home" class="hero" ref={section_ref}>
            <style>{HERO_CSS}</style>
            <div class="particles">
                { for (0..PARTICLE_COUNT).map(|i| html! {
                    <div class="particle" style={particle_style(i)}></div>
                }) }
            </div>

            <div class="container hero-grid">
                <div class="hero-text">
                    <p class={loaded("")}>{"Hi I am"}</p>
                    <h2 class={loaded("hero-name")}>
                        { name.display_text.clone() }
                        { if !name.is_complete { html! { <span class="caret"></span> } } else { html! {} } }
                    </h2>
                    <h1 class={classes!("hero-title", is_loaded.then_some("loaded"))}>
                        {"Full Stack"}<br />
                        <span class="hero-title-accent">{"Developer"}</span>
                    </h1>
                    <p class={loaded("hero-description")}>
                        {"Lorem ipsum dolor sit amet consectetur adipisicing elit. Minima veritatis corrupti nostrum repudiandae sapiente, rem asperiores impedit maiores ut deserunt similique quam rerum, assumenda est excepturi placeat voluptatum obcaecati sed."}
                    </p>
                    <div class={loaded("hero-cta")}>
                        <a href="#contact" class="button-primary">{"Hire Me"}</a>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class={classes!("hero-portrait", is_loaded.then_some("loaded"))}>
                        <div class="ring ring--inner"></div>
                        <div class="ring ring--outer"></div>
                        <img src="/profile-hero.jpg" alt={OWNER_NAME} />
                        <span class="badge badge--available">{"Available"}</span>
                        <span class="badge badge--experience">{"5+ Years Exp"}</span>
                    </div>
                    <div class={classes!("hero-social", reveal_classes(visible && is_loaded, Enter::Up))}>
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a href={social.href} aria-label={social.label} class="hero-social-link">
                                {social.glyph}
                            </a>
                        }) }
                    </div>
                </div>
            </div>

            <div class="scroll-hint">
                <span>{"Scroll down"}</span>
                <div class="mouse"><div class="wheel"></div></div>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero { min-height: 100vh; display: flex; align-items: center; padding-top: 72px; }
    .particles { position: absolute; inset: 0; pointer-events: none; }
    .particle {
        position: absolute;
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: rgba(249, 115, 22, 0.2);
        animation: float 3s ease-in-out infinite;
    }
    .hero-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
    .hero-fade { opacity: 0; transform: translateY(1rem); transition: all 0.7s; }
    .hero-fade.loaded { opacity: 1; transform: none; }
    .hero-name { color: var(--primary); font-size: 1.875rem; font-weight: 600; min-height: 2.5rem; }
    .caret {
        display: inline-block;
        width: 2px;
        height: 2rem;
        margin-left: 0.25rem;
        background: var(--primary);
        vertical-align: middle;
        animation: blink 1s step-end infinite;
    }
    .hero-title {
        font-size: 3.75rem;
        font-weight: 700;
        line-height: 1.1;
        opacity: 0;
        letter-spacing: 0.5em;
        transition: all 1s 0.5s;
    }
    .hero-title.loaded { opacity: 1; letter-spacing: normal; }
    .hero-title-accent { position: relative; }
    .hero-description { color: var(--muted); max-width: 36rem; transition-delay: 0.7s; }
    .hero-cta { transition-delay: 1s; }
    .hero-cta a { text-decoration: none; display: inline-block; }
    .hero-visual { display: flex; flex-direction: column; align-items: center; }
    .hero-portrait {
        position: relative;
        width: 24rem;
        height: 24rem;
        opacity: 0;
        transform: scale(0.75) rotate(-10deg);
        transition: all 1s 0.5s;
    }
    .hero-portrait.loaded { opacity: 1; transform: none; }
    .hero-portrait img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        border-radius: 9999px;
        border: 4px solid var(--surface);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
    .ring { position: absolute; border-radius: 9999px; animation: spin 20s linear infinite; }
    .ring--inner { inset: -1rem; border: 2px solid rgba(249, 115, 22, 0.2); }
    .ring--outer { inset: -2rem; border: 1px dashed rgba(249, 115, 22, 0.1); animation-direction: reverse; animation-duration: 15s; }
    .badge {
        position: absolute;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.75rem;
        font-weight: 700;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .badge--available { top: -0.5rem; right: -0.5rem; background: var(--primary); color: #fff; }
    .badge--experience { bottom: -0.5rem; left: -0.5rem; background: var(--surface); animation: float 3s infinite; }
    .hero-social { display: flex; gap: 1rem; margin-top: 2.5rem; }
    .hero-social-link {
        padding: 1rem 1.2rem;
        border-radius: 1rem;
        background: var(--surface-alt);
        color: var(--muted);
        text-decoration: none;
        transition: all 0.3s;
    }
    .hero-social-link:hover { background: var(--primary); color: #fff; transform: translateY(-4px) scale(1.1); }
    .scroll-hint {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.75rem;
        color: #9ca3af;
    }
    .mouse { width: 1.5rem; height: 2.5rem; border: 2px solid #d1d5db; border-radius: 9999px; display: flex; justify-content: center; padding-top: 0.5rem; box-sizing: border-box; }
    .wheel { width: 0.375rem; height: 0.75rem; border-radius: 9999px; background: var(--primary); animation: float 1.5s infinite; }
    @media (max-width: 1024px) {
        .hero-grid { grid-template-columns: 1fr; text-align: center; }
        .hero-visual { order: -1; }
        .hero-portrait { width: 16rem; height: 16rem; }
        .hero-title { font-size: 2.5rem; }
        .scroll-hint { display: none; }
    }
"#;
