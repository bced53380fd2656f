use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{Service, LOREM_INTRO, SERVICES};
use crate::hooks::reveal::use_reveal;
use crate::sections::shared::{reveal_classes, stagger_style, Enter, SectionHeading};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    visible: bool,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let is_hovered = use_state(|| false);

    let on_enter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let on_leave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    html! {
        <div
            class={classes!("service-card", reveal_classes(props.visible, Enter::Up), (*is_hovered).then_some("hovered"))}
            style={stagger_style(props.index, 75)}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <div class="service-glow"></div>
            <div class="service-body">
                <div class="service-icon">
                    <span>{props.icon}</span>
                    <span class="service-orbit"></span>
                </div>
                <h3>{props.title}</h3>
                <p>{props.description}</p>
                <div class="service-more">{"Learn more →"}</div>
            </div>
            <div class="service-corner"></div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config::animation().reveal_threshold);

    html! {
        <section id="services" class="services" ref={section_ref}>
            <style>{SERVICES_CSS}</style>
            <div class="container">
                <SectionHeading badge="What I Offer" title="Services" intro={LOREM_INTRO} visible={visible} />
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, Service { icon, title, description })| html! {
                        <ServiceCard
                            key={*title}
                            index={index}
                            icon={*icon}
                            title={*title}
                            description={*description}
                            visible={visible}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

const SERVICES_CSS: &str = r#"
    .services-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
    .service-card {
        position: relative;
        overflow: hidden;
        padding: 1.5rem;
        border-radius: 1rem;
        background: var(--surface);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .service-card.is-visible:hover { transform: translateY(-0.5rem); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15); }
    .service-glow {
        position: absolute;
        inset: 0;
        border-radius: 1rem;
        background: linear-gradient(to bottom right, rgba(249, 115, 22, 0.1), rgba(251, 146, 60, 0.1));
        opacity: 0;
        transition: opacity 0.5s;
    }
    .service-card.hovered .service-glow { opacity: 1; }
    .service-body { position: relative; z-index: 1; }
    .service-icon {
        position: relative;
        width: 3.5rem;
        height: 3.5rem;
        margin-bottom: 1.25rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 0.75rem;
        background: var(--primary-soft);
        font-size: 1.5rem;
        transition: transform 0.5s;
    }
    .service-card.hovered .service-icon { transform: scale(1.1) rotate(12deg); }
    .service-orbit {
        position: absolute;
        top: 0;
        left: 50%;
        width: 0.5rem;
        height: 0.5rem;
        margin-left: -0.25rem;
        border-radius: 9999px;
        background: var(--primary);
        opacity: 0;
        transform-origin: 0.25rem 1.75rem;
    }
    .service-card.hovered .service-orbit { opacity: 1; animation: spin 2s linear infinite; }
    .service-card h3 { font-size: 1rem; font-weight: 600; margin: 0 0 0.75rem; transition: color 0.3s; }
    .service-card.hovered h3 { color: var(--primary); }
    .service-card p { font-size: 0.875rem; color: var(--muted); line-height: 1.6; }
    .service-more {
        margin-top: 1rem;
        font-size: 0.875rem;
        font-weight: 500;
        color: var(--primary);
        opacity: 0;
        transform: translateX(-1rem);
        transition: all 0.3s;
    }
    .service-card.hovered .service-more { opacity: 1; transform: none; }
    .service-corner {
        position: absolute;
        top: 0;
        right: 0;
        width: 5rem;
        height: 5rem;
        border-bottom-left-radius: 9999px;
        background: linear-gradient(to bottom left, rgba(249, 115, 22, 0.1), transparent);
        transition: transform 0.5s;
    }
    .service-card.hovered .service-corner { transform: scale(1.5); }
    @media (max-width: 1024px) { .services-grid { grid-template-columns: repeat(2, 1fr); } }
    @media (max-width: 640px) { .services-grid { grid-template-columns: 1fr; } }
"#;
