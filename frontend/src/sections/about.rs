use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::animation::tilt::Tilt;
use crate::config;
use crate::content::{Skill, SKILLS};
use crate::hooks::reveal::use_reveal;
use crate::hooks::timed::use_count_up;
use crate::platform::dom;
use crate::sections::shared::{reveal_classes, Enter};

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    name: &'static str,
    level: u32,
    index: usize,
    visible: bool,
}

#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let config = config::animation();
    let count = use_count_up(
        props.level,
        config.count_up_duration_ms,
        props.index as u32 * config.count_up_stagger_ms,
        config.count_up_frame_ms,
        props.visible,
    );

    let fill_style = format!(
        "width: {}%; transition-delay: {}ms;",
        if props.visible { props.level } else { 0 },
        props.index * 150
    );

    html! {
        <div class="skill">
            <div class="skill-label">
                <span class="skill-name">{props.name}</span>
                <span class="skill-count">{format!("{}%", count)}</span>
            </div>
            <div class="skill-track">
                <div class={classes!("skill-fill", props.visible.then_some("shown"))} style={fill_style}></div>
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let config = config::animation();
    let section_ref = use_node_ref();
    let image_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config.reveal_threshold_dense);
    let tilt = use_state(Tilt::default);

    let on_mouse_move = {
        let tilt = tilt.clone();
        let image_ref = image_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = image_ref.cast::<Element>() {
                let rect = dom::element_box(&element);
                tilt.set(Tilt::from_pointer(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect,
                    config.tilt_divisor,
                ));
            }
        })
    };

    let on_mouse_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::default()))
    };

    html! {
        <section id="about" class="about" ref={section_ref}>
            <style>{ABOUT_CSS}</style>
            <div class="container">
                <div class="section-heading">
                    <h2 class={classes!("section-title", reveal_classes(visible, Enter::Up))}>{"About Me"}</h2>
                </div>

                <div class="about-grid">
                    <div class={classes!("about-portrait-wrap", reveal_classes(visible, Enter::Left))}>
                        <div
                            ref={image_ref}
                            class="about-portrait"
                            onmousemove={on_mouse_move}
                            onmouseleave={on_mouse_leave}
                            style={tilt.transform()}
                        >
                            <div class="about-ring"></div>
                            <img src="/profile-about.jpg" alt="About Truong Nguyen" />
                            <div class="about-stat about-stat--projects">
                                <strong>{"50+"}</strong>
                                <span>{"Projects"}</span>
                            </div>
                            <div class="about-stat about-stat--years">
                                <strong>{"5+"}</strong>
                                <span>{"Years"}</span>
                            </div>
                        </div>
                    </div>

                    <div class={classes!("about-copy", reveal_classes(visible, Enter::Right))}>
                        <p>
                            {"Lorem ipsum dolor sit, amet consectetur adipisicing elit. Culpa quibusdam accusantium, vitae enim maxime illum aperiam quidem ea possimus assumenda eos consectetur, illo voluptatibus soluta quo quasi facilis nemo at."}
                        </p>
                        <div class="skills">
                            { for SKILLS.iter().enumerate().map(|(index, Skill { name, level })| html! {
                                <SkillBar key={*name} name={*name} level={*level} index={index} visible={visible} />
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

const ABOUT_CSS: &str = r#"
    .about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 5rem; align-items: center; }
    .about-copy { transition-delay: 0.2s; }
    .about-copy p { color: var(--muted); line-height: 1.75; margin-bottom: 2.5rem; }
    .about-portrait-wrap { display: flex; justify-content: center; }
    .about-portrait { position: relative; width: 20rem; height: 20rem; cursor: pointer; }
    .about-portrait img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        border-radius: 9999px;
        border: 4px solid var(--surface);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        transition: transform 0.7s;
    }
    .about-portrait:hover img { transform: scale(1.05); }
    .about-ring {
        position: absolute;
        inset: -0.75rem;
        border: 2px dashed rgba(249, 115, 22, 0.3);
        border-radius: 9999px;
        animation: spin 20s linear infinite;
    }
    .about-stat {
        position: absolute;
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 0.75rem 1rem;
        border-radius: 1rem;
        background: var(--surface);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        animation: float 3s ease-in-out infinite;
    }
    .about-stat strong { font-size: 1.5rem; color: var(--primary); }
    .about-stat span { font-size: 0.75rem; color: #6b7280; }
    .about-stat--projects { top: 1rem; right: -1.5rem; }
    .about-stat--years { bottom: 1rem; left: -1.5rem; animation-delay: 1s; }
    .skills { display: flex; flex-direction: column; gap: 1.5rem; }
    .skill-label { display: flex; justify-content: space-between; margin-bottom: 0.5rem; font-size: 0.875rem; }
    .skill:hover .skill-name { color: var(--primary); }
    .skill-count { font-weight: 700; color: var(--primary); }
    .skill-track { height: 0.75rem; border-radius: 9999px; background: #ffedd5; overflow: hidden; }
    .skill-fill {
        height: 100%;
        border-radius: 9999px;
        background: linear-gradient(to right, var(--primary), #fb923c);
        opacity: 0;
        transition: all 1s ease-out;
    }
    .skill-fill.shown { opacity: 1; }
    @media (max-width: 1024px) {
        .about-grid { grid-template-columns: 1fr; }
        .about-portrait { width: 16rem; height: 16rem; }
    }
"#;
