use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::filter::{filter_items, Category, CategoryFilter, FilterAction};
use crate::config;
use crate::content::{Project, LOREM_INTRO, PROJECTS};
use crate::hooks::reveal::use_reveal;
use crate::hooks::timed::use_lock_release;
use crate::sections::shared::{reveal_classes, stagger_style, Enter, SectionHeading};

const VISIBLE_TAGS: usize = 3;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    index: usize,
    visible: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let is_hovered = use_state(|| false);
    let project = props.project;

    let on_enter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let on_leave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    let hidden_tags = project.tags.len().saturating_sub(VISIBLE_TAGS);

    html! {
        <div
            class={classes!("project-card", reveal_classes(props.visible, Enter::Scale), (*is_hovered).then_some("hovered"))}
            style={stagger_style(props.index, 150)}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <div class="project-image">
                <img src={project.image} alt={project.title} />
                <div class="project-overlay">
                    <a href={project.github} class="project-action" aria-label="Source code">{"gh"}</a>
                    <a href={project.demo} class="project-action" aria-label="Live demo">{"↗"}</a>
                </div>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <div class="project-tags">
                    { for project.tags.iter().take(VISIBLE_TAGS).map(|tag| html! {
                        <span class="project-tag">{*tag}</span>
                    }) }
                    if hidden_tags > 0 {
                        <span class="project-tag project-tag--more">{format!("+{}", hidden_tags)}</span>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let config = config::animation();
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config.reveal_threshold);
    let filter = use_reducer(CategoryFilter::default);

    {
        let filter = filter.clone();
        use_lock_release(
            filter.is_animating(),
            config.filter_lock_ms,
            Callback::from(move |_| filter.dispatch(FilterAction::ReleaseLock)),
        );
    }

    let active = filter.active();
    let shown = filter_items(&PROJECTS, active);

    html! {
        <section id="projects" class="projects" ref={section_ref}>
            <style>{PROJECTS_CSS}</style>
            <div class="container">
                <SectionHeading badge="My Work" title="My Projects" intro={LOREM_INTRO} visible={visible} />

                <div class={classes!("project-tabs", reveal_classes(visible, Enter::Up))}>
                    { for Category::TABS.iter().map(|category| {
                        let category = *category;
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.dispatch(FilterAction::Select(category)))
                        };
                        html! {
                            <button
                                class={classes!("project-tab", (category == active).then_some("active"))}
                                onclick={onclick}
                            >
                                {category.label()}
                            </button>
                        }
                    }) }
                </div>

                <div class={classes!("project-grid", filter.is_animating().then_some("switching"))}>
                    { for shown.into_iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.id} project={project} index={index} visible={visible} />
                    }) }
                </div>
            </div>
        </section>
    }
}

const PROJECTS_CSS: &str = r#"
    .projects { background: var(--surface-alt); }
    .project-tabs { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; margin-bottom: 3rem; }
    .project-tab {
        padding: 0.6rem 1.5rem;
        border: none;
        border-radius: 9999px;
        background: var(--surface);
        color: var(--muted);
        font-weight: 500;
        cursor: pointer;
        transition: all 0.3s;
    }
    .project-tab:hover { color: var(--primary); transform: scale(1.05); }
    .project-tab.active { background: var(--primary); color: #fff; box-shadow: 0 10px 15px rgba(249, 115, 22, 0.3); }
    .project-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; transition: all 0.5s; }
    .project-grid.switching { opacity: 0; transform: scale(0.95); }
    .project-card {
        border-radius: 1rem;
        overflow: hidden;
        background: var(--surface);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .project-card.hovered { box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15); }
    .project-image { position: relative; height: 14rem; overflow: hidden; }
    .project-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
    .project-card.hovered .project-image img { transform: scale(1.1); }
    .project-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent);
        opacity: 0;
        transition: opacity 0.5s;
    }
    .project-card.hovered .project-overlay { opacity: 1; }
    .project-action {
        padding: 0.75rem 1rem;
        border-radius: 9999px;
        background: #fff;
        color: #1f2937;
        text-decoration: none;
        transform: translateY(2.5rem);
        transition: all 0.5s;
    }
    .project-card.hovered .project-action { transform: none; }
    .project-action:hover { background: var(--primary); color: #fff; }
    .project-body { padding: 1.5rem; }
    .project-body h3 { font-size: 1.25rem; font-weight: 600; margin: 0 0 1rem; transition: color 0.3s; }
    .project-card.hovered h3 { color: var(--primary); }
    .project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .project-tag {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: var(--primary-soft);
        color: var(--primary);
        font-size: 0.75rem;
        font-weight: 500;
    }
    .project-tag--more { background: var(--surface-alt); color: var(--muted); }
    @media (max-width: 1024px) { .project-grid { grid-template-columns: repeat(2, 1fr); } }
    @media (max-width: 640px) { .project-grid { grid-template-columns: 1fr; } }
"#;
