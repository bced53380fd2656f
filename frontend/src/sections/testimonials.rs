use std::num::NonZeroUsize;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::animation::carousel::{Carousel, CarouselAction};
use crate::config;
use crate::content::{Testimonial, LOREM_INTRO, TESTIMONIALS};
use crate::hooks::reveal::use_reveal;
use crate::hooks::timed::use_lock_release;
use crate::sections::shared::{reveal_classes, Enter, SectionHeading};

const MAX_RATING: usize = 5;

fn slide_count() -> NonZeroUsize {
    NonZeroUsize::new(TESTIMONIALS.len()).unwrap_or(NonZeroUsize::MIN)
}

fn stars(rating: usize) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} out of {}", rating, MAX_RATING)}>
            { for (0..MAX_RATING).map(|i| html! {
                <span class={classes!("star", (i < rating).then_some("filled"))}>{"★"}</span>
            }) }
        </div>
    }
}

fn slide(testimonial: &Testimonial) -> Html {
    html! {
        <div class="slide" key={testimonial.id}>
            <div class="slide-card">
                <span class="slide-quote-mark">{"“"}</span>
                <img class="slide-avatar" src={testimonial.avatar} alt={testimonial.name} />
                { stars(testimonial.rating) }
                <p class="slide-quote">{testimonial.quote}</p>
                <h4>{testimonial.name}</h4>
                <span class="slide-role">{testimonial.role}</span>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let config = config::animation();
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config.reveal_threshold);
    let carousel = use_reducer(|| Carousel::new(slide_count()));

    {
        let carousel = carousel.clone();
        use_lock_release(
            carousel.is_animating(),
            config.carousel_lock_ms,
            Callback::from(move |_| carousel.dispatch(CarouselAction::ReleaseLock)),
        );
    }

    {
        let carousel = carousel.clone();
        use_interval(
            move || carousel.dispatch(CarouselAction::AutoAdvance),
            config.carousel_auto_advance_ms,
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let current = carousel.current_index();
    let track_style = format!("transform: translateX(-{}%);", current * 100);

    html! {
        <section id="testimonials" class="testimonials" ref={section_ref}>
            <style>{TESTIMONIALS_CSS}</style>
            <div class="container">
                <SectionHeading badge="Testimonials" title="What Clients Say" intro={LOREM_INTRO} visible={visible} />

                <div class={classes!("carousel", reveal_classes(visible, Enter::Up))}>
                    <div class="carousel-window">
                        <div class="carousel-track" style={track_style}>
                            { for TESTIMONIALS.iter().map(slide) }
                        </div>
                    </div>

                    <button
                        class="carousel-arrow carousel-arrow--prev"
                        onclick={on_prev}
                        disabled={carousel.is_animating()}
                        aria-label="Previous testimonial"
                    >
                        {"‹"}
                    </button>
                    <button
                        class="carousel-arrow carousel-arrow--next"
                        onclick={on_next}
                        disabled={carousel.is_animating()}
                        aria-label="Next testimonial"
                    >
                        {"›"}
                    </button>

                    <div class="carousel-dots">
                        { for (0..carousel.len()).map(|index| {
                            let onclick = {
                                let carousel = carousel.clone();
                                Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(index)))
                            };
                            html! {
                                <button
                                    class={classes!("carousel-dot", (index == current).then_some("active"))}
                                    onclick={onclick}
                                    disabled={carousel.is_animating()}
                                    aria-label={format!("Go to testimonial {}", index + 1)}
                                ></button>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

const TESTIMONIALS_CSS: &str = r#"
    .carousel { position: relative; max-width: 48rem; margin: 0 auto; }
    .carousel-window { overflow: hidden; border-radius: 1.5rem; }
    .carousel-track { display: flex; transition: transform 0.6s ease-in-out; }
    .slide { flex: 0 0 100%; padding: 0 1rem; box-sizing: border-box; }
    .slide-card {
        position: relative;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        padding: 3rem 2rem;
        border-radius: 1.5rem;
        background: var(--surface);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
    }
    .slide-quote-mark { position: absolute; top: 1rem; left: 1.5rem; font-size: 4rem; color: rgba(249, 115, 22, 0.2); }
    .slide-avatar {
        width: 5rem;
        height: 5rem;
        border-radius: 9999px;
        object-fit: cover;
        border: 4px solid var(--primary-soft);
        margin-bottom: 1rem;
    }
    .stars { display: flex; gap: 0.25rem; margin-bottom: 1rem; }
    .star { color: #d1d5db; }
    .star.filled { color: #facc15; }
    .slide-quote { color: var(--muted); font-style: italic; line-height: 1.75; margin-bottom: 1.5rem; }
    .slide-card h4 { margin: 0; font-size: 1.125rem; }
    .slide-role { font-size: 0.875rem; color: var(--primary); }
    .carousel-arrow {
        position: absolute;
        top: 45%;
        width: 3rem;
        height: 3rem;
        border: none;
        border-radius: 9999px;
        background: var(--surface);
        color: var(--muted);
        font-size: 1.5rem;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        transition: all 0.3s;
    }
    .carousel-arrow:hover:not(:disabled) { background: var(--primary); color: #fff; transform: scale(1.1); }
    .carousel-arrow:disabled { opacity: 0.5; cursor: not-allowed; }
    .carousel-arrow--prev { left: -1.5rem; }
    .carousel-arrow--next { right: -1.5rem; }
    .carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 2rem; }
    .carousel-dot {
        width: 0.75rem;
        height: 0.75rem;
        border: none;
        border-radius: 9999px;
        background: #d1d5db;
        cursor: pointer;
        transition: all 0.3s;
    }
    .carousel-dot.active { width: 2rem; background: var(--primary); }
    @media (max-width: 640px) {
        .carousel-arrow--prev { left: 0; }
        .carousel-arrow--next { right: 0; }
    }
"#;
