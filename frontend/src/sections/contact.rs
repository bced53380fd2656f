use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{FocusEvent, HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::animation::contact::{ContactAction, ContactForm, ContactPhase};
use crate::config;
use crate::hooks::reveal::use_reveal;
use crate::platform::contact_client::{ContactClientHandle, ContactRequest};
use crate::platform::scheduler::ScheduledTask;
use crate::sections::shared::{reveal_classes, Enter};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or_default]
    pub client: ContactClientHandle,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let config = config::animation();
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config.reveal_threshold_dense);
    let form = use_reducer(ContactForm::default);

    {
        let form = form.clone();
        let client = props.client.clone();
        let email = form.email.clone();
        let phase = form.phase;
        use_effect_with_deps(
            move |phase: &ContactPhase| {
                let alive = Rc::new(Cell::new(true));
                let mut reset = None;
                match phase {
                    ContactPhase::Submitting => {
                        let alive = alive.clone();
                        spawn_local(async move {
                            let result = match ContactRequest::new(&email) {
                                Ok(request) => client.0.send(request).await,
                                Err(e) => Err(e),
                            };
                            if !alive.get() {
                                return;
                            }
                            match result {
                                Ok(()) => {
                                    log::info!("contact request delivered");
                                    form.dispatch(ContactAction::Delivered);
                                }
                                Err(e) => {
                                    log::warn!("contact request failed: {}", e);
                                    form.dispatch(ContactAction::Failed(e.to_string()));
                                }
                            }
                        });
                    }
                    ContactPhase::Submitted => {
                        reset = Some(ScheduledTask::once(config.contact_success_hold_ms, move || {
                            form.dispatch(ContactAction::Reset)
                        }));
                    }
                    ContactPhase::Idle => {}
                }
                move || {
                    alive.set(false);
                    if let Some(task) = reset {
                        task.cancel();
                    }
                }
            },
            phase,
        );
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(ContactAction::Submit);
        })
    };
    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetEmail(input.value()));
        })
    };
    let onfocus = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(ContactAction::Focus))
    };
    let onblur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(ContactAction::Blur))
    };

    let button_label = match form.phase {
        ContactPhase::Idle => "Contact me",
        ContactPhase::Submitting => "Sending...",
        ContactPhase::Submitted => "Sent!",
    };

    html! {
        <section id="contact" class="contact" ref={section_ref}>
            <style>{CONTACT_CSS}</style>
            <div class="container">
                <div class={classes!("contact-card", reveal_classes(visible, Enter::Scale))}>
                    <span class="contact-blob contact-blob--top"></span>
                    <span class="contact-blob contact-blob--bottom"></span>

                    <h2 class={classes!("contact-title", reveal_classes(visible, Enter::Up))}>
                        {"Have an Awesome Project Idea? "}
                        <span class="contact-accent">{"Let's Discuss"}</span>
                    </h2>

                    <form class={classes!("contact-form", reveal_classes(visible, Enter::Up))} onsubmit={onsubmit}>
                        <div class={classes!("contact-field", form.focused.then_some("focused"))}>
                            <span class="contact-icon">{"✉"}</span>
                            <input
                                type="email"
                                placeholder="Enter Email Address"
                                value={form.email.clone()}
                                oninput={oninput}
                                onfocus={onfocus}
                                onblur={onblur}
                                disabled={form.is_locked()}
                                required=true
                            />
                        </div>
                        <button
                            type="submit"
                            class={classes!("button-primary", "contact-submit", (form.phase == ContactPhase::Submitted).then_some("sent"))}
                            disabled={form.is_locked()}
                        >
                            if form.phase == ContactPhase::Submitting {
                                <span class="contact-spinner"></span>
                            }
                            {button_label}
                        </button>
                    </form>

                    if form.phase == ContactPhase::Submitted {
                        <p class="contact-success">{"Thank you! I'll get back to you soon."}</p>
                    }
                    if let Some(error) = &form.error {
                        <p class="contact-error">{error.clone()}</p>
                    }

                    <div class={classes!("contact-trust", reveal_classes(visible, Enter::Up))}>
                        <span>{"✓ Fast response"}</span>
                        <span>{"✓ Free consultation"}</span>
                        <span>{"✓ No commitment"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact-card {
        position: relative;
        overflow: hidden;
        max-width: 56rem;
        margin: 0 auto;
        padding: 4rem 2rem;
        border-radius: 1.5rem;
        background: linear-gradient(to bottom right, #fff7ed, var(--surface));
        text-align: center;
    }
    .contact-blob {
        position: absolute;
        width: 10rem;
        height: 10rem;
        border-radius: 9999px;
        background: rgba(249, 115, 22, 0.1);
        filter: blur(40px);
        animation: float 6s ease-in-out infinite;
    }
    .contact-blob--top { top: -3rem; right: -3rem; }
    .contact-blob--bottom { bottom: -3rem; left: -3rem; animation-delay: 2s; }
    .contact-title { position: relative; font-size: 2.25rem; font-weight: 700; margin-bottom: 2.5rem; transition-delay: 0.2s; }
    .contact-accent { color: var(--primary); }
    .contact-form {
        position: relative;
        display: flex;
        gap: 1rem;
        max-width: 36rem;
        margin: 0 auto;
        transition-delay: 0.4s;
    }
    .contact-field {
        flex: 1;
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 0 1rem;
        border: 2px solid transparent;
        border-radius: 9999px;
        background: var(--surface);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        transition: all 0.3s;
    }
    .contact-field.focused { border-color: var(--primary); box-shadow: 0 10px 15px rgba(249, 115, 22, 0.15); transform: scale(1.02); }
    .contact-icon { color: #9ca3af; transition: color 0.3s; }
    .contact-field.focused .contact-icon { color: var(--primary); }
    .contact-field input { flex: 1; padding: 1rem 0; border: none; outline: none; background: transparent; font-size: 1rem; }
    .contact-field input:disabled { opacity: 0.6; }
    .contact-submit { display: inline-flex; align-items: center; gap: 0.5rem; white-space: nowrap; }
    .contact-submit:disabled { cursor: not-allowed; opacity: 0.85; }
    .contact-submit.sent { background: #22c55e; }
    .contact-spinner {
        width: 1rem;
        height: 1rem;
        border: 2px solid rgba(255, 255, 255, 0.4);
        border-top-color: #fff;
        border-radius: 9999px;
        animation: spin 1s linear infinite;
    }
    .contact-success { margin-top: 1.5rem; color: #16a34a; font-weight: 500; animation: scale-in 0.3s ease-out; }
    .contact-error { margin-top: 1.5rem; color: #dc2626; font-weight: 500; }
    .contact-trust {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1.5rem;
        margin-top: 2.5rem;
        font-size: 0.875rem;
        color: var(--muted);
        transition-delay: 0.6s;
    }
    @media (max-width: 640px) {
        .contact-form { flex-direction: column; }
        .contact-title { font-size: 1.75rem; }
    }
"#;
