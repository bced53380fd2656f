use yew::prelude::*;

/// Direction an element travels while entering.
#[derive(Clone, Copy, PartialEq)]
pub enum Enter {
    Up,
    Left,
    Right,
    Scale,
}

impl Enter {
    fn class(self) -> &'static str {
        match self {
            Enter::Up => "reveal--up",
            Enter::Left => "reveal--left",
            Enter::Right => "reveal--right",
            Enter::Scale => "reveal--scale",
        }
    }
}

/// Classes for an element gated by a section's reveal flag.
pub fn reveal_classes(visible: bool, enter: Enter) -> Classes {
    classes!("reveal", enter.class(), visible.then_some("is-visible"))
}

/// `transition-delay` for the `index`th item of a staggered list.
pub fn stagger_style(index: usize, step_ms: usize) -> String {
    format!("transition-delay: {}ms;", index * step_ms)
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub badge: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub visible: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class={classes!("section-heading", reveal_classes(props.visible, Enter::Up))}>
            <span class="section-badge">{props.badge}</span>
            <h2 class="section-title">{props.title}</h2>
            <p class="section-intro">{props.intro}</p>
        </div>
    }
}

pub const SITE_CSS: &str = r#"
    :root {
        --primary: #f97316;
        --primary-soft: rgba(249, 115, 22, 0.1);
        --text: #111827;
        --muted: #4b5563;
        --surface: #ffffff;
        --surface-alt: #f9fafb;
    }
    html.dark {
        --text: #f9fafb;
        --muted: #9ca3af;
        --surface: #111827;
        --surface-alt: #1f2937;
    }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: var(--text);
        background: var(--surface);
    }
    section { position: relative; overflow: hidden; padding: 6rem 1.5rem; }
    section:nth-of-type(even) { background: var(--surface-alt); }
    .container { max-width: 80rem; margin: 0 auto; }

    .reveal { opacity: 0; transition: opacity 0.7s ease-out, transform 0.7s ease-out; }
    .reveal--up { transform: translateY(2rem); }
    .reveal--left { transform: translateX(-3rem); }
    .reveal--right { transform: translateX(3rem); }
    .reveal--scale { transform: scale(0.9); }
    .reveal.is-visible { opacity: 1; transform: none; }

    .section-heading { text-align: center; margin-bottom: 4rem; }
    .section-badge {
        display: inline-block;
        padding: 0.375rem 1rem;
        border-radius: 9999px;
        background: var(--primary-soft);
        color: var(--primary);
        font-size: 0.875rem;
        font-weight: 500;
        margin-bottom: 1rem;
    }
    .section-title { font-size: 2.25rem; font-weight: 700; margin: 0 0 1rem; }
    .section-intro { color: var(--muted); max-width: 42rem; margin: 0 auto; }

    .button-primary {
        background: var(--primary);
        color: #fff;
        border: none;
        border-radius: 0.75rem;
        padding: 0.75rem 2rem;
        font-weight: 500;
        cursor: pointer;
        transition: transform 0.3s, box-shadow 0.3s;
    }
    .button-primary:hover { transform: scale(1.05); box-shadow: 0 10px 25px rgba(249, 115, 22, 0.3); }
    .button-primary:disabled { cursor: not-allowed; transform: none; }

    @keyframes blink { 50% { opacity: 0; } }
    @keyframes float { 50% { transform: translateY(-12px); } }
    @keyframes spin { to { transform: rotate(360deg); } }
    @keyframes scale-in { from { transform: scale(0); } to { transform: scale(1); } }
"#;
