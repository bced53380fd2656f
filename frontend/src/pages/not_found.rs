use yew::prelude::*;
use yew_router::prelude::*;

use crate::sections::shared::SITE_CSS;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <style>{SITE_CSS}</style>
            <style>{NOT_FOUND_CSS}</style>
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"This page doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="button-primary">{"Back home"}</Link<Route>>
            </div>
        </>
    }
}

const NOT_FOUND_CSS: &str = r#"
    .not-found {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        text-align: center;
    }
    .not-found h1 { font-size: 6rem; font-weight: 700; color: var(--primary); margin: 0; }
    .not-found p { color: var(--muted); }
    .not-found a { text-decoration: none; }
"#;
