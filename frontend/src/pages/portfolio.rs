use yew::prelude::*;

use crate::sections::{
    about::About, contact::Contact, footer::Footer, header::Header, hero::Hero,
    projects::Projects, services::Services, shared::SITE_CSS, testimonials::Testimonials,
};

/// The single page site, sections in navigation order.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <>
            <style>{SITE_CSS}</style>
            <Header />
            <main>
                <Hero />
                <About />
                <Services />
                <Projects />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
