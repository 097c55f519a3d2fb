use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod contact_form;
mod navigation;
mod reveal {
    pub mod visual;
    pub mod timeline;
    pub mod binding;
    pub mod scope;
    pub mod dom;
    pub mod hook;
}
mod sections {
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod projects;
    pub mod methodology;
    pub mod blog;
    pub mod contact;
    pub mod footer;
}

use navigation::Navigation;
use sections::{
    hero::Hero,
    about::About,
    services::Services,
    projects::Projects,
    methodology::Methodology,
    blog::Blog,
    contact::Contact,
    footer::Footer,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component(Home)]
fn home() -> Html {
    html! {
        <>
            <main>
                <Hero />
                <About />
                <Services />
                <Projects />
                <Methodology />
                <Blog />
                <Contact />
            </main>
            <Footer />
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="site">
                <Navigation />
                <Switch<Route> render={switch} />
            </div>
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #111827;
                    background: #fff;
                }
                h1, h2, h3, p {
                    margin: 0;
                }
                .site {
                    min-height: 100vh;
                }
                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding-left: 2rem;
                    padding-right: 2rem;
                }
                .page-section {
                    padding: 6rem 0;
                    background: #fff;
                }
                .page-section.tinted {
                    background: #F8F9FA;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .section-intro {
                    font-size: 1.125rem;
                    color: #4B5563;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .section-intro.wide {
                    max-width: 48rem;
                }
                .section-intro.narrow {
                    max-width: 36rem;
                    margin: 0;
                }
                .eyebrow {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    background: #FEE2E2;
                    color: #E53935;
                    font-size: 0.875rem;
                    font-weight: 500;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                }
                .divider {
                    width: 5rem;
                    height: 0.25rem;
                    margin: 1.5rem auto 0;
                    background: #E53935;
                    border-radius: 9999px;
                }
                .subheading {
                    font-size: 1.5rem;
                    font-weight: 600;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .lead {
                    font-size: 1.125rem;
                    color: #4B5563;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .card {
                    background: #fff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s;
                }
                .card:hover {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .icon-tile {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    background: #FEE2E2;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                }
                .icon-round {
                    width: 3rem;
                    height: 3rem;
                    margin: 0 auto 0.75rem;
                    border-radius: 9999px;
                    background: #FEE2E2;
                    color: #E53935;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .benefit-item .icon-round {
                    margin: 0;
                }
                .check {
                    flex-shrink: 0;
                    width: 1.5rem;
                    height: 1.5rem;
                    margin-right: 0.75rem;
                    border-radius: 9999px;
                    background: #FEE2E2;
                    color: #E53935;
                    font-size: 0.875rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .check.small {
                    width: 1.25rem;
                    height: 1.25rem;
                    font-size: 0.75rem;
                }
                .accent {
                    color: #E53935;
                }
                .muted {
                    color: #6B7280;
                    font-size: 0.875rem;
                }
                .strong {
                    font-weight: 600;
                    color: #111827;
                }
                .label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #6B7280;
                    margin-bottom: 0.25rem;
                }
                .button-primary {
                    display: inline-flex;
                    align-items: center;
                    padding: 1rem 2rem;
                    background: #E53935;
                    color: #fff;
                    font-weight: 600;
                    border: none;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .button-primary:hover {
                    background: #C62828;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .button-outline {
                    display: inline-flex;
                    align-items: center;
                    padding: 1rem 2rem;
                    background: transparent;
                    color: #374151;
                    font-weight: 600;
                    border: 2px solid #D1D5DB;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .button-outline:hover {
                    border-color: #E53935;
                    color: #E53935;
                }
                .text-link {
                    display: inline-flex;
                    align-items: center;
                    background: none;
                    border: none;
                    padding: 0;
                    color: #E53935;
                    font-weight: 500;
                    font-size: 0.875rem;
                    text-decoration: none;
                    cursor: pointer;
                }
                @media (max-width: 640px) {
                    .section-heading h2 {
                        font-size: 2.25rem;
                    }
                    .container {
                        padding-left: 1rem;
                        padding-right: 1rem;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
