use yew::prelude::*;
use yew_hooks::prelude::*;
use log::debug;
use web_sys::{window, AddEventListenerOptions, Document, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;
use crate::content::image_path;

/// Section anchors on the page. Each section renders `id()` on its root and
/// every link scrolls to one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Inicio,
    Nosotros,
    Servicios,
    Proyectos,
    Metodologia,
    Blog,
    Contacto,
}

impl Anchor {
    pub const ALL: [Anchor; 7] = [
        Anchor::Inicio,
        Anchor::Nosotros,
        Anchor::Servicios,
        Anchor::Proyectos,
        Anchor::Metodologia,
        Anchor::Blog,
        Anchor::Contacto,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Inicio => "inicio",
            Anchor::Nosotros => "nosotros",
            Anchor::Servicios => "servicios",
            Anchor::Proyectos => "proyectos",
            Anchor::Metodologia => "metodologia",
            Anchor::Blog => "blog",
            Anchor::Contacto => "contacto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Inicio => "Inicio",
            Anchor::Nosotros => "Nosotros",
            Anchor::Servicios => "Servicios",
            Anchor::Proyectos => "Proyectos",
            Anchor::Metodologia => "Metodología",
            Anchor::Blog => "Blog",
            Anchor::Contacto => "Contacto",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > config::SCROLLED_THRESHOLD_PX
}

/// Anything that can bring an element with a given id into view.
pub trait ScrollSurface {
    /// Returns false when no element carries `id`.
    fn scroll_into_view(&self, id: &str) -> bool;
}

impl ScrollSurface for Document {
    fn scroll_into_view(&self, id: &str) -> bool {
        match self.get_element_by_id(id) {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

/// Smooth-scrolls to `#id` style hrefs. Anything else, or an id missing from
/// the document, is a no-op.
pub fn scroll_to_href<S: ScrollSurface>(surface: &S, href: &str) -> bool {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => {
            let found = surface.scroll_into_view(id);
            if !found {
                debug!("no element for {}, staying put", href);
            }
            found
        }
        _ => false,
    }
}

pub fn scroll_to(anchor: Anchor) {
    if let Some(document) = window().and_then(|w| w.document()) {
        scroll_to_href(&document, &anchor.href());
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub anchor: Anchor,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    pub children: Children,
}

/// In-page link that smooth-scrolls instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let anchor = props.anchor;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to(anchor);
            on_navigate.emit(());
        })
    };

    html! {
        <a href={props.anchor.href()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let is_scrolled_state = use_state(|| false);
    let menu_open = use_bool_toggle(false);

    {
        let is_scrolled_state = is_scrolled_state.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let offset = window.scroll_y().unwrap_or(0.0);
                    is_scrolled_state.set(is_scrolled(offset));
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                    &options,
                );
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled_state).then(|| "scrolled"))}>
            <div class="nav-content">
                <AnchorLink anchor={Anchor::Inicio} class="nav-logo" on_navigate={close_menu.clone()}>
                    <img src={image_path("gisoc-logo.png")} alt="GISOC Logo" />
                </AnchorLink>

                <div class="nav-links">
                    { for Anchor::ALL.iter().map(|anchor| html! {
                        <AnchorLink key={anchor.id()} anchor={*anchor} class="nav-link">
                            {anchor.label()}
                        </AnchorLink>
                    })}
                </div>

                <div class="nav-cta">
                    <AnchorLink anchor={Anchor::Contacto} class="nav-cta-button">
                        {"Conversemos"}
                    </AnchorLink>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for Anchor::ALL.iter().map(|anchor| html! {
                    <AnchorLink key={anchor.id()} anchor={*anchor} class="mobile-link" on_navigate={close_menu.clone()}>
                        {anchor.label()}
                    </AnchorLink>
                })}
                <AnchorLink anchor={Anchor::Contacto} class="mobile-cta" on_navigate={close_menu.clone()}>
                    {"Conversemos"}
                </AnchorLink>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo img {
                    height: 3rem;
                    width: auto;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .nav-link:hover {
                    color: #E53935;
                }
                .nav-cta-button, .mobile-cta {
                    display: inline-flex;
                    padding: 0.625rem 1.5rem;
                    background: #E53935;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .nav-cta-button:hover, .mobile-cta:hover {
                    background: #C62828;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: #374151;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: none;
                }
                @media (max-width: 1024px) {
                    .nav-links, .nav-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem 1rem;
                        background: #fff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        opacity: 0;
                        transform: translateY(-1rem);
                        pointer-events: none;
                        transition: all 0.3s;
                    }
                    .mobile-menu.open {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }
                    .mobile-link {
                        color: #374151;
                        font-weight: 500;
                        text-decoration: none;
                        padding: 0.5rem 0;
                    }
                    .mobile-cta {
                        justify-content: center;
                        margin-top: 1rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeDocument {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl ScrollSurface for FakeDocument {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    fn page() -> FakeDocument {
        FakeDocument {
            ids: Anchor::ALL.iter().map(|a| a.id()).collect(),
            scrolled: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn scrolled_flips_exactly_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
        // and back again on the way up
        assert!(!is_scrolled(49.0));
    }

    #[test]
    fn every_anchor_href_reaches_its_section() {
        let doc = page();
        for anchor in Anchor::ALL {
            assert!(scroll_to_href(&doc, &anchor.href()));
        }
        let expected: Vec<String> = Anchor::ALL.iter().map(|a| a.id().to_string()).collect();
        assert_eq!(*doc.scrolled.borrow(), expected);
    }

    #[test]
    fn anchor_ids_are_unique() {
        let mut ids: Vec<&str> = Anchor::ALL.iter().map(|a| a.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Anchor::ALL.len());
    }

    #[test]
    fn scrolls_to_existing_anchor() {
        let doc = page();
        assert!(scroll_to_href(&doc, "#metodologia"));
        assert_eq!(*doc.scrolled.borrow(), vec!["metodologia".to_string()]);
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let doc = page();
        assert!(!scroll_to_href(&doc, "#precios"));
        assert!(!scroll_to_href(&doc, "#"));
        assert!(!scroll_to_href(&doc, "contacto"));
        assert!(doc.scrolled.borrow().is_empty());
    }
}
