use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;
use super::binding::{RevealSpec, Target, Trigger};
use super::scope::{BindingId, RevealScope};
use super::visual::{Tween, VisualState};

// Everything the driver writes inline, and therefore everything it reverts.
const WRITTEN_PROPERTIES: [&str; 4] = ["transition", "opacity", "transform", "transform-origin"];

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Whether a trigger whose top edge sits at `top` has reached the start line.
/// Without a usable viewport height the observer's own verdict is used.
pub fn should_fire(is_intersecting: bool, top: f64, viewport_height: f64) -> bool {
    if viewport_height <= 0.0 {
        return is_intersecting;
    }
    top <= viewport_height * config::REVEAL_START_FRACTION
}

fn resolve_targets(root: &Element, target: &Target) -> Vec<HtmlElement> {
    match target {
        Target::Element(selector) => root
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .into_iter()
            .collect(),
        Target::ChildrenOf(selector) => {
            let Some(parent) = root.query_selector(selector).ok().flatten() else {
                return Vec::new();
            };
            let children = parent.children();
            (0..children.length())
                .filter_map(|i| children.item(i))
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect()
        }
        Target::Matching(selector) => {
            let Ok(nodes) = root.query_selector_all(selector) else {
                return Vec::new();
            };
            (0..nodes.length())
                .filter_map(|i| nodes.get(i))
                .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
                .collect()
        }
    }
}

fn apply_state(element: &HtmlElement, state: &VisualState) {
    let style = element.style();
    for (name, value) in state.css_properties() {
        let _ = style.set_property(name, &value);
    }
}

fn play(elements: &[HtmlElement], tween: &Tween, touched: &RefCell<Vec<HtmlElement>>) {
    for (index, element) in elements.iter().enumerate() {
        let style = element.style();
        let _ = style.set_property("transition", "none");
        apply_state(element, &tween.from);
        if let Some(origin) = tween.origin {
            let _ = style.set_property("transform-origin", origin);
        }

        // Reading layout commits the from-state before the transition is set
        let _ = element.offset_height();

        let _ = style.set_property("transition", &tween.transition(index));
        apply_state(element, &tween.to);
        touched.borrow_mut().push(element.clone());
    }
}

fn play_fired(root: &Element, fired: &[(BindingId, RevealSpec)], touched: &RefCell<Vec<HtmlElement>>) {
    for (_, spec) in fired {
        // Targets are looked up again here: a grid may have re-rendered since arming
        let elements = resolve_targets(root, &spec.target);
        play(&elements, &spec.tween, touched);
    }
}

fn revert(elements: &[HtmlElement]) {
    for element in elements {
        let style = element.style();
        for name in WRITTEN_PROPERTIES {
            let _ = style.remove_property(name);
        }
    }
}

/// Browser side of a section's reveal scope: one intersection observer for
/// all viewport triggers, plus the inline styles written while playing.
pub struct RevealDriver {
    scope: Rc<RefCell<RevealScope>>,
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
    touched: Rc<RefCell<Vec<HtmlElement>>>,
}

impl RevealDriver {
    pub fn start(root: &Element, section: &'static str, specs: Vec<RevealSpec>) -> Self {
        let mut scope = RevealScope::new(section);
        let mut watched: Vec<(Element, BindingId)> = Vec::new();
        let mut on_mount: Vec<BindingId> = Vec::new();

        for spec in specs {
            let id = scope.register(spec);
            if resolve_targets(root, &spec.target).is_empty() {
                debug!("{}: nothing matches {:?}, binding {:?} stays idle", section, spec.target, id);
                continue;
            }
            match spec.trigger {
                Trigger::Mount => {
                    scope.arm(id);
                    on_mount.push(id);
                }
                Trigger::Viewport(selector) => match root.query_selector(selector).ok().flatten() {
                    Some(trigger) => {
                        scope.arm(id);
                        watched.push((trigger, id));
                    }
                    None => debug!("{}: trigger {} not found, binding {:?} stays idle", section, selector, id),
                },
            }
        }
        debug!("{}: {} reveal bindings armed", section, scope.armed());

        let scope = Rc::new(RefCell::new(scope));
        let touched = Rc::new(RefCell::new(Vec::new()));

        let fired = scope.borrow_mut().fire_all(on_mount);
        play_fired(root, &fired, &touched);

        let (observer, callback) = if watched.is_empty() {
            (None, None)
        } else {
            match Self::observe(root.clone(), watched, scope.clone(), touched.clone()) {
                Some((observer, callback)) => (Some(observer), Some(callback)),
                None => (None, None),
            }
        };

        RevealDriver {
            scope,
            observer,
            _callback: callback,
            touched,
        }
    }

    fn observe(
        root: Element,
        watched: Vec<(Element, BindingId)>,
        scope: Rc<RefCell<RevealScope>>,
        touched: Rc<RefCell<Vec<HtmlElement>>>,
    ) -> Option<(IntersectionObserver, ObserverCallback)> {
        let mut triggers: Vec<Element> = Vec::new();
        for (trigger, _) in &watched {
            if !triggers.contains(trigger) {
                triggers.push(trigger.clone());
            }
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            if scope.borrow().is_released() {
                return;
            }
            let viewport_height = web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);

            let mut ready = Vec::new();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let top = entry.bounding_client_rect().top();
                if !should_fire(entry.is_intersecting(), top, viewport_height) {
                    continue;
                }
                let trigger = entry.target();
                observer.unobserve(&trigger);
                ready.extend(
                    watched
                        .iter()
                        .filter(|(el, _)| *el == trigger)
                        .map(|(_, id)| *id),
                );
            }

            let fired = scope.borrow_mut().fire_all(ready);
            play_fired(&root, &fired, &touched);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config::reveal_root_margin());
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(_) => {
                debug!("intersection observer unavailable, reveals stay idle");
                return None;
            }
        };
        for trigger in &triggers {
            observer.observe(trigger);
        }
        Some((observer, callback))
    }

    /// Cancels every binding, stops observing and puts the touched elements
    /// back to their own styles, cutting off transitions still in flight.
    pub fn teardown(self) {
        let released = self.scope.borrow_mut().release();
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        revert(&self.touched.borrow());
        debug!("{}: released {} reveal bindings", self.scope.borrow().section(), released);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_at_the_start_line() {
        assert!(should_fire(true, 800.0, 1000.0));
        assert!(!should_fire(true, 800.5, 1000.0));
        assert!(should_fire(false, 120.0, 1000.0));
    }

    #[test]
    fn fires_for_triggers_already_scrolled_past() {
        assert!(should_fire(false, -2400.0, 1000.0));
    }

    #[test]
    fn below_the_line_waits() {
        assert!(!should_fire(false, 1500.0, 1000.0));
    }

    #[test]
    fn falls_back_to_observer_verdict() {
        assert!(should_fire(true, 5000.0, 0.0));
        assert!(!should_fire(false, -10.0, 0.0));
    }
}
