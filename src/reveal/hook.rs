use web_sys::Element;
use yew::prelude::*;

use super::binding::RevealSpec;
use super::dom::RevealDriver;

/// Registers a section's reveal bindings on mount and releases them on
/// unmount. Attach the returned ref to the section's root element; every
/// selector in `specs` is resolved inside that subtree only.
#[hook]
pub fn use_reveal(section: &'static str, specs: fn() -> Vec<RevealSpec>) -> NodeRef {
    let root = use_node_ref();

    {
        let root = root.clone();
        use_effect_with_deps(
            move |_| {
                let driver = root
                    .cast::<Element>()
                    .map(|el| RevealDriver::start(&el, section, specs()));
                move || {
                    if let Some(driver) = driver {
                        driver.teardown();
                    }
                }
            },
            (),
        );
    }

    root
}
