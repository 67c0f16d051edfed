//! Scroll Reveal Component
//! Fades its children in the first time they enter the viewport

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::utils::constants::REVEAL_THRESHOLD;

#[component]
pub fn ScrollReveal(
    children: Children,
    /// One of `fade-in`, `slide-up`, `scale-up`
    #[prop(default = "fade-in")]
    animation: &'static str,
    /// Transition delay in milliseconds
    #[prop(optional)]
    delay: u32,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let (revealed, set_revealed) = signal(false);
    let observer = StoredValue::new_local(None::<IntersectionObserver>);

    Effect::new(move || {
        let Some(element) = node_ref.get() else {
            return;
        };
        if observer.with_value(|o| o.is_some()) {
            return;
        }

        match observe_once(&element, move || set_revealed.set(true)) {
            Ok(created) => observer.set_value(Some(created)),
            Err(e) => {
                // No observer support: show the content right away
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                set_revealed.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer.try_with_value(|o| {
            if let Some(o) = o {
                o.disconnect();
            }
        });
    });

    let class_name = move || {
        let state = if revealed.get() { " revealed" } else { "" };
        format!("reveal reveal-{}{}", animation, state)
    };

    view! {
        <div node_ref=node_ref class=class_name style=format!("transition-delay: {}ms", delay)>
            {children()}
        </div>
    }
}

/// Observe `element` and call `on_visible` the first time it intersects
fn observe_once(
    element: &web_sys::Element,
    on_visible: impl Fn() + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible();
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    // Lives as long as the observer; released with the page
    callback.forget();
    Ok(observer)
}
