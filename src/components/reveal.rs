use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Flips to `true` the first time `node` scrolls into view, then stops observing.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64, root_margin: &'static str) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut active = None;
                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let hit = entries
                                .iter()
                                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                            if hit {
                                visible.set(true);
                                observer.disconnect();
                            }
                        },
                    );
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    options.set_root_margin(root_margin);
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            active = Some((observer, callback));
                        }
                        Err(err) => log::warn!("IntersectionObserver unavailable: {:?}", err),
                    }
                }
                move || {
                    if let Some((observer, _callback)) = active {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in once they are a tenth visible.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), 0.1, "0px 0px -50px 0px");

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), visible.then_some("active"))}>
            { for props.children.iter() }
        </div>
    }
}
