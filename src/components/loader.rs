use gloo_timers::callback::Timeout;
use web_sys::{window, Event};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::dom;
use crate::forms::storage::KeyStore;

const HIDE_AFTER_LOAD_MS: u32 = 600;
const REMOVE_AFTER_HIDE_MS: u32 = 800;
const FALLBACK_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Visible,
    Hiding,
    Gone,
}

/// True the first time it is asked in a session; records the answer.
pub fn claim_splash(store: &dyn KeyStore) -> bool {
    match store.read() {
        Ok(Some(flag)) if flag == "true" => false,
        Ok(_) => {
            if let Err(err) = store.write("true") {
                log::warn!("Could not record splash screen: {}", err);
            }
            true
        }
        Err(err) => {
            log::warn!("Skipping splash screen: {}", err);
            false
        }
    }
}

#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    let phase = use_state(|| {
        if claim_splash(&config::LOADER_SHOWN) {
            LoaderPhase::Visible
        } else {
            LoaderPhase::Gone
        }
    });
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let hide_started = use_mut_ref(|| false);

    let begin_hide = {
        let phase = phase.clone();
        let timers = timers.clone();
        let started = hide_started.clone();
        move |delay: u32| {
            if started.replace(true) {
                return;
            }
            let phase = phase.clone();
            let removal_timers = timers.clone();
            let hide = Timeout::new(delay, move || {
                phase.set(LoaderPhase::Hiding);
                let phase = phase.clone();
                removal_timers.borrow_mut().push(Timeout::new(REMOVE_AFTER_HIDE_MS, move || {
                    phase.set(LoaderPhase::Gone);
                    dom::lock_body_scroll(false);
                }));
            });
            timers.borrow_mut().push(hide);
        }
    };

    {
        let begin_hide = begin_hide.clone();
        let timers = timers.clone();
        let visible = *phase == LoaderPhase::Visible;
        use_effect_with_deps(
            move |_| {
                if visible {
                    dom::lock_body_scroll(true);
                    let loaded = window()
                        .and_then(|w| w.document())
                        .map(|d| d.ready_state() == "complete")
                        .unwrap_or(true);
                    if loaded {
                        begin_hide(HIDE_AFTER_LOAD_MS);
                    }
                    let fallback = Timeout::new(FALLBACK_MS, move || begin_hide(0));
                    timers.borrow_mut().push(fallback);
                }
                || ()
            },
            (),
        );
    }

    {
        let visible = *phase == LoaderPhase::Visible;
        use_event_with_window("load", move |_: Event| {
            if visible {
                begin_hide(HIDE_AFTER_LOAD_MS);
            }
        });
    }

    if *phase == LoaderPhase::Gone {
        return html! {};
    }

    html! {
        <div id="pageLoader" class={classes!("page-loader", (*phase == LoaderPhase::Hiding).then_some("hidden"))}>
            <div class="loader-bg-gradient"></div>
            <div class="loader-particles">
                { for (0..8).map(|_| html! { <div class="particle"></div> }) }
            </div>
            <div class="loader-content">
                <div class="loader-logo-container">
                    <div class="loader-dots">
                        { for (0..8).map(|_| html! { <div class="loader-dot"></div> }) }
                    </div>
                    <img src="/assets/logo.png" alt="Printolution" class="loader-logo" />
                </div>
                <div class="loader-text">{"LOADING"}</div>
                <div class="loader-bar"><div class="loader-bar-fill"></div></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::storage::memory::MemoryKey;

    #[test]
    fn splash_is_claimed_once_per_session() {
        let store = MemoryKey::default();
        assert!(claim_splash(&store));
        assert_eq!(store.get().as_deref(), Some("true"));
        assert!(!claim_splash(&store));
    }

    #[test]
    fn stale_flag_values_still_show_splash() {
        let store = MemoryKey::with("false");
        assert!(claim_splash(&store));
    }
}
