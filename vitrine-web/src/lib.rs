//! Vitrine showcase UI
//!
//! Single-page marketing showcase built with Yew. Simulates a cross-platform
//! mobile app in the browser: switching between mock iOS, Android, and Web
//! views, decorative phone mockups, and timer-driven notification toasts.
//! There is no backend and no persistence; every action resolves to canned
//! copy from the embedded catalog.

mod components;
mod content;
mod sections;
mod state;
mod util;

use yew::prelude::*;

use components::{play_script, ToastHost, Toaster};
use sections::{Download, Features, Hero, Showcase, TechStack};
use state::ShowcaseState;

/// Main showcase application component
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastHost>
            <Page />
        </ToastHost>
    }
}

/// Page body; lives below the toast host so it can greet on startup
#[function_component(Page)]
fn page() -> Html {
    let state = use_reducer(ShowcaseState::default);
    let toaster = use_context::<Toaster>().expect("toast context");

    {
        let toaster = toaster.clone();
        use_effect_with((), move |_| {
            if let Some(script) = content::catalog().action("welcome") {
                play_script(toaster, script.to_vec(), None);
            }
            || ()
        });
    }

    html! {
        <main class="showcase-page">
            <Hero />
            <Showcase state={state.clone()} />
            <Features />
            <TechStack />
            <Download />
        </main>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Mobile app showcase loaded".into());

    yew::Renderer::<App>::new().render();
}
