//! Download call-to-action buttons.
//!
//! Every button plays a canned toast script from the catalog; the button
//! shows a spinner and ignores further clicks while its script runs.

use yew::prelude::*;

use crate::components::{play_script, Spinner, Toaster};
use crate::content;

/// (action id, icon class, button label); ids match the catalog scripts
const ACTIONS: [(&str, &str, &str); 4] = [
    ("demo", "fas fa-play", "Launch Demo"),
    ("download", "fas fa-download", "Download App"),
    ("pwa", "fas fa-globe", "Open PWA"),
    ("schedule", "fas fa-calendar", "Schedule a Demo"),
];

#[function_component(Download)]
pub fn download() -> Html {
    let toaster = use_context::<Toaster>().expect("toast context");
    let busy = use_state(|| None::<&'static str>);

    html! {
        <section id="download" class="download-section">
            <h2>{"Take it for a spin"}</h2>
            <div class="download-actions">
                { for ACTIONS.iter().map(|&(id, icon, label)| {
                    let onclick = {
                        let toaster = toaster.clone();
                        let busy = busy.clone();
                        Callback::from(move |_| {
                            if busy.is_some() {
                                return;
                            }
                            if let Some(script) = content::catalog().action(id) {
                                busy.set(Some(id));
                                let done = {
                                    let busy = busy.clone();
                                    Callback::from(move |_| busy.set(None))
                                };
                                play_script(toaster.clone(), script.to_vec(), Some(done));
                            }
                        })
                    };

                    let running = *busy == Some(id);
                    html! {
                        <button
                            class="btn download-btn"
                            {onclick}
                            disabled={busy.is_some()}
                            key={id}
                        >
                            { if running {
                                html! { <Spinner /> }
                            } else {
                                html! { <i class={icon}></i> }
                            } }
                            <span class="label">{ label }</span>
                        </button>
                    }
                }) }
            </div>
        </section>
    }
}
