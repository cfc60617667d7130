//! Technology stack layers with tap-to-flash badges

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::content;

const FLASH_MS: u32 = 200;

#[function_component(TechStack)]
pub fn tech_stack() -> Html {
    let catalog = content::catalog();

    html! {
        <section id="tech" class="tech-section">
            <h2>{"Under the hood"}</h2>
            <div class="tech-layers">
                { for catalog.tech.iter().map(|layer| html! {
                    <div class="tech-layer" key={layer.layer.clone()}>
                        <h4>{ &layer.layer }</h4>
                        <div class="tech-items">
                            { for layer.items.iter().map(|item| html! {
                                <TechBadge key={item.clone()} label={item.clone()} />
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TechBadgeProps {
    label: String,
}

#[function_component(TechBadge)]
fn tech_badge(props: &TechBadgeProps) -> Html {
    let flashed = use_state(|| false);

    {
        let flashed = flashed.clone();
        use_effect_with(*flashed, move |&lit| {
            let timeout = lit.then(|| Timeout::new(FLASH_MS, move || flashed.set(false)));
            move || drop(timeout)
        });
    }

    let onclick = {
        let flashed = flashed.clone();
        Callback::from(move |_| flashed.set(true))
    };

    html! {
        <span
            class={classes!("badge", (*flashed).then_some("flash"))}
            {onclick}
        >
            { &props.label }
        </span>
    }
}
