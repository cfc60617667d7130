//! Platform showcase: the switcher and the device mockups.
//!
//! Observes platform changes to pop the switch notice and runs the periodic
//! screen pulse. Neither timer calls back into the view state.

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use vitrine_common::Platform;

use crate::components::{BrowserMockup, PhoneMockup, PlatformSwitcher, Toaster};
use crate::state::{ShowcaseAction, ShowcaseState};

const PULSE_EVERY_MS: u32 = 8_000;
const PULSE_SETTLE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub state: UseReducerHandle<ShowcaseState>,
}

#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let toaster = use_context::<Toaster>().expect("toast context");
    let platform = props.state.platform();

    // Pop a notice when the observed platform changes. First render is the
    // initial state, not a switch, so it stays quiet.
    let seen = use_mut_ref(|| None::<Platform>);
    {
        let toaster = toaster.clone();
        use_effect_with(platform, move |&platform| {
            let previous = seen.borrow_mut().replace(platform);
            if previous.is_some() && previous != Some(platform) {
                toaster.info(format!("Switched to {} view", platform.label()));
                web_sys::console::log_1(&format!("switched to {platform} view").into());
            }
            || ()
        });
    }

    // Periodic pulse on the active mockup screen
    let pulse = use_state(|| false);
    {
        let pulse = pulse.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(PULSE_EVERY_MS, move || pulse.set(true));
            move || drop(interval)
        });
    }
    {
        let pulse = pulse.clone();
        use_effect_with(*pulse, move |&pulsing| {
            let timeout =
                pulsing.then(|| Timeout::new(PULSE_SETTLE_MS, move || pulse.set(false)));
            move || drop(timeout)
        });
    }

    let on_switch = {
        let state = props.state.clone();
        Callback::from(move |platform: Platform| {
            state.dispatch(ShowcaseAction::Switch(platform));
        })
    };

    html! {
        <section id="showcase" class="showcase-section">
            <h2>{"See it on every screen"}</h2>
            <PlatformSwitcher active={platform} on_switch={on_switch} />
            <div class={classes!("mockup-stage", (platform == Platform::Web).then_some("web-active"))}>
                <PhoneMockup
                    platform={Platform::Ios}
                    active={platform == Platform::Ios}
                    dimmed={platform == Platform::Web}
                    pulse={*pulse && platform == Platform::Ios}
                />
                <PhoneMockup
                    platform={Platform::Android}
                    active={platform == Platform::Android}
                    dimmed={platform == Platform::Web}
                    pulse={*pulse && platform == Platform::Android}
                />
                <BrowserMockup
                    active={platform == Platform::Web}
                    pulse={*pulse && platform == Platform::Web}
                />
            </div>
        </section>
    }
}
