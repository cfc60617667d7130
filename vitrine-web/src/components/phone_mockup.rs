//! Decorative device mockups.
//!
//! The iOS and Android frames render catalog-driven screen content and pop a
//! detail toast when an item is tapped; the browser frame previews the Web
//! view. All animation is class toggling on short timers, cleared on the
//! next tick.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use vitrine_common::Platform;

use crate::components::status_bar::StatusBar;
use crate::components::toast::Toaster;
use crate::content;

/// How long a freshly activated screen keeps its entrance bump
const SWITCH_BUMP_MS: u32 = 600;
/// How long a tapped row stays highlighted
const TAP_BUMP_MS: u32 = 200;

const FALLBACK_FEATURE_DETAIL: &str = "Feature details would be shown here";

#[derive(Properties, PartialEq)]
pub struct PhoneMockupProps {
    pub platform: Platform,
    pub active: bool,
    #[prop_or_default]
    pub dimmed: bool,
    #[prop_or_default]
    pub pulse: bool,
}

#[function_component(PhoneMockup)]
pub fn phone_mockup(props: &PhoneMockupProps) -> Html {
    let settled = use_state(|| true);

    // Entrance bump whenever this frame becomes the active one
    {
        let settled = settled.clone();
        use_effect_with(props.active, move |&active| {
            let timeout = if active {
                settled.set(false);
                Some(Timeout::new(SWITCH_BUMP_MS, move || settled.set(true)))
            } else {
                None
            };
            move || drop(timeout)
        });
    }

    let class = classes!(
        "phone-mockup",
        props.platform.id(),
        props.active.then_some("active"),
        props.dimmed.then_some("dimmed"),
        props.pulse.then_some("pulse"),
        (!*settled).then_some("just-switched"),
    );

    html! {
        <div {class}>
            <div class="phone-frame">
                <StatusBar platform={props.platform} />
                <div class="screen-content">
                    { match props.platform {
                        Platform::Ios => html! { <IosScreen /> },
                        Platform::Android => html! { <AndroidScreen /> },
                        Platform::Web => html! {},
                    } }
                </div>
            </div>
        </div>
    }
}

#[function_component(IosScreen)]
fn ios_screen() -> Html {
    let toaster = use_context::<Toaster>().expect("toast context");
    let bumped = use_state(|| None::<String>);

    {
        let bumped = bumped.clone();
        use_effect_with((*bumped).clone(), move |tapped: &Option<String>| {
            let timeout = tapped
                .is_some()
                .then(|| Timeout::new(TAP_BUMP_MS, move || bumped.set(None)));
            move || drop(timeout)
        });
    }

    let catalog = content::catalog();

    html! {
        <div class="ios-screen">
            <div class="screen-header">
                <h5>{"Pocket Shop"}</h5>
                <span class="subtitle">{"Welcome back"}</span>
            </div>
            <ul class="feature-list">
                { for catalog.features.keys().map(|label| {
                    let onclick = {
                        let toaster = toaster.clone();
                        let bumped = bumped.clone();
                        let label = label.clone();
                        Callback::from(move |_| {
                            let detail = content::catalog()
                                .feature_detail(&label)
                                .unwrap_or(FALLBACK_FEATURE_DETAIL);
                            toaster.info(format!("{label}: {detail}"));
                            bumped.set(Some(label.clone()));
                        })
                    };

                    let class = classes!(
                        "feature-item",
                        ((*bumped).as_deref() == Some(label.as_str())).then_some("bumped"),
                    );

                    html! {
                        <li {class} {onclick} key={label.clone()}>
                            <span>{ label }</span>
                            <i class="fas fa-chevron-right"></i>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

#[function_component(AndroidScreen)]
fn android_screen() -> Html {
    let toaster = use_context::<Toaster>().expect("toast context");
    let nudged = use_state(|| None::<String>);

    {
        let nudged = nudged.clone();
        use_effect_with((*nudged).clone(), move |tapped: &Option<String>| {
            let timeout = tapped
                .is_some()
                .then(|| Timeout::new(TAP_BUMP_MS, move || nudged.set(None)));
            move || drop(timeout)
        });
    }

    let catalog = content::catalog();

    html! {
        <div class="android-screen">
            <div class="screen-header">
                <h5>{"Pocket Shop"}</h5>
                <span class="subtitle">{"Today's picks"}</span>
            </div>
            <ul class="product-list">
                { for catalog.products.iter().map(|product| {
                    let onclick = {
                        let toaster = toaster.clone();
                        let nudged = nudged.clone();
                        let name = product.name.clone();
                        Callback::from(move |_| {
                            toaster.info(format!(
                                "Viewing {name} - Full product details, reviews, and purchase options would be displayed"
                            ));
                            nudged.set(Some(name.clone()));
                        })
                    };

                    let class = classes!(
                        "product-item",
                        ((*nudged).as_deref() == Some(product.name.as_str())).then_some("nudged"),
                    );

                    html! {
                        <li {class} {onclick} key={product.name.clone()}>
                            <h6>{ &product.name }</h6>
                            <span class="tagline">{ &product.tagline }</span>
                            <span class="price">{ &product.price }</span>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BrowserMockupProps {
    pub active: bool,
    #[prop_or_default]
    pub pulse: bool,
}

#[function_component(BrowserMockup)]
pub fn browser_mockup(props: &BrowserMockupProps) -> Html {
    let catalog = content::catalog();

    let class = classes!(
        "browser-mockup",
        props.active.then_some("active"),
        props.pulse.then_some("pulse"),
    );

    html! {
        <div {class}>
            <div class="browser-chrome">
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="address">{"pocketshop.app"}</span>
            </div>
            <div class="browser-body">
                <nav class="web-tabs">
                    { for catalog.screens(Platform::Web).iter().map(|screen| html! {
                        <span class="web-tab" key={screen.clone()}>{ screen }</span>
                    }) }
                </nav>
                <div class="web-panels">
                    <div class="panel wide"></div>
                    <div class="panel"></div>
                    <div class="panel"></div>
                </div>
            </div>
        </div>
    }
}
