//! Platform switcher buttons

use yew::prelude::*;

use vitrine_common::Platform;

#[derive(Properties, PartialEq)]
pub struct PlatformSwitcherProps {
    pub active: Platform,
    pub on_switch: Callback<Platform>,
}

#[function_component(PlatformSwitcher)]
pub fn platform_switcher(props: &PlatformSwitcherProps) -> Html {
    html! {
        <div class="platform-switcher">
            { for Platform::ALL.iter().map(|platform| {
                let platform = *platform;
                let class = if platform == props.active { "btn active" } else { "btn" };
                let onclick = {
                    let on_switch = props.on_switch.clone();
                    Callback::from(move |_| on_switch.emit(platform))
                };

                html! {
                    <button {class} {onclick} key={platform.id()}>
                        <i class={platform.icon_class()}></i>
                        <span class="label">{ platform.label() }</span>
                    </button>
                }
            }) }
        </div>
    }
}
