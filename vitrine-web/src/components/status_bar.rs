//! Mock status bar shown inside the device frames.
//!
//! The clock and battery readouts are decorative: they refresh on a timer,
//! never touch the view model, and the battery just drifts inside a
//! plausible band.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Local;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use vitrine_common::Platform;

const REFRESH_MS: u32 = 30_000;
const BATTERY_START: i32 = 87;
const BATTERY_FLOOR: i32 = 75;
const BATTERY_CEIL: i32 = 100;

#[derive(Properties, PartialEq)]
pub struct StatusBarProps {
    pub platform: Platform,
}

/// iOS shows a 12-hour clock, Android a 24-hour one
fn clock_label(platform: Platform) -> String {
    let now = Local::now();
    match platform {
        Platform::Android => now.format("%H:%M").to_string(),
        _ => now.format("%-I:%M").to_string(),
    }
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    let platform = props.platform;
    let time = use_state(|| clock_label(platform));
    let battery = use_state(|| BATTERY_START);

    {
        let time = time.clone();
        let battery = battery.clone();
        use_effect_with(platform, move |platform| {
            let platform = *platform;
            let level = Rc::new(Cell::new(BATTERY_START));

            let interval = Interval::new(REFRESH_MS, move || {
                time.set(clock_label(platform));

                let drift = (js_sys::Math::random() * 3.0).floor() as i32 - 1;
                level.set((level.get() + drift).clamp(BATTERY_FLOOR, BATTERY_CEIL));
                battery.set(level.get());
            });

            move || drop(interval)
        });
    }

    html! {
        <div class={format!("status-bar status-bar-{}", platform.id())}>
            <span class="time">{ (*time).clone() }</span>
            <span class="status-icons">
                <i class="fas fa-signal"></i>
                <i class="fas fa-wifi"></i>
                <span class="battery">{ format!("{}%", *battery) }</span>
            </span>
        </div>
    }
}
