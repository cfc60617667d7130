//! Inline busy indicator

use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <span class="spinner" aria-hidden="true"></span>
    }
}
