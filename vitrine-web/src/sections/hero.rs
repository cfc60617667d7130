//! Hero section

use yew::prelude::*;

use crate::util::scroll_to;

#[function_component(Hero)]
pub fn hero() -> Html {
    let see_it_live = Callback::from(|_| scroll_to("showcase"));
    let get_the_app = Callback::from(|_| scroll_to("download"));

    html! {
        <header class="hero">
            <div class="hero-content">
                <h1>{"One app. Every platform."}</h1>
                <p class="hero-subtitle">
                    {"Pocket Shop runs natively on iOS and Android and ships to the web \
                      as a full PWA - same features, same feel, everywhere."}
                </p>
                <div class="hero-actions">
                    <button class="btn primary" onclick={see_it_live}>
                        <i class="fas fa-eye"></i>
                        {" See It Live"}
                    </button>
                    <button class="btn outline" onclick={get_the_app}>
                        <i class="fas fa-download"></i>
                        {" Get the App"}
                    </button>
                </div>
            </div>
        </header>
    }
}
