//! Marketing feature cards

use yew::prelude::*;

use crate::components::Card;
use crate::content;

#[function_component(Features)]
pub fn features() -> Html {
    let catalog = content::catalog();

    html! {
        <section id="features" class="features-section">
            <h2>{"Why people stay"}</h2>
            <div class="card-grid">
                { for catalog.cards.iter().map(|card| html! {
                    <Card
                        key={card.title.clone()}
                        icon={card.icon.clone()}
                        title={card.title.clone()}
                    >
                        <p>{ &card.blurb }</p>
                    </Card>
                }) }
            </div>
        </section>
    }
}
