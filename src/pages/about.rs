use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::reveal::Reveal;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1>{"About Printolution"}</h1>
                <p>{"A family print shop that grew up, without forgetting how to pick up the phone."}</p>
            </section>
            <Reveal class={classes!("about-story")}>
                <h2>{"Our story"}</h2>
                <p>{"We started with one press in a garage and a promise to get every job right. Today we run a full production floor, but every order is still checked by a person before it ships."}</p>
            </Reveal>
            <Reveal class={classes!("about-stats")}>
                <Counter target={35} label="People on the team" />
                <Counter target={1200} suffix="+" label="Businesses served" />
                <Counter target={3} label="Production sites" />
            </Reveal>
        </div>
    }
}
