use log::{error, info};
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::pages::hero::Hero;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let on_shop_all = Callback::from(|_: ()| {
        info!("Shop all requested, leaving for {}", config::SHOP_PATH);
        if let Some(window) = window() {
            if let Err(e) = window.location().set_href(config::SHOP_PATH) {
                error!("Failed to navigate to {}: {:?}", config::SHOP_PATH, e);
            }
        }
    });

    html! {
        <div class="home">
            <Hero on_shop_all={on_shop_all} />
            <section class="home-faq-teaser">
                <p>{"Questions about dosing, storage, payment or shipping?"}</p>
                <Link<Route> to={Route::Faq} classes="teaser-link">
                    {"Read our FAQ →"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .home-faq-teaser {
                    padding: 3rem 1.5rem;
                    text-align: center;
                    background: #fff;
                }

                .home-faq-teaser p {
                    margin: 0 0 1rem;
                    color: #6B7280;
                }

                .teaser-link {
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
