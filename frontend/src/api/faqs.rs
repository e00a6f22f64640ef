use std::rc::Rc;

use gloo_net::http::Request;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::models::faq::{FaqData, FaqPayload};
use crate::models::remote::Remote;

async fn fetch_faqs() -> Result<FaqData, String> {
    let response = Request::get(&format!("{}/api/faqs", config::get_backend_url()))
        .send()
        .await
        .map_err(|e| format!("network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let payload = response
        .json::<FaqPayload>()
        .await
        .map_err(|e| format!("invalid FAQ payload: {}", e))?;
    Ok(FaqData::from(payload))
}

/// FAQ entries and categories, fetched once per mount.
#[hook]
pub fn use_faqs() -> Remote<Rc<FaqData>> {
    let faqs = use_state(Remote::<Rc<FaqData>>::default);

    {
        let faqs = faqs.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match fetch_faqs().await {
                        Ok(data) => {
                            info!(
                                "Loaded {} FAQs in {} categories",
                                data.faqs().len(),
                                data.categories().len()
                            );
                            faqs.set(Remote::Loaded(Rc::new(data)));
                        }
                        Err(reason) => {
                            error!("Failed to fetch FAQs: {}", reason);
                            faqs.set(Remote::Failed(reason));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    (*faqs).clone()
}
