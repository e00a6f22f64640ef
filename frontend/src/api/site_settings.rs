use gloo_net::http::Request;
use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::models::remote::Remote;
use crate::models::settings::SiteSettings;

async fn fetch_site_settings() -> Result<SiteSettings, String> {
    let response = Request::get(&format!("{}/api/site-settings", config::get_backend_url()))
        .send()
        .await
        .map_err(|e| format!("network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<SiteSettings>()
        .await
        .map_err(|e| format!("invalid site settings: {}", e))
}

#[hook]
pub fn use_site_settings() -> Remote<SiteSettings> {
    let settings = use_state(Remote::<SiteSettings>::default);

    {
        let settings = settings.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let result = fetch_site_settings().await;
                    if let Err(reason) = &result {
                        error!("Failed to fetch site settings: {}", reason);
                    }
                    settings.set(Remote::from_result(result));
                });
                || ()
            },
            (),
        );
    }

    (*settings).clone()
}
