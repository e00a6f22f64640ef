
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Badge shown in the hero until site settings provide their own.
pub const DEFAULT_HERO_BADGE: &str = "Advanced Peptide Science";

/// The product catalog is served outside this app.
pub const SHOP_PATH: &str = "/shop";

pub const WHATSAPP_PHONE: &str = "639062349763";
pub const WHATSAPP_MESSAGE: &str = "Hi! I have a question about your products.";

// Characters a browser's encodeURIComponent leaves as-is but urlencoding escapes.
const URI_COMPONENT_KEEP: &[(&str, &str)] = &[
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

pub fn encode_uri_component(text: &str) -> String {
    URI_COMPONENT_KEEP
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |encoded, (escaped, raw)| {
            encoded.replace(escaped, raw)
        })
}

pub fn whatsapp_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_PHONE,
        encode_uri_component(WHATSAPP_MESSAGE)
    )
}
