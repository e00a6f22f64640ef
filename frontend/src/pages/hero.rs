use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::api::site_settings::use_site_settings;
use crate::models::settings::badge_text;
use crate::theme;

/// Pointer position as a percentage of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        let percent = |value: f64, extent: f64| {
            if extent > 0.0 && value.is_finite() {
                value / extent * 100.0
            } else {
                0.0
            }
        };
        PointerPosition {
            x: percent(client_x, width),
            y: percent(client_y, height),
        }
    }

    pub fn parallax(&self, factor: f64) -> String {
        format!("translate({}px, {}px)", self.x * factor, self.y * factor)
    }
}

const GRID_FACTOR: f64 = 0.02;
const BLUE_ORB_FACTOR: f64 = 0.05;
const GREEN_ORB_FACTOR: f64 = -0.03;

pub const PARTICLE_COUNT: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
    pub glow: f64,
    pub opacity: f64,
    pub color: &'static str,
}

// splitmix64, so the particle field looks random but renders identically every time.
fn unit(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

pub fn particle(index: usize) -> Particle {
    let base = index as u64 * 8;
    Particle {
        left: unit(base) * 100.0,
        top: unit(base + 1) * 100.0,
        delay: unit(base + 2) * 5.0,
        duration: 15.0 + unit(base + 3) * 10.0,
        glow: 10.0 + unit(base + 4) * 20.0,
        opacity: 0.4 + unit(base + 5) * 0.3,
        color: if index % 2 == 0 { theme::THEME_ACCENT } else { theme::THEME_GREEN },
    }
}

struct TrustIndicator {
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    green: bool,
}

const TRUST_INDICATORS: &[TrustIndicator] = &[
    TrustIndicator { icon: "🛡", title: "Lab Tested", subtitle: "99%+ Purity", green: false },
    TrustIndicator { icon: "⚡", title: "Science-Backed", subtitle: "Research Grade", green: true },
    TrustIndicator { icon: "🏅", title: "Transparent", subtitle: "Full COAs", green: false },
];

pub fn trust_card_delay_ms(index: usize) -> usize {
    600 + index * 150
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_shop_all: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let is_visible = use_state(|| false);
    let pointer = use_state(PointerPosition::default);
    let settings = use_site_settings();

    // Flip the entrance flag after the first paint so the transition runs.
    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(0, move || is_visible.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let mouse_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    if let Some(window) = web_sys::window() {
                        let extent = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
                        };
                        pointer.set(PointerPosition::from_client(
                            e.client_x() as f64,
                            e.client_y() as f64,
                            extent(window.inner_width()),
                            extent(window.inner_height()),
                        ));
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "mousemove",
                        mouse_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            mouse_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_shop_all = {
        let on_shop_all = props.on_shop_all.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_shop_all.emit(());
        })
    };

    let entrance = if *is_visible { "entered" } else { "entering" };

    let grid_style = format!("transform: {};", pointer.parallax(GRID_FACTOR));
    let blue_orb_style = format!(
        "background: radial-gradient(circle, {} 0%, transparent 70%); transform: {};",
        theme::PRIMARY.shade(500).unwrap_or(theme::THEME_ACCENT),
        pointer.parallax(BLUE_ORB_FACTOR),
    );
    let green_orb_style = format!(
        "background: radial-gradient(circle, {} 0%, transparent 70%); transform: {};",
        theme::GREEN.shade(500).unwrap_or(theme::THEME_GREEN),
        pointer.parallax(GREEN_ORB_FACTOR),
    );
    let center_orb_style = format!(
        "background: radial-gradient(circle, {} 0%, {} 50%, transparent 70%);",
        theme::THEME_ACCENT,
        theme::THEME_GREEN,
    );

    html! {
        <section class="hero">
            <div class="hero-grid" style={grid_style}></div>
            <div class="hero-orb orb-blue" style={blue_orb_style}></div>
            <div class="hero-orb orb-green" style={green_orb_style}></div>
            <div class="hero-orb orb-center" style={center_orb_style}></div>

            <div class="hero-particles" aria-hidden="true">
                { for (0..PARTICLE_COUNT).map(|i| {
                    let p = particle(i);
                    html! {
                        <div
                            key={i}
                            class="particle"
                            style={format!(
                                "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                                p.left, p.top, p.delay, p.duration
                            )}
                        >
                            <div
                                class="particle-dot"
                                style={format!(
                                    "background: {c}; box-shadow: 0 0 {:.1}px {c}; opacity: {:.2};",
                                    p.glow, p.opacity, c = p.color
                                )}
                            ></div>
                        </div>
                    }
                }) }
            </div>

            <div class={classes!("hero-content", entrance)}>
                <div class="hero-badge">
                    <span class="badge-atom">{"⚛"}</span>
                    <span class="badge-text">{badge_text(&settings)}</span>
                    <span class="badge-sparkle">{"✦"}</span>
                </div>

                <h1 class="hero-title">
                    <span class="plain">{"Where "}</span>
                    <span class="gradient">{"Advanced"}</span>
                    <br />
                    <span class="gradient gradient-alt">{"Peptide Science"}</span>
                    <br />
                    <span class="plain">{"Meets "}</span>
                    <span class="underlined">{"Purpose"}</span>
                </h1>

                <p class="hero-tagline">
                    {"At "}<span class="brand">{"PeptidePro"}</span>
                    {", we develop high-quality peptide solutions rooted in"}
                    <span class="accent-blue">{" modern science"}</span>{","}
                    <span class="accent-green">{" transparency"}</span>{", and"}
                    <span class="brand">{" patient-focused innovation"}</span>{"."}
                </p>

                <div class="hero-actions">
                    <button class="cta-primary" onclick={on_shop_all}>
                        <span>{"⚗"}</span>
                        {"Explore Our Peptides"}
                        <span class="arrow">{"→"}</span>
                    </button>
                    <button class="cta-secondary">
                        <span>{"📖"}</span>
                        {"Learn the Science"}
                    </button>
                </div>

                <div class="trust-grid">
                    { for TRUST_INDICATORS.iter().enumerate().map(|(i, item)| html! {
                        <div
                            key={item.title}
                            class={classes!("trust-card", entrance, item.green.then(|| "green"))}
                            style={format!("transition-delay: {}ms;", trust_card_delay_ms(i))}
                        >
                            <div class="trust-icon">{item.icon}</div>
                            <div>
                                <p class="trust-title">{item.title}</p>
                                <p class="trust-subtitle">{item.subtitle}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="hero-fade"></div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    background: linear-gradient(135deg, #020617, #0F172A, #0F2A44);
                }

                .hero-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                    background-image:
                        linear-gradient(rgba(31, 111, 178, 0.1) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(31, 111, 178, 0.1) 1px, transparent 1px);
                    background-size: 50px 50px;
                }

                .hero-orb {
                    position: absolute;
                    border-radius: 50%;
                    pointer-events: none;
                }

                .orb-blue {
                    top: 25%;
                    right: 25%;
                    width: 500px;
                    height: 500px;
                    filter: blur(120px);
                    opacity: 0.3;
                }

                .orb-green {
                    bottom: 25%;
                    left: 25%;
                    width: 400px;
                    height: 400px;
                    filter: blur(100px);
                    opacity: 0.25;
                }

                .orb-center {
                    top: 50%;
                    left: 50%;
                    width: 600px;
                    height: 600px;
                    filter: blur(150px);
                    opacity: 0.15;
                    transform: translate(-50%, -50%);
                }

                .hero-particles {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }

                .particle {
                    position: absolute;
                    animation: float linear infinite;
                }

                .particle-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 7rem 1.5rem 6rem;
                    text-align: center;
                    transition: all 1s ease;
                }

                .entering {
                    opacity: 0;
                    transform: translateY(2.5rem);
                }

                .entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem 1.5rem;
                    margin-bottom: 2.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(24px);
                }

                .badge-atom {
                    color: #4DC999;
                    display: inline-block;
                    animation: spin 8s linear infinite;
                }

                .badge-text {
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    background: linear-gradient(90deg, #75BCEC, #fff, #70D4AB);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .badge-sparkle {
                    color: #4DA9E7;
                }

                .hero-title {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 900;
                    line-height: 1.1;
                    margin: 0 0 2rem;
                    color: #fff;
                }

                .hero-title .plain {
                    color: rgba(255, 255, 255, 0.9);
                }

                .hero-title .gradient {
                    background: linear-gradient(90deg, #4DA9E7, #4DC999, #4DA9E7);
                    background-size: 200% auto;
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: gradient 3s ease infinite;
                }

                .hero-title .gradient-alt {
                    background-image: linear-gradient(90deg, #4DC999, #4DA9E7, #4DC999);
                    animation-delay: 0.5s;
                }

                .hero-title .underlined {
                    border-bottom: 3px solid #2BB673;
                }

                .hero-tagline {
                    max-width: 48rem;
                    margin: 0 auto 2.5rem;
                    font-size: 1.2rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.6);
                }

                .hero-tagline .brand { color: #fff; font-weight: 500; }
                .hero-tagline .accent-blue { color: #4DA9E7; }
                .hero-tagline .accent-green { color: #4DC999; }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 4rem;
                }

                .cta-primary,
                .cta-secondary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 12px;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }

                .cta-primary {
                    border: none;
                    color: #fff;
                    background: linear-gradient(90deg, #1A5E99, #1F6FB2, #2BB673);
                    background-size: 200% auto;
                    animation: gradient 3s ease infinite;
                    box-shadow: 0 0 20px rgba(31, 111, 178, 0.3);
                }

                .cta-secondary {
                    color: rgba(255, 255, 255, 0.8);
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .cta-primary:hover,
                .cta-secondary:hover {
                    transform: scale(1.05);
                }

                .cta-primary .arrow {
                    transition: transform 0.3s ease;
                }

                .cta-primary:hover .arrow {
                    transform: translateX(4px);
                }

                .trust-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .trust-card {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem;
                    border-radius: 16px;
                    text-align: left;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: all 0.5s ease;
                }

                .trust-icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 12px;
                    background: rgba(31, 111, 178, 0.2);
                    border: 1px solid rgba(31, 111, 178, 0.2);
                }

                .trust-card.green .trust-icon {
                    background: rgba(43, 182, 115, 0.2);
                    border-color: rgba(43, 182, 115, 0.2);
                }

                .trust-title {
                    margin: 0;
                    font-weight: 600;
                    color: #fff;
                }

                .trust-subtitle {
                    margin: 0;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.5);
                }

                .hero-fade {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 8rem;
                    background: linear-gradient(to top, #fff, rgba(255, 255, 255, 0.5), transparent);
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0px) translateX(0px); }
                    25% { transform: translateY(-20px) translateX(10px); }
                    50% { transform: translateY(-10px) translateX(-10px); }
                    75% { transform: translateY(-30px) translateX(5px); }
                }

                @keyframes gradient {
                    0% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                    100% { background-position: 0% 50%; }
                }

                @media (max-width: 640px) {
                    .trust-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero-content {
                        padding: 5rem 1rem 4rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_is_a_viewport_percentage() {
        let p = PointerPosition::from_client(480.0, 270.0, 1920.0, 1080.0);
        assert_eq!(p, PointerPosition { x: 25.0, y: 25.0 });
    }

    #[test]
    fn zero_sized_viewport_does_not_divide_by_zero() {
        let p = PointerPosition::from_client(10.0, 10.0, 0.0, 0.0);
        assert_eq!(p, PointerPosition::default());
    }

    #[test]
    fn parallax_scales_and_inverts() {
        let p = PointerPosition { x: 50.0, y: 100.0 };
        assert_eq!(p.parallax(BLUE_ORB_FACTOR), "translate(2.5px, 5px)");
        assert_eq!(p.parallax(GREEN_ORB_FACTOR), "translate(-1.5px, -3px)");
    }

    #[test]
    fn particles_are_stable_and_in_range() {
        for i in 0..PARTICLE_COUNT {
            let p = particle(i);
            assert_eq!(p, particle(i));
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..5.0).contains(&p.delay));
            assert!((15.0..25.0).contains(&p.duration));
            assert!((0.4..0.7).contains(&p.opacity));
        }
        assert_eq!(particle(0).color, theme::THEME_ACCENT);
        assert_eq!(particle(1).color, theme::THEME_GREEN);
        assert_ne!(particle(0).left, particle(2).left);
    }

    #[test]
    fn trust_cards_are_staggered() {
        let delays: Vec<_> = (0..TRUST_INDICATORS.len()).map(trust_card_delay_ms).collect();
        assert_eq!(delays, vec![600, 750, 900]);
    }
}
