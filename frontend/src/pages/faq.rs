use gloo_timers::callback::Timeout;
use log::debug;
use stylist::css;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::api::faqs::use_faqs;
use crate::components::category_meta::category_descriptor;
use crate::config;
use crate::models::faq::{entry_from_fragment, outline, resolve_category, FaqOutline, FaqSelection};
use crate::models::remote::Remote;
use crate::theme;
use crate::Route;

#[derive(Properties, PartialEq)]
struct CategoryChipProps {
    label: String,
    category: Option<String>,
    active: bool,
    on_select: Callback<Option<String>>,
}

#[function_component(CategoryChip)]
fn category_chip(props: &CategoryChipProps) -> Html {
    let onclick = {
        let category = props.category.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(category.clone());
        })
    };

    let icon = props
        .category
        .as_deref()
        .map(category_descriptor)
        .map(|descriptor| html! {
            <span class="chip-icon" aria-label={descriptor.icon_label}>{descriptor.icon}</span>
        });

    html! {
        <button
            class={classes!("category-chip", props.active.then(|| "active"))}
            aria-pressed={props.active.to_string()}
            onclick={onclick}
        >
            { for icon }
            {&props.label}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct FaqRowProps {
    id: String,
    question: String,
    answer: Option<String>,
    on_toggle: Callback<String>,
}

#[function_component(FaqRow)]
fn faq_row(props: &FaqRowProps) -> Html {
    let is_open = props.answer.is_some();

    let toggle = {
        let id = props.id.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.clone());
        })
    };

    html! {
        <div id={props.id.clone()} class={classes!("faq-row", is_open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={is_open.to_string()} onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if is_open { "▲" } else { "▼" }}</span>
            </button>
            {
                if let Some(answer) = &props.answer {
                    html! {
                        <div class="faq-answer">
                            <p>{answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(ContactCta)]
fn contact_cta() -> Html {
    html! {
        <div class="contact-cta">
            <h3>{"Still have questions?"}</h3>
            <p>{"We're here to help! Reach out to us via WhatsApp for quick assistance."}</p>
            <a
                href={config::whatsapp_url()}
                target="_blank"
                rel="noopener noreferrer"
                class="contact-button"
            >
                <span class="contact-icon">{"💬"}</span>
                {"Chat on WhatsApp"}
            </a>
        </div>
    }
}

fn scroll_to_entry(id: String) {
    // Give the expanded answer a frame to render before scrolling.
    Timeout::new(100, move || {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(&id))
        {
            element.scroll_into_view_with_bool(true);
        }
    })
    .forget();
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let faqs = use_faqs();
    let selection = use_state(FaqSelection::default);
    let category_param = use_search_param("category".to_string());

    // Reconcile the selection whenever new data lands, then apply deep links.
    {
        let selection = selection.clone();
        use_effect_with_deps(
            move |faqs| {
                if let Remote::Loaded(data) = faqs {
                    let mut next = selection.reconcile(data);

                    if let Some(category) = resolve_category(category_param.as_deref(), data) {
                        next = next.select_category(Some(category));
                    }

                    let fragment = web_sys::window()
                        .and_then(|w| w.location().hash().ok())
                        .unwrap_or_default();
                    if let Some(id) = entry_from_fragment(&fragment, data) {
                        debug!("Opening FAQ entry {} from URL fragment", id);
                        next = next.open_entry(&id);
                        scroll_to_entry(id);
                    }

                    if next != *selection {
                        selection.set(next);
                    }
                }
                || ()
            },
            faqs.clone(),
        );
    }

    let on_select_category = {
        let selection = selection.clone();
        Callback::from(move |category: Option<String>| {
            debug!("FAQ filter set to {:?}", category);
            selection.set(selection.select_category(category));
        })
    };

    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |id: String| {
            let next = selection.toggle_entry(&id);
            debug!("Toggled FAQ entry {}, {} expanded", id, next.open_items.len());
            selection.set(next);
        })
    };

    let spinner = css!(
        r#"
        width: 2rem;
        height: 2rem;
        border: 2px solid ${navy};
        border-top-color: transparent;
        border-radius: 50%;
        animation: spin 0.8s linear infinite;
        "#,
        navy = theme::THEME_TEXT,
    );

    let (groups, notice) = match outline(&faqs, &selection) {
        FaqOutline::Loading => {
            return html! {
                <div class="faq-loading">
                    <div class={spinner} role="status" aria-label="Loading"></div>
                    <style>{faq_styles()}</style>
                </div>
            };
        }
        FaqOutline::Ready { groups, notice } => (groups, notice),
    };

    let categories = faqs
        .loaded()
        .map(|data| data.categories().to_vec())
        .unwrap_or_default();
    let active = selection.active_category.clone();

    html! {
        <div class="faq-page">
            <header class="faq-header">
                <Link<Route> to={Route::Home} classes="back-link">
                    <span aria-label="Back to home">{"←"}</span>
                </Link<Route>>
                <span class="header-icon">{"?"}</span>
                <h1>{"Frequently Asked Questions"}</h1>
            </header>

            <div class="faq-content">
                <div class="category-filter">
                    <CategoryChip
                        label="All"
                        category={None::<String>}
                        active={active.is_none()}
                        on_select={on_select_category.clone()}
                    />
                    { for categories.into_iter().map(|category| {
                        let is_active = active.as_deref() == Some(category.as_str());
                        html! {
                            <CategoryChip
                                key={category.clone()}
                                label={category.clone()}
                                active={is_active}
                                category={Some(category.clone())}
                                on_select={on_select_category.clone()}
                            />
                        }
                    }) }
                </div>

                {
                    if let Some(notice) = notice {
                        html! { <p class="faq-notice">{notice}</p> }
                    } else {
                        html! {}
                    }
                }

                { for groups.into_iter().map(|group| html! {
                    <section key={group.category.to_string()} class={classes!("faq-group", group.descriptor.tone)}>
                        <div class="group-heading">
                            <span class="group-icon" aria-label={group.descriptor.icon_label}>
                                {group.descriptor.icon}
                            </span>
                            <h2>{group.category}</h2>
                        </div>
                        <div class="group-rows">
                            { for group.rows.into_iter().map(|row| html! {
                                <FaqRow
                                    key={row.id.to_string()}
                                    id={row.id.to_string()}
                                    question={row.question.to_string()}
                                    answer={row.answer.map(str::to_string)}
                                    on_toggle={on_toggle.clone()}
                                />
                            }) }
                        </div>
                    </section>
                }) }

                <ContactCta />
            </div>

            <style>{faq_styles()}</style>
        </div>
    }
}

fn faq_styles() -> String {
    format!(
        r#"
        .faq-loading {{
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            background: {lab_gray};
        }}

        .faq-page {{
            min-height: 100vh;
            padding-top: 4rem;
            background: {lab_gray};
        }}

        .faq-header {{
            position: sticky;
            top: 4rem;
            z-index: 10;
            display: flex;
            align-items: center;
            gap: 1rem;
            padding: 1rem 1.5rem;
            background: #fff;
            border-bottom: 4px solid {gold};
            box-shadow: {shadow_soft};
        }}

        .faq-header h1 {{
            margin: 0;
            font-size: 1.5rem;
            color: {navy};
        }}

        .back-link {{
            padding: 0.5rem;
            border-radius: 8px;
            text-decoration: none;
            color: {muted};
        }}

        .back-link:hover {{
            background: {lab_gray};
            color: {navy};
        }}

        .header-icon {{
            color: {gold};
            font-weight: 700;
        }}

        .faq-content {{
            max-width: 56rem;
            margin: 0 auto;
            padding: 2rem 1rem;
        }}

        .category-filter {{
            display: flex;
            flex-wrap: wrap;
            gap: 0.5rem;
            margin-bottom: 2rem;
        }}

        .category-chip {{
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.5rem 1rem;
            border-radius: 9999px;
            border: 1px solid {navy};
            background: #fff;
            color: {muted};
            font-size: 0.875rem;
            font-weight: 500;
            cursor: pointer;
            transition: all 0.2s ease;
        }}

        .category-chip:hover {{
            color: {navy};
        }}

        .category-chip.active {{
            background: {navy};
            color: #fff;
            box-shadow: {shadow_medium};
        }}

        .category-chip.active .chip-icon {{
            color: {gold};
        }}

        .faq-notice {{
            color: {muted};
            margin-bottom: 2rem;
        }}

        .faq-group {{
            margin-bottom: 2rem;
        }}

        .group-heading {{
            display: flex;
            align-items: center;
            gap: 0.5rem;
            margin-bottom: 1rem;
            padding: 0.5rem 0.75rem;
            border-radius: 8px;
            background: #fff;
            box-shadow: {shadow_soft};
        }}

        .tone-gold .group-heading {{
            border: 1px solid {gold};
        }}

        .group-heading h2 {{
            margin: 0;
            font-size: 0.875rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            color: {navy};
        }}

        .group-icon {{
            color: {gold};
        }}

        .group-rows {{
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
        }}

        .faq-row {{
            background: #fff;
            border: 1px solid {gray_border};
            border-radius: 12px;
            overflow: hidden;
            box-shadow: {shadow_soft};
            transition: box-shadow 0.2s ease;
        }}

        .faq-row:hover {{
            box-shadow: {shadow_medium};
        }}

        .faq-question {{
            width: 100%;
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 1rem 1.25rem;
            background: none;
            border: none;
            text-align: left;
            font-size: 1rem;
            font-weight: 500;
            color: {navy};
            cursor: pointer;
        }}

        .toggle-icon {{
            flex-shrink: 0;
            margin-left: 1rem;
            color: {gray_icon};
        }}

        .faq-row.open .toggle-icon {{
            color: {gold};
        }}

        .faq-answer {{
            padding: 0 1.25rem 1rem;
            border-top: 1px solid #F4F7FA;
            background: rgba(249, 250, 251, 0.5);
        }}

        .faq-answer p {{
            margin: 0;
            padding-top: 1rem;
            color: {muted};
            line-height: 1.6;
            white-space: pre-line;
        }}

        .contact-cta {{
            margin-top: 3rem;
            padding: 2rem;
            text-align: center;
            background: #fff;
            border-radius: 16px;
            border: 1px solid rgba(212, 169, 60, 0.3);
            box-shadow: {shadow_medium};
        }}

        .contact-cta h3 {{
            margin: 0 0 0.5rem;
            color: {navy};
        }}

        .contact-cta p {{
            margin: 0 0 1.5rem;
            color: {muted};
        }}

        .contact-button {{
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.75rem 1.5rem;
            border-radius: 8px;
            background: {navy};
            color: #fff;
            font-weight: 500;
            text-decoration: none;
        }}

        .contact-button:hover {{
            color: #fff;
            background: {navy_hover};
        }}

        @media (max-width: 768px) {{
            .faq-header h1 {{
                font-size: 1.25rem;
            }}

            .contact-cta {{
                padding: 1.5rem;
            }}
        }}
        "#,
        lab_gray = theme::THEME_SECONDARY,
        gold = theme::GOLD,
        navy = theme::THEME_TEXT,
        navy_hover = theme::NAVY.shade(400).unwrap_or(theme::THEME_TEXT),
        muted = theme::TEXT_SECONDARY,
        gray_border = theme::GRAY.shade(300).unwrap_or(theme::THEME_SECONDARY),
        gray_icon = theme::GRAY.shade(400).unwrap_or(theme::TEXT_SECONDARY),
        shadow_soft = theme::SHADOW_SOFT,
        shadow_medium = theme::SHADOW_MEDIUM,
    )
}
