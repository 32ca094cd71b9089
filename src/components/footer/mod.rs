//! Page footer with contact links.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{CONTACT_LINKS, PROFILE_NAME};
use crate::models::{ContactKind, ContactLink};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let year = dom::current_year();

    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <p class=css::name>{PROFILE_NAME}</p>
                <p class=css::line>"Thank you for taking the time to get to know me."</p>

                <nav class=css::links aria-label="Contact">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| view! { <ContactAnchor link=*link /> })
                        .collect_view()}
                </nav>

                <p class=css::copyright>{format!("© {} {}", year, PROFILE_NAME)}</p>
            </div>
        </footer>
    }
}

#[component]
fn ContactAnchor(link: ContactLink) -> impl IntoView {
    let icon = match link.kind {
        ContactKind::Email => ic::MAIL,
        ContactKind::Phone => ic::PHONE,
        ContactKind::Web => ic::EXTERNAL_LINK,
    };
    let new_tab = link.opens_new_tab();

    view! {
        <a
            class=css::link
            href=link.href()
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
        >
            <Icon icon=icon />
            <span>{link.label}</span>
        </a>
    }
}
