//! Site Header Component
//!
//! Logos, navigation, and the collapsible mobile menu.

use leptos::ev;
use leptos::prelude::*;

use super::icons::Icon;
use crate::icon_paths::{ICON_CLOSE, ICON_MENU};
use crate::content::{AWS_LOGO, NAV_ITEMS, VPBANK_LOGO};
use crate::context::use_site_context;
use crate::menu::MenuVisibility;

fn log_menu(menu: MenuVisibility) {
    let state = if menu.is_open() { "opened" } else { "closed" };
    web_sys::console::log_1(&format!("[HEADER] Mobile menu {}", state).into());
}

/// Header with desktop nav and a toggleable mobile panel
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_site_context();
    let menu = RwSignal::new(MenuVisibility::default());
    let is_open = move || menu.get().is_open();

    let toggle_menu = move |_: ev::MouseEvent| {
        menu.update(MenuVisibility::toggle);
        log_menu(menu.get_untracked());
    };

    // Any navigation dismisses the panel
    let close_menu = move |_: ev::MouseEvent| {
        if menu.get_untracked().is_open() {
            menu.update(MenuVisibility::select_item);
            log_menu(menu.get_untracked());
        }
    };

    let register_href = ctx.registration_href();
    let register_href_mobile = register_href.clone();

    view! {
        <header class="site-header">
            <div class="header-bar">
                <div class="header-logos">
                    <img src=VPBANK_LOGO alt="VPBank" width="120" height="48" class="logo logo-vpbank" />
                    <img src=AWS_LOGO alt="AWS" width="100" height="40" class="logo logo-aws" />
                </div>

                <nav class="nav-desktop">
                    <For
                        each=|| NAV_ITEMS.iter().copied()
                        key=|item| item.href
                        children=move |item| view! {
                            <a class="nav-link" href=item.href on:click=close_menu>{item.label}</a>
                        }
                    />
                </nav>

                <a class="register-button" href=register_href>"Register"</a>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=toggle_menu
                >
                    {move || {
                        let path = if is_open() { ICON_CLOSE } else { ICON_MENU };
                        view! { <Icon path=path /> }
                    }}
                </button>
            </div>

            <Show when=is_open>
                <div class="nav-mobile">
                    <For
                        each=|| NAV_ITEMS.iter().copied()
                        key=|item| item.href
                        children=move |item| view! {
                            <a class="nav-link nav-link-mobile" href=item.href on:click=close_menu>{item.label}</a>
                        }
                    />
                    <a class="register-button-mobile" href=register_href_mobile.clone() on:click=close_menu>"Register"</a>
                </div>
            </Show>
        </header>
    }
}
