use leptos::{ev, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::config::site_config;
use crate::nav::{Extent, NavLink, NavigationController, SectionLayout, SocialLink};

/// Reads section extents from the live document by element id.
struct DomLayout;

impl SectionLayout for DomLayout {
    fn extent(&self, id: &str) -> Option<Extent> {
        let el = document()
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(Extent::new(el.offset_top() as f64, el.offset_height() as f64))
    }
}

fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let config = site_config();
    let nav = RwSignal::new(
        NavigationController::from_config(config).unwrap_or_else(|err| {
            log::error!("invalid navigation config: {err}");
            NavigationController::default()
        }),
    );
    let location = use_location();

    // effects only run in the browser, so the first run doubles as mount
    Effect::new(move |_| {
        let path = location.pathname.get();
        nav.update(|n| {
            if n.is_mounted() {
                n.on_route_change(&path, scroll_offset(), &DomLayout);
            } else {
                n.mount(&path, scroll_offset(), &DomLayout);
            }
        });
    });

    // listeners are removed with this component's owner
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        nav.try_update(|n| {
            n.on_scroll(scroll_offset(), &DomLayout);
        });
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        nav.try_update(|n| {
            n.on_resize(scroll_offset(), &DomLayout);
        });
    });
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        nav.try_update(|n| {
            if n.on_key(&ev.key()) {
                ev.prevent_default();
            }
        });
    });
    on_cleanup(move || {
        nav.try_update_untracked(|n| n.unmount());
    });

    let links = StoredValue::new(config.nav_links.clone());
    let highlighted = Memo::new(move |_| links.with_value(|l| nav.with(|n| n.highlighted(l))));
    let is_open = move || nav.with(|n| n.is_menu_open());
    let menu_state = move || nav.with(|n| n.menu_state().as_str());

    view! {
        <nav class=move || {
            if nav.with(|n| n.is_scrolled()) {
                "fixed w-full h-20 z-50 transition-all duration-300 bg-background/80 backdrop-blur-md shadow-xl border-b border-muted/30"
            } else {
                "fixed w-full h-20 z-50 transition-all duration-300 bg-transparent border-b border-transparent"
            }
        }>
            <div class="flex justify-between items-center w-full h-full px-4 2xl:px-16">
                <a href="/" class="text-xl font-bold text-primary">
                    {config.owner.clone()}
                </a>
                <ul class="hidden md:flex items-center gap-8">
                    {links
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <li class="text-sm uppercase font-medium">
                                    <NavItem link index=i highlighted nav mobile=false />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="md:hidden p-2 rounded-lg hover:bg-brightBlack/30 focus:outline-none focus:ring-2 focus:ring-primary"
                    aria-label="Open navigation menu"
                    aria-expanded=move || is_open().to_string()
                    data-state=menu_state
                    on:click=move |_| {
                        nav.update(|n| {
                            n.toggle_menu();
                        });
                    }
                >
                    <i class="extra-menu text-2xl" />
                </button>
            </div>
            <Show when=is_open>
                <div
                    class="md:hidden fixed inset-0 bg-black/70"
                    on:click=move |_| nav.update(|n| n.dismiss_menu())
                ></div>
                <Drawer links highlighted nav />
            </Show>
        </nav>
    }
}

#[component]
fn Drawer(
    links: StoredValue<Vec<NavLink>>,
    highlighted: Memo<Option<usize>>,
    nav: RwSignal<NavigationController>,
) -> impl IntoView {
    let config = site_config();
    view! {
        <div
            class="md:hidden fixed left-0 top-0 w-[75%] sm:w-[60%] h-screen p-6 flex flex-col bg-background border-r border-muted/30"
            role="dialog"
            aria-modal="true"
            data-state=move || nav.with(|n| n.menu_state().as_str())
        >
            <div class="flex items-center justify-between mb-4">
                <span class="text-lg font-bold text-primary">{config.owner.clone()}</span>
                <button
                    class="p-2 rounded-full hover:bg-brightBlack/30"
                    aria-label="Close navigation menu"
                    on:click=move |_| nav.update(|n| n.set_menu_open(false))
                >
                    <i class="extra-close text-xl" />
                </button>
            </div>
            <p class="text-sm text-muted py-2 border-y border-muted/30 my-4">
                {config.tagline.clone()}
            </p>
            <ul class="flex flex-col gap-4 uppercase flex-1">
                {links
                    .get_value()
                    .into_iter()
                    .enumerate()
                    .map(|(i, link)| {
                        view! {
                            <li>
                                <NavItem link index=i highlighted nav mobile=true />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="mt-auto">
                <p class="uppercase tracking-widest text-sm mb-4 text-primary">"Let's Connect"</p>
                <div class="grid grid-cols-4 gap-4">
                    {config
                        .social_links
                        .iter()
                        .cloned()
                        .map(|social| view! { <SocialButton social nav /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn NavItem(
    link: NavLink,
    index: usize,
    highlighted: Memo<Option<usize>>,
    nav: RwSignal<NavigationController>,
    mobile: bool,
) -> impl IntoView {
    let is_active = move || highlighted.get() == Some(index);
    let class = move || match (mobile, is_active()) {
        (false, true) => "relative px-1 py-1 text-primary border-b-2 border-primary transition-all duration-300",
        (false, false) => "relative px-1 py-1 hover:text-primary border-b-2 border-transparent transition-all duration-300",
        (true, true) => "block py-3 px-4 rounded-lg text-sm font-medium text-primary bg-primary/15 border-l-4 border-primary",
        (true, false) => "block py-3 px-4 rounded-lg text-sm font-medium hover:bg-brightBlack/30",
    };
    let href = link.href.clone();
    let label = link.label.clone();
    view! {
        <a
            href=href
            class=class
            aria-current=move || is_active().then_some("page")
            on:click=move |_| {
                nav.update(|n| {
                    n.activate(&link);
                });
            }
        >
            {label}
        </a>
    }
}

#[component]
fn SocialButton(social: SocialLink, nav: RwSignal<NavigationController>) -> impl IntoView {
    let href = social.href.clone();
    let label = social.label.clone();
    let icon = social.icon.class();
    let (target, rel) = if social.internal {
        (None, None)
    } else {
        (Some("_blank"), Some("noopener noreferrer"))
    };
    view! {
        <a
            href=href
            target=target
            rel=rel
            aria-label=label
            class="rounded-full p-4 flex items-center justify-center min-h-[44px] min-w-[44px] border border-muted/30 hover:bg-brightBlack/30 transition-colors"
            on:click=move |_| {
                nav.update(|n| {
                    n.activate_social(&social);
                });
            }
        >
            <i class=icon />
        </a>
    }
}
