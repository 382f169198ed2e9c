use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::frontend::use_site;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/blog", "Blog"),
    ("/resume", "Resume"),
];

/// Scroll offset past which the bar turns solid.
const SOLID_AFTER_PX: f64 = 10.0;

#[component]
pub fn Nav() -> impl IntoView {
    let site = use_site();
    let pathname = use_location().pathname;
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(y > SOLID_AFTER_PX);
    });
    on_cleanup(move || handle.remove());

    // Close the mobile menu whenever the route changes.
    Effect::new(move |_| {
        pathname.track();
        set_menu_open.set(false);
    });

    let link_class = move |path: &'static str| {
        move || {
            if pathname.get() == path {
                "font-medium transition-colors text-[#089BAB] border-b-2 border-[#089BAB]"
            } else {
                "font-medium transition-colors text-[#002B48] hover:text-[#089BAB]"
            }
        }
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white shadow-md py-2"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-4"
            }
        }>
            <div class="container mx-auto px-4 md:px-6 flex items-center justify-between">
                <a href="/" class="text-2xl font-bold text-[#002B48]">{site.owner_name}</a>

                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|(path, label)| view! {
                            <a href=*path class=link_class(*path)>{*label}</a>
                        })
                        .collect_view()}
                </div>

                <button
                    class="md:hidden flex flex-col justify-center items-center w-8 h-8 gap-1.5"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class=move || bar_class(menu_open.get(), "rotate-45 translate-y-2")></span>
                    <span class=move || bar_class(menu_open.get(), "opacity-0")></span>
                    <span class=move || bar_class(menu_open.get(), "-rotate-45 -translate-y-2")></span>
                </button>
            </div>

            <div class=move || {
                if menu_open.get() {
                    "md:hidden absolute top-full left-0 right-0 bg-white shadow-lg transition-transform duration-300 translate-y-0"
                } else {
                    "md:hidden absolute top-full left-0 right-0 bg-white shadow-lg transition-transform duration-300 -translate-y-full hidden"
                }
            }>
                <div class="flex flex-col px-6 py-4 gap-4">
                    {NAV_ITEMS
                        .iter()
                        .map(|(path, label)| view! {
                            <a
                                href=*path
                                class=link_class(*path)
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {*label}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

fn bar_class(open: bool, open_transform: &str) -> String {
    let base = "block w-6 h-0.5 bg-[#002B48] transition-all duration-300";
    if open {
        format!("{base} {open_transform}")
    } else {
        base.to_string()
    }
}
