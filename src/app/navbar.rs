use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{section_anchor, NAV_SECTIONS};

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > 10.0);

    view! {
        <nav class=move || {
            format!(
                "fixed w-full z-50 transition-all duration-300 {}",
                if scrolled() {
                    "bg-neural-blue/90 backdrop-blur-md shadow-lg"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center">
                        <div class="flex-shrink-0 flex items-center">
                            <span class="text-2xl">"🧠"</span>
                            <span class="ml-2 text-xl font-bold tracking-tight">"Om Pachauli"</span>
                        </div>
                    </div>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-8">
                            {NAV_SECTIONS
                                .iter()
                                .map(|section| {
                                    view! {
                                        <a
                                            href=section_anchor(section)
                                            class="text-gray-300 hover:text-electric-cyan transition-colors duration-300 px-3 py-2 rounded-md text-sm font-medium"
                                        >
                                            {*section}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="md:hidden">
                        <button
                            on:click=move |_| set_menu_open(!menu_open.get_untracked())
                            class="inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-white hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-white"
                        >
                            <span class="sr-only">"Open main menu"</span>
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                menu_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-neural-blue/95 backdrop-blur-md">
                                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                                    {NAV_SECTIONS
                                        .iter()
                                        .map(|section| {
                                            view! {
                                                <a
                                                    href=section_anchor(section)
                                                    on:click=move |_| set_menu_open(false)
                                                    class="block text-gray-300 hover:text-electric-cyan transition-colors duration-300 px-3 py-2 rounded-md text-base font-medium"
                                                >
                                                    {*section}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
