use chrono::{Datelike, Utc};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let scroll_to_top = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <footer class="bg-neural-blue border-t border-gray-800 py-8">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="flex items-center mb-4 md:mb-0">
                        <span class="text-xl mr-2">"🧠"</span>
                        <span class="text-lg font-bold">"Om Pachauli"</span>
                    </div>

                    <div class="text-sm text-gray-400">
                        "© " {Utc::now().year()} " All rights reserved."
                        <span class="ml-2 text-gray-600" title=concat!("Built ", env!("BUILD_TIME"))>
                            "·"
                        </span>
                    </div>

                    <button
                        on:click=scroll_to_top
                        aria-label="Scroll to top"
                        class="mt-4 md:mt-0 p-2 rounded-full bg-panel hover:bg-electric-cyan/20 transition-colors duration-300 group"
                    >
                        <span class="text-gray-400 group-hover:text-electric-cyan">"⌃"</span>
                    </button>
                </div>
            </div>
        </footer>
    }
}
