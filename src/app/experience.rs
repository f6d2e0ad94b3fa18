use leptos::{html, prelude::*};

use super::hooks::{use_in_view, InViewOptions};
use super::reveal::{reveal_class, stagger_style, TIMELINE_STAGGER_MS};
use crate::content::{self, EXPERIENCES};

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, InViewOptions::with_threshold(0.1));

    view! {
        <section id="experience" class="py-20 bg-gradient-to-b from-midnight to-neural-blue">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div node_ref=section_ref class=move || reveal_class("", in_view())>
                    <div class="text-center mb-16">
                        <div class="inline-flex items-center mb-4">
                            <div class="h-1 w-8 bg-electric-cyan mr-4"></div>
                            <h2 class="text-3xl sm:text-4xl font-bold">"Work Experience"</h2>
                            <div class="h-1 w-8 bg-electric-cyan ml-4"></div>
                        </div>
                        <p class="text-gray-400 max-w-2xl mx-auto">
                            "My professional journey building intelligent systems and robust backend infrastructure."
                        </p>
                    </div>

                    <div class="max-w-3xl mx-auto">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, experience)| {
                                view! {
                                    <ExperienceItem
                                        experience=experience
                                        index=index
                                        is_last=index == EXPERIENCES.len() - 1
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceItem(
    experience: &'static content::Experience,
    index: usize,
    is_last: bool,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let item_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(item_ref, InViewOptions::with_threshold(0.1));

    view! {
        <div
            node_ref=item_ref
            class=move || reveal_class("mb-8", in_view())
            style=stagger_style(index, TIMELINE_STAGGER_MS)
        >
            <div class="flex">
                <div class="hidden md:flex flex-col items-center mr-8">
                    <div class="w-3 h-3 rounded-full bg-electric-cyan"></div>
                    {(!is_last)
                        .then(|| view! { <div class="w-px h-full bg-gray-700 mt-3"></div> })}
                </div>
                <div class="flex-1">
                    <div class="bg-panel p-6 rounded-lg border border-gray-800 hover:border-electric-cyan/30 transition-all duration-300">
                        <div class="md:flex justify-between items-start mb-4">
                            <div>
                                <h3 class="text-xl font-bold text-white">{experience.role}</h3>
                                <p class="text-electric-cyan font-medium">{experience.company}</p>
                            </div>
                            <div class="mt-2 md:mt-0">
                                <div class="flex items-center text-sm text-gray-400 mb-1">
                                    <span class="mr-2">"📅"</span>
                                    {experience.period}
                                </div>
                                <div class="flex items-center text-sm text-gray-400">
                                    <i class="extra-location mr-2" />
                                    {experience.location}
                                </div>
                            </div>
                        </div>

                        <p class="text-gray-300 mb-4">{experience.description}</p>

                        <button
                            on:click=move |_| set_expanded(!expanded.get_untracked())
                            class="flex items-center text-sm text-electric-cyan hover:text-electric-cyan/80 mb-4 font-medium"
                        >
                            {move || if expanded() { "Show Less" } else { "Show Achievements" }}
                            <span class=move || {
                                format!(
                                    "ml-1 transform transition-transform {}",
                                    if expanded() { "rotate-90" } else { "rotate-0" },
                                )
                            }>"❯"</span>
                        </button>

                        {move || {
                            expanded()
                                .then(|| {
                                    view! {
                                        <div class="mt-4 animate-fadeIn">
                                            <h4 class="text-sm font-semibold text-gray-200 mb-2">
                                                "Key Achievements:"
                                            </h4>
                                            <ul class="list-disc list-inside text-gray-400 space-y-2 mb-4">
                                                {experience
                                                    .achievements
                                                    .iter()
                                                    .map(|achievement| {
                                                        view! { <li class="text-sm">{*achievement}</li> }
                                                    })
                                                    .collect_view()}
                                            </ul>

                                            <div class="flex flex-wrap gap-2 mt-4">
                                                {experience
                                                    .skills
                                                    .iter()
                                                    .map(|skill| {
                                                        view! {
                                                            <span class="text-xs font-medium px-2 py-1 rounded-full bg-electric-cyan/10 text-electric-cyan">
                                                                {*skill}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
