use leptos::{html, prelude::*};

use super::hooks::{use_in_view, InViewOptions};
use super::reveal::{bar_width, reveal_class, stagger_delay_ms, CARD_STAGGER_MS};
use crate::content::SKILL_CATEGORIES;

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, InViewOptions::with_threshold(0.1));

    view! {
        <section id="skills" class="py-20 bg-gradient-to-b from-midnight to-neural-blue">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div node_ref=section_ref class=move || reveal_class("", in_view())>
                    <div class="text-center mb-16">
                        <div class="inline-flex items-center mb-4">
                            <div class="h-1 w-8 bg-electric-cyan mr-4"></div>
                            <h2 class="text-3xl sm:text-4xl font-bold">"Technical Skills"</h2>
                            <div class="h-1 w-8 bg-electric-cyan ml-4"></div>
                        </div>
                        <p class="text-gray-400 max-w-2xl mx-auto">
                            "My expertise spans across AI systems, backend development, and cloud infrastructure, allowing me to build end-to-end intelligent solutions."
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                        {SKILL_CATEGORIES
                            .iter()
                            .enumerate()
                            .map(|(category_index, category)| {
                                view! {
                                    <div class="bg-panel p-6 rounded-lg border border-gray-800 hover:border-electric-cyan/30 transition-all duration-300">
                                        <div class="flex items-center mb-6">
                                            <div class="rounded-full bg-electric-cyan/10 w-10 h-10 flex items-center justify-center mr-4 text-xl">
                                                {category.icon}
                                            </div>
                                            <h3 class="text-xl font-semibold">{category.title}</h3>
                                        </div>
                                        <div>
                                            {category
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(skill_index, skill)| {
                                                    view! {
                                                        <SkillBar
                                                            name=skill.name
                                                            level=skill.level
                                                            delay_ms=stagger_delay_ms(
                                                                category_index + skill_index,
                                                                CARD_STAGGER_MS,
                                                            )
                                                        />
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One skill meter. Observed independently of its siblings so bars animate
/// as each one scrolls in, not when the section header does.
#[component]
fn SkillBar(name: &'static str, level: u8, delay_ms: u32) -> impl IntoView {
    let bar_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(bar_ref, InViewOptions::with_threshold(0.1));

    view! {
        <div node_ref=bar_ref class="mb-4">
            <div class="flex justify-between mb-1">
                <span class="text-sm font-medium text-gray-300">{name}</span>
                <span class="text-sm font-medium text-electric-cyan">{level}"%"</span>
            </div>
            <div class="w-full bg-gray-800 rounded-full h-2.5">
                <div
                    class="bg-electric-cyan h-2.5 rounded-full transition-all duration-1000 ease-out"
                    style=move || {
                        format!(
                            "width: {}; transition-delay: {}ms",
                            bar_width(level, in_view()),
                            delay_ms,
                        )
                    }
                ></div>
            </div>
        </div>
    }
}
