use leptos::{html, prelude::*};

use super::hooks::{use_in_view, InViewOptions};
use super::reveal::reveal_class;

const TRAITS: &[(&str, &str, &str)] = &[
    (
        "💻",
        "Problem Solver",
        "I approach complex challenges with analytical thinking and creative solutions, breaking down problems into manageable components.",
    ),
    (
        "🖥️",
        "System Architect",
        "I design robust, scalable systems that optimize performance while maintaining flexibility for future growth and adaptability.",
    ),
    (
        "🤝",
        "Team Collaborator",
        "I excel in cross-functional environments, communicating complex technical concepts clearly to both technical and non-technical stakeholders.",
    ),
    (
        "📚",
        "Continuous Learner",
        "I stay at the forefront of AI and software development through continuous learning, experimentation, and adaptation to emerging technologies.",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    let about_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(about_ref, InViewOptions::with_threshold(0.2));

    view! {
        <section id="about" class="py-20 bg-gradient-to-b from-neural-blue to-midnight">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div
                    node_ref=about_ref
                    class=move || reveal_class("max-w-3xl mx-auto", in_view())
                >
                    <div class="flex items-center mb-8">
                        <div class="h-1 w-16 bg-electric-cyan mr-4"></div>
                        <h2 class="text-3xl sm:text-4xl font-bold">"About Me"</h2>
                    </div>

                    <p class="text-lg text-gray-300 mb-8 leading-relaxed">
                        "AI Engineer with proven expertise in architecting scalable machine learning systems and high-performance backend infrastructure. Specialized in transforming complex business challenges into intelligent, automated solutions that drive measurable impact across global markets. Certified in advanced Docker containerization and modern e-commerce architectures, with a track record of optimizing systems for enterprise-scale deployment."
                    </p>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-12">
                        {TRAITS
                            .iter()
                            .map(|(icon, title, text)| {
                                view! {
                                    <div class="bg-panel p-6 rounded-lg border border-gray-800 hover:border-electric-cyan/30 transition-all duration-300">
                                        <div class="rounded-full bg-electric-cyan/10 w-12 h-12 flex items-center justify-center mb-4 text-2xl">
                                            {*icon}
                                        </div>
                                        <h3 class="text-xl font-semibold mb-2">{*title}</h3>
                                        <p class="text-gray-400">{*text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex justify-center">
                        <a
                            href="#skills"
                            class="px-6 py-3 border border-electric-cyan text-electric-cyan font-medium rounded-md hover:bg-electric-cyan/10 transition-all duration-300"
                        >
                            "Explore My Skills"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
