use leptos::{html, prelude::*};

use super::hooks::{use_in_view, InViewOptions};
use super::particles::ParticleCanvas;

#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    // any visible sliver keeps the backdrop animating; fully off-screen pauses it
    let on_screen = use_in_view(section_ref, InViewOptions::default());

    view! {
        <section id="home" class="relative min-h-screen flex items-center">
            <ParticleCanvas active=on_screen />
            <div class="absolute inset-0 bg-gradient-to-br from-neural-blue/90 to-charcoal/90"></div>

            <div
                node_ref=section_ref
                class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10"
            >
                <div class="flex flex-col md:flex-row items-center justify-between max-w-6xl mx-auto">
                    <div class="flex flex-col max-w-3xl md:w-2/3">
                        <div class="flex items-center mb-4">
                            <div class="h-1 w-16 bg-electric-cyan mr-4"></div>
                            <span class="text-sm font-medium tracking-wide uppercase text-electric-cyan">
                                "AI Engineer & Backend Architect"
                            </span>
                        </div>

                        <h1 class="text-5xl sm:text-6xl lg:text-7xl font-black tracking-tighter mb-6">
                            <span class="text-white block">"Om"</span>
                            <span class="text-white block">
                                "Pachauli"<span class="text-electric-cyan">"."</span>
                            </span>
                        </h1>

                        <p class="text-xl sm:text-2xl text-gray-300 mb-8 leading-relaxed">
                            "Engineering Intelligent Systems That Transform Tomorrow"
                        </p>

                        <p class="text-gray-400 mb-8">
                            "Gurugram, India • Available for Global Opportunities"
                        </p>

                        <div class="flex flex-wrap gap-4 mb-12">
                            <a
                                href="#projects"
                                class="px-6 py-3 bg-electric-cyan text-neural-blue font-medium rounded-md hover:bg-electric-cyan/90 transition-all duration-300 flex items-center"
                            >
                                "View Projects" <span class="ml-2">"➜"</span>
                            </a>
                            <a
                                href="https://flowcv.com/resume/lq3dejw66uki"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-6 py-3 border border-electric-cyan text-electric-cyan font-medium rounded-md hover:bg-electric-cyan/10 transition-all duration-300 flex items-center"
                            >
                                "Download Resume" <i class="extra-download ml-2" />
                            </a>
                            <a
                                href="#contact"
                                class="px-6 py-3 border border-electric-cyan text-electric-cyan font-medium rounded-md hover:bg-electric-cyan/10 transition-all duration-300"
                            >
                                "Contact Me"
                            </a>
                        </div>

                        <div class="flex space-x-4">
                            <a
                                href="https://github.com/Omkie-111"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="GitHub Profile"
                                class="p-2 rounded-full border border-gray-700 hover:border-electric-cyan hover:text-electric-cyan transition-all duration-300 text-xl"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href="https://linkedin.com/in/om-pachauli"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn Profile"
                                class="p-2 rounded-full border border-gray-700 hover:border-electric-cyan hover:text-electric-cyan transition-all duration-300 text-xl"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                        </div>
                    </div>

                    <div class="md:w-1/3 mt-12 md:mt-0">
                        <div class="relative w-64 h-64 mx-auto">
                            <div class="absolute inset-0 rounded-full bg-gradient-to-r from-electric-cyan/20 to-electric-cyan/10 animate-pulse"></div>
                            <img
                                src="/me.jpeg"
                                alt="Om Pachauli"
                                class="rounded-full w-full h-full object-cover border-4 border-electric-cyan/30"
                            />
                            <div class="absolute inset-0 rounded-full border-2 border-electric-cyan/20 animate-spin-slow"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
