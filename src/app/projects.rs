use leptos::server_fn::codec::GetUrl;
use leptos::{html, prelude::*};

use super::hooks::{use_in_view, InViewOptions};
use super::reveal::{reveal_class, stagger_style, CARD_STAGGER_MS};
#[cfg(feature = "ssr")]
use crate::snippets::get_snippet;
use crate::content::{self, filter_projects, Category};
use crate::snippets::{Snippet, GLOBAL_SNIPPET_CACHE};

#[server(input = GetUrl)]
pub async fn get_snippet_server(name: String) -> Result<Snippet, ServerFnError> {
    get_snippet(name)
        .await
        .ok_or(ServerFnError::new("Couldn't get code snippet"))
}

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, InViewOptions::with_threshold(0.1));
    let (filter, set_filter) = signal(None::<Category>);

    let filter_options =
        std::iter::once(None).chain(Category::ALL.into_iter().map(Some));

    view! {
        <section id="projects" class="py-20 bg-gradient-to-b from-neural-blue to-midnight">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div node_ref=section_ref class=move || reveal_class("", in_view())>
                    <div class="text-center mb-16">
                        <div class="inline-flex items-center mb-4">
                            <div class="h-1 w-8 bg-electric-cyan mr-4"></div>
                            <h2 class="text-3xl sm:text-4xl font-bold">"Featured Projects"</h2>
                            <div class="h-1 w-8 bg-electric-cyan ml-4"></div>
                        </div>
                        <p class="text-gray-400 max-w-2xl mx-auto">
                            "A showcase of my work across AI/ML, backend development, and cloud infrastructure."
                        </p>
                    </div>

                    <div class="flex flex-wrap justify-center gap-4 mb-10">
                        {filter_options
                            .map(|option| {
                                let label = option.map_or("All", |c| c.label());
                                view! {
                                    <button
                                        on:click=move |_| set_filter(option)
                                        class=move || {
                                            format!(
                                                "px-4 py-2 rounded-md text-sm font-medium transition-all duration-300 {}",
                                                if filter() == option {
                                                    "bg-electric-cyan text-neural-blue"
                                                } else {
                                                    "bg-panel text-gray-300 hover:bg-electric-cyan/20 hover:text-electric-cyan"
                                                },
                                            )
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                        {move || {
                            filter_projects(filter.get())
                                .into_iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    view! { <ProjectCard project=project index=index /> }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static content::Project, index: usize) -> impl IntoView {
    let (show_code, set_show_code) = signal(false);
    let card_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(card_ref, InViewOptions::with_threshold(0.1));

    let name = project.snippet;
    let snippet = Resource::new(
        move || show_code.get(),
        move |show| async move {
            if !show {
                return None;
            }
            let cache = &*GLOBAL_SNIPPET_CACHE;
            if let Some(s) = cache.get(name) {
                return (*s).clone();
            }
            let snippet = get_snippet_server(name.to_string()).await.ok();
            // only cache resolved snippets on the browser
            #[cfg(feature = "hydrate")]
            cache.insert(name.to_string(), snippet.clone());
            snippet
        },
    );

    view! {
        <div
            node_ref=card_ref
            class=move || reveal_class("bg-panel rounded-lg overflow-hidden", in_view())
            style=stagger_style(index, CARD_STAGGER_MS)
        >
            <div class="p-6">
                <div class="flex items-center justify-between mb-4">
                    <div class="flex items-center space-x-3">
                        <div class="rounded-full bg-electric-cyan/10 p-3 text-2xl">
                            {project.emoji}
                        </div>
                        <div>
                            <h3 class="text-xl font-bold text-white">{project.title}</h3>
                            {project
                                .company
                                .map(|company| {
                                    view! { <p class="text-electric-cyan text-sm">{company}</p> }
                                })}
                        </div>
                    </div>
                </div>

                <p class="text-gray-400 mb-4">{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="text-xs font-medium px-2 py-1 rounded-full bg-electric-cyan/10 text-electric-cyan">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    on:click=move |_| set_show_code(!show_code.get_untracked())
                    class="flex items-center text-sm text-electric-cyan hover:text-electric-cyan/80 font-medium"
                >
                    {move || if show_code() { "Hide Code" } else { "Show Code" }}
                    <span class=move || {
                        format!(
                            "ml-1 transform transition-transform {}",
                            if show_code() { "rotate-90" } else { "rotate-0" },
                        )
                    }>"❯"</span>
                </button>

                {move || {
                    show_code()
                        .then(|| {
                            view! {
                                <div class="mt-4 mb-2 animate-fadeIn text-sm rounded-md overflow-x-auto">
                                    <Transition fallback=move || {
                                        view! {
                                            <div class="loading-skeleton h-24 rounded"></div>
                                        }
                                    }>
                                        {move || Suspend::new(async move {
                                            let snippet = snippet.await;
                                            snippet
                                                .map(|s| {
                                                    view! { <div inner_html=s.html></div> }
                                                })
                                        })}
                                    </Transition>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
