use leptos::{either::Either, prelude::*};

use crate::content::{Project, PROJECTS};

use super::{lazy_image::LazyImage, SectionHeading};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 bg-slate-50 dark:bg-slate-800 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="A selection of models and pipelines I have built end to end."
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let body = view! {
        <LazyImage
            src=project.image
            alt=project.title
            class="h-48 w-full"
        />
        <div class="p-6">
            <div class="flex items-center space-x-2 mb-3">
                <span class="text-2xl">{project.icon}</span>
                <h3 class="text-xl font-semibold">{project.title}</h3>
            </div>
            <p class="text-slate-600 dark:text-slate-300 mb-4">{project.description}</p>
            <div class="flex flex-wrap gap-2">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="px-3 py-1 bg-teal-100 dark:bg-teal-900/40 text-teal-700 dark:text-teal-300 rounded-full text-sm">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    };
    let card = "block bg-white dark:bg-slate-900 rounded-xl shadow-md overflow-hidden hover:shadow-xl transition-shadow";

    match project.link {
        Some(link) => Either::Left(view! {
            <a href=link target="_blank" rel="noopener noreferrer" class=card>
                {body}
            </a>
        }),
        None => Either::Right(view! { <div class=card>{body}</div> }),
    }
}
