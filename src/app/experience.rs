use leptos::prelude::*;

use crate::content::{Role, EXPERIENCE};

use super::SectionHeading;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 bg-slate-50 dark:bg-slate-800 transition-colors duration-300">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Professional Experience" />
                <ol class="relative border-l-2 border-teal-500 ml-3 space-y-12">
                    {EXPERIENCE.iter().map(|role| view! { <TimelineEntry role=role /> }).collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(role: &'static Role) -> impl IntoView {
    view! {
        <li class="ml-8">
            <span class="absolute -left-[9px] w-4 h-4 bg-teal-500 rounded-full border-4 border-white dark:border-slate-800"></span>
            <div class="bg-white dark:bg-slate-900 p-6 rounded-xl shadow-sm">
                <div class="flex flex-wrap items-baseline justify-between gap-2 mb-2">
                    <h3 class="text-xl font-semibold">{role.title}</h3>
                    <span class="text-sm text-teal-600 dark:text-teal-400">{role.period}</span>
                </div>
                <p class="font-medium text-slate-700 dark:text-slate-300 mb-3">{role.company}</p>
                <p class="text-slate-600 dark:text-slate-400 mb-4">{role.description}</p>
                <ul class="list-disc pl-5 space-y-1 text-slate-600 dark:text-slate-400">
                    {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                </ul>
            </div>
        </li>
    }
}
