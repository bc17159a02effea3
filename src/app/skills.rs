use leptos::prelude::*;

use crate::content::SKILLS;

use super::SectionHeading;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-white dark:bg-slate-900 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Technical Skills" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="bg-slate-50 dark:bg-slate-800 p-6 rounded-xl shadow-sm hover:shadow-md transition-shadow">
                                    <div class="flex items-center space-x-3 mb-4">
                                        <span class="text-2xl">{group.icon}</span>
                                        <h3 class="text-lg font-semibold">{group.category}</h3>
                                    </div>
                                    <ul class="space-y-2">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <li class="flex items-center text-slate-600 dark:text-slate-300">
                                                        <span class="w-2 h-2 bg-teal-500 rounded-full mr-2"></span>
                                                        {*item}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
