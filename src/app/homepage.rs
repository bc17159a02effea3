use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{ABOUT_PARAGRAPHS, HIGHLIGHTS, PROFILE};

use super::{
    contact::Contact, experience::Experience, github::GitHubActivity, projects::Projects,
    resume::ResumePreview, skills::Skills, SectionHeading,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <Skills />
        <Experience />
        <GitHubActivity />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let (resume_open, set_resume_open) = signal(false);

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center bg-gradient-to-br from-teal-50 to-blue-50 dark:from-slate-900 dark:to-slate-800 pt-16 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-teal-500 to-blue-600 bg-clip-text text-transparent">
                    {PROFILE.headline}
                </h1>
                <p class="text-xl md:text-2xl text-slate-600 dark:text-slate-300 mb-8 max-w-3xl mx-auto">
                    {PROFILE.tagline}
                </p>
                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    <a
                        href="#projects"
                        class="bg-teal-600 text-white px-8 py-3 rounded-full hover:bg-teal-700 transition-colors"
                    >
                        "View Projects"
                    </a>
                    <a
                        href="#contact"
                        class="border-2 border-teal-600 text-teal-600 dark:text-teal-400 px-8 py-3 rounded-full hover:bg-teal-600 hover:text-white transition-colors"
                    >
                        "Contact Me"
                    </a>
                    <button
                        type="button"
                        on:click=move |_| set_resume_open.set(true)
                        class="border-2 border-slate-400 text-slate-600 dark:text-slate-300 px-8 py-3 rounded-full hover:bg-slate-200 dark:hover:bg-slate-700 transition-colors"
                    >
                        "Preview Resume"
                    </button>
                </div>
                <div class="animate-bounce text-2xl text-teal-600">"↓"</div>
            </div>
            <ResumePreview
                is_open=resume_open
                on_close=Callback::new(move |_| set_resume_open.set(false))
            />
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-white dark:bg-slate-900 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="About Me" />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-12">
                    <div class="lg:col-span-2 space-y-6">
                        {ABOUT_PARAGRAPHS
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-lg text-slate-600 dark:text-slate-300 leading-relaxed">
                                        {*p}
                                    </p>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-1 gap-6">
                        {HIGHLIGHTS
                            .iter()
                            .map(|h| {
                                view! {
                                    <div class="bg-slate-50 dark:bg-slate-800 p-6 rounded-xl shadow-sm hover:shadow-md transition-shadow">
                                        <div class="flex items-center space-x-4">
                                            <div class="bg-teal-100 dark:bg-teal-900/40 p-3 rounded-lg text-2xl">
                                                {h.icon}
                                            </div>
                                            <div>
                                                <h3 class="font-semibold">{h.title}</h3>
                                                <p class="text-slate-600 dark:text-slate-400">
                                                    {h.description}
                                                </p>
                                            </div>
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
