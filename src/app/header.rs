use leptos::prelude::*;

use crate::content::{HEADER_LINKS, PROFILE};

use super::theme::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 w-full bg-white/80 dark:bg-slate-900/80 backdrop-blur-sm z-40 shadow-sm transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <a href="#home" class="flex items-center space-x-2">
                        <span class="text-2xl">"🧠"</span>
                        <span class="text-xl font-bold bg-gradient-to-r from-teal-500 to-blue-600 bg-clip-text text-transparent">
                            {PROFILE.name}
                        </span>
                    </a>
                    <nav class="hidden md:flex space-x-8">
                        {HEADER_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href()
                                        class="text-slate-700 dark:text-slate-300 hover:text-teal-500 dark:hover:text-teal-400 transition-colors"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center space-x-4 text-lg">
                        <a
                            href=PROFILE.github_url()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub Profile"
                            class="text-slate-700 dark:text-slate-300 hover:text-teal-500"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=PROFILE.linkedin_url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn Profile"
                            class="text-slate-700 dark:text-slate-300 hover:text-teal-500"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href=PROFILE.mailto()
                            aria-label="Email"
                            class="text-slate-700 dark:text-slate-300 hover:text-teal-500"
                        >
                            "✉️"
                        </a>
                        <ThemeToggle />
                    </div>
                </div>
            </div>
        </header>
    }
}
