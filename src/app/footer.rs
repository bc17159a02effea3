use leptos::prelude::*;

use crate::config::build_year;
use crate::content::{FOOTER_LINKS, PROFILE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 text-slate-300 py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-xl font-bold text-white mb-4">{PROFILE.name}</h3>
                        <p class="text-slate-400">{PROFILE.headline}</p>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold text-white mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {FOOTER_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a href=link.href() class="hover:text-teal-400 transition-colors">
                                                {link.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold text-white mb-4">"Connect"</h4>
                        <div class="flex space-x-4 text-xl">
                            <a
                                href=PROFILE.github_url()
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="GitHub"
                                class="hover:text-teal-400"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href=PROFILE.linkedin_url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn"
                                class="hover:text-teal-400"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a href=PROFILE.mailto() aria-label="Email" class="hover:text-teal-400">
                                "✉️"
                            </a>
                        </div>
                    </div>
                </div>
                <div class="border-t border-slate-800 mt-8 pt-8 flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-sm text-slate-500">
                        {format!("© {} {}. All rights reserved.", build_year(), PROFILE.name)}
                    </p>
                    <a href="#home" class="text-sm hover:text-teal-400 transition-colors">
                        "Back to top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
