use leptos::{either::Either, prelude::*, task::spawn_local};

use crate::content::PROFILE;
use crate::http::ReqwestClient;
use crate::stats::{fetch_activity_stats, ActivityStats, RequestGuard, StatsState, GITHUB_API};

use super::{lazy_image::LazyImage, theme::use_theme, SectionHeading};

/// Fetches activity stats for `profile`, again whenever it changes. Results
/// that arrive after a newer request, or after the caller unmounts, are dropped.
pub fn use_activity_stats(profile: Signal<String>) -> ReadSignal<StatsState> {
    let (state, set_state) = signal(StatsState::Loading);
    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.dispose()
    });

    Effect::new(move |_| {
        let profile = profile.get();
        let ticket = guard.begin();
        set_state.set(StatsState::Loading);
        spawn_local(async move {
            let result = fetch_activity_stats(&ReqwestClient::new(), GITHUB_API, &profile).await;
            if let Err(e) = &result {
                log::error!("Error fetching GitHub stats for {profile}: {e}");
            }
            if ticket.is_current() {
                set_state.set(result.into());
            } else {
                log::debug!("dropping stale GitHub stats for {profile}");
            }
        });
    });

    state
}

#[component]
pub fn GitHubActivity() -> impl IntoView {
    let stats = use_activity_stats(Signal::derive(|| PROFILE.github.to_string()));
    let failed = Memo::new(move |_| stats.with(StatsState::is_failed));
    let theme = use_theme();

    let cards: [(&str, &str, fn(&ActivityStats) -> u64); 3] = [
        ("💻", "Contributions", |s: &ActivityStats| s.contributions_estimate),
        ("🌿", "Repositories", |s: &ActivityStats| s.repository_count),
        ("🔀", "Pull Requests", |s: &ActivityStats| s.pull_requests_estimate),
    ];

    view! {
        <section
            id="github"
            class="py-20 bg-white dark:bg-slate-900 transition-colors duration-300 relative overflow-hidden"
        >
            <div class="absolute top-0 right-0 -mt-20 -mr-20 w-80 h-80 bg-teal-400/10 dark:bg-teal-500/5 rounded-full filter blur-3xl"></div>
            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-4xl mx-auto">
                    <SectionHeading
                        title="GitHub Contributions"
                        subtitle="Consistent contributions to open-source and personal projects, showcasing my commitment to continuous learning and code quality."
                    />
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-12">
                        {cards
                            .into_iter()
                            .map(|(icon, label, pick)| {
                                view! {
                                    <div class="bg-slate-50 dark:bg-slate-800 p-6 rounded-xl shadow-sm flex items-center space-x-4 border border-slate-200 dark:border-slate-700 hover:-translate-y-1 transition-transform">
                                        <div class="p-3 rounded-lg bg-white dark:bg-slate-700 shadow-sm text-2xl">
                                            {icon}
                                        </div>
                                        <div>
                                            <div class="text-3xl font-bold text-slate-800 dark:text-white">
                                                {move || stats.with(|s| s.display(pick))}
                                            </div>
                                            <div class="text-sm text-slate-500 dark:text-slate-400">
                                                {label}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="bg-white dark:bg-slate-800 p-6 sm:p-8 rounded-xl shadow-lg border border-slate-200 dark:border-slate-700 overflow-hidden">
                        <div class="flex flex-col sm:flex-row items-center justify-between mb-6 gap-4">
                            <h3 class="text-xl font-semibold text-slate-800 dark:text-white">
                                "Contribution Calendar"
                            </h3>
                            <a
                                href=PROFILE.github_url()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center px-4 py-2 bg-slate-100 dark:bg-slate-700 rounded-lg text-slate-700 dark:text-slate-300 hover:bg-slate-200 dark:hover:bg-slate-600 transition-colors text-sm font-medium"
                            >
                                <i class="devicon-github-plain mr-2"></i>
                                "View GitHub Profile"
                            </a>
                        </div>
                        <div class="overflow-x-auto pb-2">
                            {move || {
                                if failed.get() {
                                    Either::Left(
                                        view! {
                                            <div class="text-center p-8 text-red-500">
                                                "Error loading GitHub data. Please try again later."
                                            </div>
                                        },
                                    )
                                } else {
                                    let color = if theme.is_dark() { "2dd4bf" } else { "0d9488" };
                                    Either::Right(
                                        view! {
                                            <LazyImage
                                                src=format!(
                                                    "https://ghchart.rshah.org/{color}/{}",
                                                    PROFILE.github,
                                                )
                                                alt="GitHub contribution calendar"
                                                class="w-full min-h-[120px]"
                                            />
                                        },
                                    )
                                }
                            }}
                        </div>
                        <p class="text-center mt-6 text-sm text-slate-500 dark:text-slate-400">
                            "This calendar represents my GitHub contribution activity over the past year"
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
