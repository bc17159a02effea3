use std::time::Duration;

use leptos::prelude::*;

use crate::content::PROFILE;

const LOADING_SCREEN_FOR: Duration = Duration::from_secs(2);

/// Full-screen splash rendered by the server and dismissed shortly after hydration.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let (is_loading, set_is_loading) = signal(true);

    Effect::new(move |_| {
        set_timeout(move || set_is_loading.set(false), LOADING_SCREEN_FOR);
    });

    view! {
        <Show when=move || is_loading.get()>
            <div class="fixed inset-0 bg-slate-900 z-50 flex flex-col items-center justify-center overflow-hidden">
                <div class="relative">
                    <div class="text-6xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-teal-400 to-blue-500">
                        {PROFILE.initials}
                    </div>
                    <div class="absolute inset-0 border-2 border-teal-500/20 rounded-full animate-ping"></div>
                </div>
                <div class="mt-12 flex items-center space-x-3 text-slate-500">
                    <div class="text-teal-400 font-medium">"Loading"</div>
                    <div class="flex">
                        {(0..3)
                            .map(|dot| {
                                view! {
                                    <div
                                        class="w-2 h-2 mx-0.5 bg-teal-400 rounded-full animate-pulse"
                                        style=format!("animation-delay: {}ms", dot * 200)
                                    ></div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
