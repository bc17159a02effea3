use leptos::prelude::*;

use crate::content::PROFILE;

/// Modal that previews the resume PDF inline. Clicking the backdrop closes it.
#[component]
pub fn ResumePreview(is_open: ReadSignal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    class="relative w-full max-w-4xl h-[85vh] bg-white dark:bg-slate-800 rounded-xl shadow-2xl flex flex-col"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex items-center justify-between px-6 py-4 border-b border-slate-200 dark:border-slate-700">
                        <h3 class="text-lg font-semibold">"Resume"</h3>
                        <div class="flex items-center gap-4">
                            <a
                                href=PROFILE.resume_path
                                download="MuthuAjayResume.pdf"
                                class="text-teal-600 dark:text-teal-400 hover:underline"
                            >
                                "Download"
                            </a>
                            <button
                                type="button"
                                aria-label="Close resume preview"
                                class="text-2xl leading-none text-slate-500 hover:text-slate-900 dark:hover:text-white"
                                on:click=move |_| on_close.run(())
                            >
                                "×"
                            </button>
                        </div>
                    </div>
                    <iframe
                        src=PROFILE.resume_path
                        title="Resume preview"
                        class="flex-1 w-full rounded-b-xl"
                    ></iframe>
                </div>
            </div>
        </Show>
    }
}
