use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::lazy_image::{box_style, ImageLoad, VisibilityReport, DEFAULT_VISIBILITY_THRESHOLD};

/// Image that is only requested once its box scrolls near the viewport.
/// A pulsing placeholder holds the layout until the bytes arrive.
#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (load, set_load) = signal(ImageLoad::default());
    let visible = Memo::new(move |_| load.get().has_entered_viewport());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let report = VisibilityReport {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                set_load.maybe_update(|l| l.observe(report, DEFAULT_VISIBILITY_THRESHOLD));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![DEFAULT_VISIBILITY_THRESHOLD]),
    );

    // one trigger per image
    Effect::new(move |_| {
        if !load.get().wants_observation() {
            stop();
        }
    });

    let img_class = move || {
        if load.get().is_loaded() {
            "transition-opacity duration-500 opacity-100"
        } else {
            "transition-opacity duration-500 opacity-0"
        }
    };

    view! {
        <div
            node_ref=target
            class=format!("relative overflow-hidden {class}")
            style=box_style(width, height)
        >
            <Show
                when=move || visible.get()
                fallback=|| {
                    view! {
                        <div class="animate-pulse bg-slate-200 dark:bg-slate-700 w-full h-full rounded transition-colors duration-300"></div>
                    }
                }
            >
                <img
                    src=src.clone()
                    alt=alt.clone()
                    class=img_class
                    style="width: 100%; height: 100%; object-fit: cover;"
                    loading="lazy"
                    width=width.map(|w| w.to_string())
                    height=height.map(|h| h.to_string())
                    on:load=move |_| set_load.update(ImageLoad::mark_loaded)
                    on:error=move |_| set_load.update(ImageLoad::mark_errored)
                />
                <Show when=move || load.get() == ImageLoad::Loading>
                    <div class="absolute inset-0 animate-pulse bg-slate-200 dark:bg-slate-700 transition-colors duration-300"></div>
                </Show>
                <Show when=move || load.get().has_errored()>
                    <div class="absolute inset-0 flex items-center justify-center bg-slate-100 dark:bg-slate-800 text-slate-500 dark:text-slate-400 text-sm transition-colors duration-300">
                        "Unable to load image"
                    </div>
                </Show>
            </Show>
        </div>
    }
}
