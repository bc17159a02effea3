use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::theme::{Theme, DARK_CLASS, THEME_STORAGE_KEY};

/// Site-wide light/dark preference. Provided once by `App`; everything else
/// reads it through [`use_theme`].
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Signal<Theme> {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    /// Flips the theme. Local storage is written by the storage hook.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("switching to {next} theme");
        self.set_theme.set(next);
    }
}

pub fn provide_theme() -> ThemeContext {
    // Missing or unreadable values fall back to Theme::default(), i.e. dark.
    // The stored value is only read once hydration is done so the first client
    // render matches the server's.
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, FromToStringCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );
    let ctx = ThemeContext { theme, set_theme };

    Effect::new(move |_| apply_root_class(theme.get()));

    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn apply_root_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
    {
        log::warn!("couldn't apply {theme} theme: {e:?}");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            type="button"
            on:click=move |_| theme.toggle()
            class="p-2 rounded-full text-slate-700 dark:text-slate-300 hover:bg-slate-200 dark:hover:bg-slate-700 transition-colors"
            aria-label=move || {
                if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
            }
        >
            {move || if theme.is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
