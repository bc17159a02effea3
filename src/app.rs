mod contact;
mod experience;
mod footer;
mod github;
mod header;
mod homepage;
mod lazy_image;
mod loading;
mod projects;
mod resume;
mod skills;
mod theme;

use leptos::{prelude::*, task::spawn_local};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::analytics::Analytics;
use crate::content::PROFILE;
use crate::http::ReqwestClient;
use crate::theme::Theme;

use footer::Footer;
use header::Header;
use homepage::HomePage;
use loading::LoadingScreen;
pub use theme::{provide_theme, use_theme, ThemeContext};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        // default theme until the stored preference is read after hydration
        <html lang="en" class=Theme::default().root_class()>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    Effect::new(move |_| {
        let url = window().location().href().unwrap_or_default();
        spawn_local(async move {
            Analytics::default()
                .track_pageview(&ReqwestClient::new(), &url)
                .await;
        });
    });

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <LoadingScreen />
            <div class="min-h-screen bg-white dark:bg-slate-900 text-slate-900 dark:text-white transition-colors duration-300">
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-teal-500 to-blue-600 dark:from-teal-400 dark:to-blue-500">
                    {title}
                </span>
            </h2>
            {subtitle
                .map(|s| {
                    view! { <p class="text-slate-600 dark:text-slate-400 max-w-2xl mx-auto">{s}</p> }
                })}
        </div>
    }
}
