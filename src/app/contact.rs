use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::analytics::{Analytics, CONTACT_SUBMITTED};
use crate::config::RelayConfig;
use crate::contact::{submit, ContactForm, SubmitStatus};
use crate::http::ReqwestClient;

use super::SectionHeading;

const INPUT_CLASS: &str = "block w-full rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-700 px-3 py-2 shadow-sm focus:border-teal-500 focus:ring-teal-500 focus:outline-none";

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = Memo::new(move |_| form.with(ContactForm::status));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // None while a send is in flight, so a second click never fires a request
        let Some(message) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        spawn_local(async move {
            let client = ReqwestClient::new();
            let outcome = submit(&client, RelayConfig::from_build_env(), &message).await;
            if let Err(e) = &outcome {
                log::error!("contact form submission failed: {e}");
            }
            // the form is gone if the section unmounted mid-send
            if form
                .try_update(|f| f.finish_submit(outcome.is_ok()))
                .is_none()
            {
                return;
            }
            if outcome.is_ok() {
                let url = window().location().href().unwrap_or_default();
                Analytics::default()
                    .track(&client, CONTACT_SUBMITTED, &url, None)
                    .await;
            }
        });
    };

    view! {
        <section id="contact" class="py-20 bg-slate-50 dark:bg-slate-800 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Get in Touch" />
                <div class="max-w-3xl mx-auto bg-white dark:bg-slate-900 rounded-xl shadow-lg p-8">
                    <form class="space-y-6" on:submit=on_submit>
                        <div>
                            <label for="name" class="block text-sm font-medium mb-1">
                                "Name"
                            </label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                required=true
                                placeholder="Your name"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.name = value);
                                }
                            />
                        </div>
                        <div>
                            <label for="email" class="block text-sm font-medium mb-1">
                                "Email"
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                required=true
                                placeholder="your@email.com"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.email = value);
                                }
                            />
                        </div>
                        <div>
                            <label for="message" class="block text-sm font-medium mb-1">
                                "Message"
                            </label>
                            <textarea
                                id="message"
                                name="message"
                                rows="4"
                                required=true
                                placeholder="Your message..."
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.message = value);
                                }
                            ></textarea>
                        </div>
                        <Show when=move || status.get() == SubmitStatus::Sent>
                            <div class="rounded-md bg-green-100 dark:bg-green-900/40 text-green-700 dark:text-green-300 px-4 py-3 text-sm">
                                "Thanks! Your message has been sent."
                            </div>
                        </Show>
                        <Show when=move || status.get() == SubmitStatus::Failed>
                            <div class="rounded-md bg-red-100 dark:bg-red-900/40 text-red-700 dark:text-red-300 px-4 py-3 text-sm">
                                "Something went wrong sending your message. Please try again."
                            </div>
                        </Show>
                        <button
                            type="submit"
                            disabled=move || status.get() == SubmitStatus::Sending
                            class="w-full flex items-center justify-center space-x-2 bg-teal-600 text-white px-8 py-3 rounded-md hover:bg-teal-700 disabled:opacity-60 disabled:cursor-not-allowed transition-colors"
                        >
                            <span>"✉️"</span>
                            <span>
                                {move || {
                                    if status.get() == SubmitStatus::Sending {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }}
                            </span>
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
