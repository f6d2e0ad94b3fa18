use std::time::Duration;

use chrono::{FixedOffset, Utc};
use leptos::{html, prelude::*};
use leptos_use::{use_clipboard, UseClipboardReturn};

use super::hooks::{use_in_view, InViewOptions};
use super::reveal::reveal_class;

/// IST, the subject's home timezone.
const TIMEZONE_OFFSET_SECS: i32 = 5 * 3600 + 1800;

#[derive(Debug, Clone, Copy, PartialEq)]
enum FormStatus {
    Idle,
    Sent,
    Invalid(&'static str),
}

/// Field checks beyond what the browser enforces. Returns the first problem.
fn validate_message(name: &str, email: &str, message: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Please enter your name.");
    }
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email address.");
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err("Please enter a valid email address.");
    }
    if message.trim().is_empty() {
        return Err("Please enter a message.");
    }
    Ok(())
}

fn local_time_now() -> String {
    let tz = FixedOffset::east_opt(TIMEZONE_OFFSET_SECS)
        .expect("timezone offset should be in range");
    Utc::now().with_timezone(&tz).format("%I:%M %p").to_string()
}

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, InViewOptions::with_threshold(0.1));

    view! {
        <section id="contact" class="py-20 bg-gradient-to-b from-neural-blue to-midnight">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div node_ref=section_ref class=move || reveal_class("", in_view())>
                    <div class="text-center mb-16">
                        <div class="inline-flex items-center mb-4">
                            <div class="h-1 w-8 bg-electric-cyan mr-4"></div>
                            <h2 class="text-3xl sm:text-4xl font-bold">"Get In Touch"</h2>
                            <div class="h-1 w-8 bg-electric-cyan ml-4"></div>
                        </div>
                        <p class="text-gray-400 max-w-2xl mx-auto">
                            "Have a project in mind or want to discuss opportunities? Feel free to reach out."
                        </p>
                    </div>

                    <div class="max-w-5xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-8">
                        <ContactInfo />
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    // render client-side only, so server and browser never disagree on the minute
    let (time, set_time) = signal(None::<String>);
    Effect::new(move |_| set_time(Some(local_time_now())));

    view! {
        <div class="bg-panel p-8 rounded-lg border border-gray-800">
            <h3 class="text-2xl font-bold mb-6">"Contact Information"</h3>

            <ContactItem
                icon="extra-email"
                label="Email"
                value="ompachauli007@gmail.com"
                link=Some("mailto:ompachauli007@gmail.com")
                copyable=true
            />

            <ContactItem
                icon="extra-phone"
                label="Phone"
                value="+91 8887965397"
                link=Some("tel:+918887965397")
                copyable=true
            />

            <ContactItem
                icon="extra-location"
                label="Location"
                value="Gurugram, India"
                link=None
                copyable=false
            />

            <ContactItem
                icon="devicon-github-plain"
                label="GitHub"
                value="github.com/Omkie-111"
                link=Some("https://github.com/Omkie-111")
                copyable=false
            />

            <ContactItem
                icon="devicon-linkedin-plain"
                label="LinkedIn"
                value="linkedin.com/in/om-pachauli"
                link=Some("https://linkedin.com/in/om-pachauli")
                copyable=false
            />

            <div class="mt-8 pt-6 border-t border-gray-800">
                <p class="text-sm text-gray-400 mb-4">"Current Local Time"</p>
                <p class="text-xl font-semibold">
                    {move || time.get()} " " <span class="text-gray-400">"(GMT+5:30)"</span>
                </p>
            </div>
        </div>
    }
}

#[component]
fn ContactItem(
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    link: Option<&'static str>,
    copyable: bool,
) -> impl IntoView {
    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();

    view! {
        <div class="flex items-start mb-6">
            <div class="rounded-full bg-electric-cyan/10 w-10 h-10 flex items-center justify-center mr-4 flex-shrink-0">
                <i class=format!("{icon} text-electric-cyan") />
            </div>
            <div class="flex-1">
                <p class="text-sm text-gray-400">{label}</p>
                {match link {
                    Some(link) => {
                        view! {
                            <a
                                href=link
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-white hover:text-electric-cyan transition-colors duration-300"
                            >
                                {value}
                            </a>
                        }
                            .into_any()
                    }
                    None => view! { <p class="text-white">{value}</p> }.into_any(),
                }}
            </div>
            {copyable
                .then(|| {
                    view! {
                        <button
                            on:click={
                                let copy = copy.clone();
                                move |_| copy(value)
                            }
                            disabled=move || !is_supported()
                            title="Copy to clipboard"
                            class="p-1 hover:bg-electric-cyan/10 rounded-full transition-colors duration-300"
                        >
                            {move || if copied() { "✅" } else { "📋" }}
                        </button>
                    }
                })}
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name_el), Some(email_el), Some(message_el)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };

        if let Err(problem) =
            validate_message(&name_el.value(), &email_el.value(), &message_el.value())
        {
            set_status(FormStatus::Invalid(problem));
            return;
        }

        // there is no backend for this - pretend the send took a moment
        log::debug!("simulating contact form submission");
        set_timeout(
            move || {
                set_status(FormStatus::Sent);
                name_el.set_value("");
                email_el.set_value("");
                message_el.set_value("");
                set_timeout(
                    move || set_status(FormStatus::Idle),
                    Duration::from_secs(5),
                );
            },
            Duration::from_secs(1),
        );
    };

    view! {
        <div class="bg-panel p-8 rounded-lg border border-gray-800">
            <h3 class="text-2xl font-bold mb-6">"Send a Message"</h3>

            <form on:submit=on_submit>
                <div class="mb-4">
                    <label for="name" class="block text-sm font-medium text-gray-400 mb-2">
                        "Your Name"
                    </label>
                    <input
                        node_ref=name_ref
                        type="text"
                        id="name"
                        name="name"
                        required
                        class="w-full bg-panel-deep border border-gray-700 rounded-md py-2 px-4 text-white focus:outline-none focus:ring-2 focus:ring-electric-cyan focus:border-transparent"
                    />
                </div>

                <div class="mb-4">
                    <label for="email" class="block text-sm font-medium text-gray-400 mb-2">
                        "Your Email"
                    </label>
                    <input
                        node_ref=email_ref
                        type="email"
                        id="email"
                        name="email"
                        required
                        class="w-full bg-panel-deep border border-gray-700 rounded-md py-2 px-4 text-white focus:outline-none focus:ring-2 focus:ring-electric-cyan focus:border-transparent"
                    />
                </div>

                <div class="mb-6">
                    <label for="message" class="block text-sm font-medium text-gray-400 mb-2">
                        "Your Message"
                    </label>
                    <textarea
                        node_ref=message_ref
                        id="message"
                        name="message"
                        rows=5
                        required
                        class="w-full bg-panel-deep border border-gray-700 rounded-md py-2 px-4 text-white focus:outline-none focus:ring-2 focus:ring-electric-cyan focus:border-transparent"
                    ></textarea>
                </div>

                {move || match status.get() {
                    FormStatus::Idle => None,
                    FormStatus::Sent => {
                        Some(
                            view! {
                                <div class="mb-4 p-3 rounded-md bg-green-900/30 text-green-400 border border-green-800">
                                    "Your message has been sent successfully!"
                                </div>
                            }
                                .into_any(),
                        )
                    }
                    FormStatus::Invalid(problem) => {
                        Some(
                            view! {
                                <div class="mb-4 p-3 rounded-md bg-red-900/30 text-red-400 border border-red-800">
                                    {problem}
                                </div>
                            }
                                .into_any(),
                        )
                    }
                }}

                <button
                    type="submit"
                    class="w-full bg-electric-cyan text-neural-blue font-medium py-2 px-4 rounded-md hover:bg-electric-cyan/90 transition-colors duration-300"
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_message() {
        assert!(validate_message("Om", "om@example.com", "hello there").is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(validate_message("", "om@example.com", "hi").is_err());
        assert!(validate_message("Om", "", "hi").is_err());
        assert!(validate_message("Om", "om@example.com", "   ").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        assert!(validate_message("Om", "not-an-email", "hi").is_err());
        assert!(validate_message("Om", "@example.com", "hi").is_err());
        assert!(validate_message("Om", "om@", "hi").is_err());
    }

    #[test]
    fn test_local_time_formats_as_clock_time() {
        let time = local_time_now();
        // e.g. "03:05 PM"
        assert_eq!(time.len(), 8);
        assert!(time.ends_with("AM") || time.ends_with("PM"));
    }
}
