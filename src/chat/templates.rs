//! Fixed reply templates and the helpers that fill them in.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::profile::BusinessProfile;

pub fn greeting_templates(profile: &BusinessProfile) -> Vec<String> {
    let name = profile.name();
    vec![
        format!("Hello! Welcome to {name}! How can I help? 🤗"),
        format!("Hi there! I'm your AI assistant for {name}. What can I do for you?"),
        format!("Welcome to {name}! Ready to assist you!"),
    ]
}

pub fn fallback_templates(profile: &BusinessProfile) -> Vec<String> {
    let name = profile.name();
    let kind = profile.kind();
    vec![
        format!(
            "I can help you with information about {name}. Try asking about our services, products, or contact details!"
        ),
        format!("Looking for information about {kind} services? I'm here to help!"),
        "Great question! Could you be more specific so I can assist you better?".into(),
        format!("Visit {name}'s website or contact us directly for detailed assistance."),
    ]
}

/// Opening assistant message for a new conversation.
pub fn welcome_message(profile: &BusinessProfile) -> String {
    format!(
        "Hello! I'm your AI assistant for **{}**. I can help with:\n• Service information\n• Product details\n• Pricing\n• Contact info\n\nHow can I assist you today? 😊",
        profile.name()
    )
}

/// Uniform choice among `templates`; empty input yields an empty string.
pub fn pick<'a>(templates: &'a [String], rng: &mut dyn RngCore) -> &'a str {
    templates
        .choose(rng)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Capitalizes the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(label: &str) -> String {
    let mut titled = String::with_capacity(label.len());
    let mut in_word = false;
    for ch in label.chars() {
        if ch.is_alphabetic() {
            if in_word {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            titled.push(ch);
            in_word = false;
        }
    }
    titled
}
