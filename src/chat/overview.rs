//! Plain-text panels summarizing the business next to the chat.

use crate::chat::templates::title_case;
use crate::profile::pricing::{format_amount, starting_price};
use crate::profile::BusinessProfile;

const SERVICE_PREVIEW_LIMIT: usize = 2;
const FEATURE_PREVIEW_LIMIT: usize = 3;
const PRODUCT_PREVIEW_LIMIT: usize = 2;
const TESTIMONIAL_LIMIT: usize = 3;
const DIVIDER: &str = "----------------------------------------";

pub fn about_panel(profile: &BusinessProfile) -> String {
    format!(
        "About {name}\nType: {kind}\nTagline: {tagline}",
        name = profile.name(),
        kind = profile.kind(),
        tagline = profile.tagline()
    )
}

pub fn contact_panel(profile: &BusinessProfile) -> Option<String> {
    if profile.contact.is_empty() {
        return None;
    }
    let lines = profile
        .contact_entries()
        .map(|(label, value)| format!("{}: {}", title_case(label), value))
        .collect::<Vec<String>>()
        .join("\n");
    Some(format!("Contact\n{lines}"))
}

pub fn starting_price_panel(profile: &BusinessProfile) -> Option<String> {
    starting_price(profile).map(|amount| format!("Starting Price: {}", format_amount(amount)))
}

pub fn top_services_panel(profile: &BusinessProfile) -> Option<String> {
    if profile.services.is_empty() {
        return None;
    }
    let mut panel = String::from("Top Services");
    for service in profile.services.iter().take(SERVICE_PREVIEW_LIMIT) {
        panel.push_str(&format!(
            "\n{} - {}",
            service.display_name(),
            service.display_price()
        ));
        for feature in service.features.iter().take(FEATURE_PREVIEW_LIMIT) {
            panel.push_str(&format!("\n  ✓ {feature}"));
        }
    }
    Some(panel)
}

pub fn top_products_panel(profile: &BusinessProfile) -> Option<String> {
    if profile.products.is_empty() {
        return None;
    }
    let mut panel = String::from("Top Products");
    for product in profile.products.iter().take(PRODUCT_PREVIEW_LIMIT) {
        panel.push_str(&format!(
            "\n{}\n  Price: {}\n  Stock: {}",
            product.display_name(),
            product.display_price(),
            product.display_stock()
        ));
    }
    Some(panel)
}

pub fn testimonials_panel(profile: &BusinessProfile) -> Option<String> {
    if profile.testimonials.is_empty() {
        return None;
    }
    let quotes = profile
        .testimonials
        .iter()
        .take(TESTIMONIAL_LIMIT)
        .map(|testimonial| {
            format!(
                "\"{}\"\n  - {}, {}",
                testimonial.display_review(),
                testimonial.display_name(),
                testimonial.display_business()
            )
        })
        .collect::<Vec<String>>()
        .join("\n");
    Some(format!("Customer Testimonials\n{quotes}"))
}

pub fn footer(profile: &BusinessProfile, year: i32) -> String {
    format!("© {year} {}. All rights reserved.", profile.name())
}

pub fn input_hint(profile: &BusinessProfile) -> String {
    format!("Ask about {}...", profile.kind())
}

/// All available panels separated by dividers; empty panels are omitted.
pub fn render_overview(profile: &BusinessProfile) -> String {
    let panels = [
        Some(about_panel(profile)),
        contact_panel(profile),
        starting_price_panel(profile),
        top_services_panel(profile),
        top_products_panel(profile),
        testimonials_panel(profile),
    ];
    panels
        .into_iter()
        .flatten()
        .collect::<Vec<String>>()
        .join(&format!("\n{DIVIDER}\n"))
}
