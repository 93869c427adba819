//! Keyword rule engine that turns a customer query into a reply.
//!
//! Rules are evaluated in a fixed order. A rule fires when its trigger matches
//! the lowercased query and its renderer finds usable profile data; a rule
//! whose trigger matches but whose data is missing cedes to the next rule.
//! When nothing fires, a generic fallback template is chosen.

use rand::RngCore;
use serde::Serialize;
use std::fmt::Write as _;

use crate::chat::templates::{fallback_templates, greeting_templates, pick, title_case};
use crate::profile::pricing::{format_amount, starting_price};
use crate::profile::BusinessProfile;

pub const GREETING_KEYWORDS: &[&str] = &["hi", "hello", "hey", "namaste"];
pub const SERVICE_KEYWORDS: &[&str] = &["service", "offer", "provide", "what do you do"];
pub const PRICING_KEYWORDS: &[&str] = &["price", "cost", "how much", "rate"];
pub const PRODUCT_KEYWORDS: &[&str] = &["product", "item", "sell", "buy"];
pub const CONTACT_KEYWORDS: &[&str] = &["contact", "call", "email", "phone", "reach"];
pub const DELIVERY_KEYWORDS: &[&str] = &["delivery", "shipping", "time", "how long"];

/// Number of products listed in a products reply.
const PRODUCT_LISTING_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greeting,
    Services,
    Pricing,
    Products,
    Contact,
    Delivery,
    Faq,
    Default,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Services => "services",
            Category::Pricing => "pricing",
            Category::Products => "products",
            Category::Contact => "contact",
            Category::Delivery => "delivery",
            Category::Faq => "faq",
            Category::Default => "default",
        }
    }
}

/// Reply text together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub category: Category,
    pub text: String,
}

enum Trigger {
    Keywords(&'static [&'static str]),
    Always,
}

impl Trigger {
    fn matches(&self, lowered_query: &str) -> bool {
        match self {
            Trigger::Keywords(keywords) => keywords
                .iter()
                .any(|keyword| lowered_query.contains(keyword)),
            Trigger::Always => true,
        }
    }
}

type Render = fn(&BusinessProfile, &str, &mut dyn RngCore) -> Option<String>;

struct Rule {
    category: Category,
    trigger: Trigger,
    render: Render,
}

const RULES: &[Rule] = &[
    Rule {
        category: Category::Greeting,
        trigger: Trigger::Keywords(GREETING_KEYWORDS),
        render: render_greeting,
    },
    Rule {
        category: Category::Services,
        trigger: Trigger::Keywords(SERVICE_KEYWORDS),
        render: render_services,
    },
    Rule {
        category: Category::Pricing,
        trigger: Trigger::Keywords(PRICING_KEYWORDS),
        render: render_pricing,
    },
    Rule {
        category: Category::Products,
        trigger: Trigger::Keywords(PRODUCT_KEYWORDS),
        render: render_products,
    },
    Rule {
        category: Category::Contact,
        trigger: Trigger::Keywords(CONTACT_KEYWORDS),
        render: render_contact,
    },
    Rule {
        category: Category::Delivery,
        trigger: Trigger::Keywords(DELIVERY_KEYWORDS),
        render: render_delivery,
    },
    Rule {
        category: Category::Faq,
        trigger: Trigger::Always,
        render: render_faq,
    },
];

/// Answers `query` from `profile` using the thread-local random source.
pub fn respond(query: &str, profile: &BusinessProfile) -> String {
    respond_with(query, profile, &mut rand::thread_rng()).text
}

/// Answers `query` from `profile`, drawing template choices from `rng`.
pub fn respond_with(query: &str, profile: &BusinessProfile, rng: &mut dyn RngCore) -> Reply {
    let lowered = query.to_lowercase();
    for rule in RULES {
        if !rule.trigger.matches(&lowered) {
            continue;
        }
        if let Some(text) = (rule.render)(profile, &lowered, rng) {
            return Reply {
                category: rule.category,
                text,
            };
        }
    }
    Reply {
        category: Category::Default,
        text: pick(&fallback_templates(profile), rng).to_string(),
    }
}

fn render_greeting(
    profile: &BusinessProfile,
    _query: &str,
    rng: &mut dyn RngCore,
) -> Option<String> {
    Some(pick(&greeting_templates(profile), rng).to_string())
}

fn render_services(
    profile: &BusinessProfile,
    _query: &str,
    _rng: &mut dyn RngCore,
) -> Option<String> {
    if profile.services.is_empty() {
        return None;
    }
    let mut reply = String::from("**Our Services:**\n\n");
    for service in &profile.services {
        let _ = writeln!(
            reply,
            "• **{}** - {} (Delivery: {})",
            service.display_name(),
            service.display_price(),
            service.display_delivery_time()
        );
    }
    Some(reply)
}

fn render_pricing(
    profile: &BusinessProfile,
    _query: &str,
    _rng: &mut dyn RngCore,
) -> Option<String> {
    let lowest = starting_price(profile)?;
    Some(format!(
        "Our services start from **{}**. Which service are you interested in?",
        format_amount(lowest)
    ))
}

fn render_products(
    profile: &BusinessProfile,
    _query: &str,
    _rng: &mut dyn RngCore,
) -> Option<String> {
    if profile.products.is_empty() {
        return None;
    }
    let mut reply = String::from("**Our Products:**\n\n");
    for product in profile.products.iter().take(PRODUCT_LISTING_LIMIT) {
        let _ = writeln!(
            reply,
            "• **{}** - {}",
            product.display_name(),
            product.display_price()
        );
    }
    Some(reply)
}

fn render_contact(
    profile: &BusinessProfile,
    _query: &str,
    _rng: &mut dyn RngCore,
) -> Option<String> {
    if profile.contact.is_empty() {
        return None;
    }
    let mut reply = String::from("**Contact Information:**\n");
    for (label, value) in profile.contact_entries() {
        let _ = writeln!(reply, "• **{}**: {}", title_case(label), value);
    }
    Some(reply)
}

fn render_delivery(
    profile: &BusinessProfile,
    _query: &str,
    _rng: &mut dyn RngCore,
) -> Option<String> {
    if let Some(product) = profile.first_product_with_delivery() {
        return Some(format!(
            "Delivery for {}: {}",
            product.display_name(),
            product.delivery.as_deref().unwrap_or_default()
        ));
    }
    let hours = profile.hours()?;
    Some(format!(
        "**Business Hours:**\n• Weekdays: {}\n• Weekends: {}",
        hours.display_weekdays(),
        hours.display_weekends()
    ))
}

/// The FAQ question must appear inside the query, not the other way round.
fn render_faq(profile: &BusinessProfile, query: &str, _rng: &mut dyn RngCore) -> Option<String> {
    profile
        .faqs
        .iter()
        .find(|faq| {
            faq.question
                .as_deref()
                .map(str::to_lowercase)
                .filter(|question| !question.is_empty())
                .map(|question| query.contains(&question))
                .unwrap_or(false)
        })
        .map(|faq| faq.display_answer().to_string())
}
