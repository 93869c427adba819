use faqdesk::chat::responder::{respond, respond_with, Category};
use faqdesk::chat::templates::{fallback_templates, greeting_templates};
use serde_json::json;

use crate::support::profile_fixture::{profile_from, sample_profile, seeded_rng};

#[test]
fn greetings_pick_a_fixed_template_with_business_name() {
    let profile = sample_profile();
    let templates = greeting_templates(&profile);
    for (seed, query) in ["hi", "Hello there", "HEY!", "Namaste ji"].iter().enumerate() {
        let reply = respond_with(query, &profile, &mut seeded_rng(seed as u64));
        assert_eq!(reply.category, Category::Greeting, "query {query:?}");
        assert!(templates.contains(&reply.text), "unexpected greeting {:?}", reply.text);
        assert!(reply.text.contains("Sharma Digital Studio"));
    }
}

#[test]
fn services_are_listed_in_profile_order() {
    let reply = respond_with(
        "What services do you offer?",
        &sample_profile(),
        &mut seeded_rng(1),
    );
    assert_eq!(reply.category, Category::Services);
    assert_eq!(
        reply.text,
        "**Our Services:**\n\n\
         • **Basic Chatbot** - ₹2,500 (Delivery: 24 hours)\n\
         • **Landing Page** - ₹15,000 (Delivery: 5 days)\n\
         • **Logo Design** - ₹1,200 (Delivery: Contact for time)\n"
    );
}

#[test]
fn pricing_reports_grouped_minimum() {
    let reply = respond_with(
        "How much does a website cost?",
        &sample_profile(),
        &mut seeded_rng(2),
    );
    assert_eq!(reply.category, Category::Pricing);
    assert_eq!(
        reply.text,
        "Our services start from **₹1,200**. Which service are you interested in?"
    );
}

#[test]
fn pricing_ignores_unparsable_prices() {
    let profile = profile_from(json!({
        "services": [
            {"name": "Chatbot", "price": "₹2,500"},
            {"name": "Custom", "price": "abc"},
            {"name": "Audit", "price": "₹999"}
        ]
    }));
    let reply = respond_with("price?", &profile, &mut seeded_rng(3));
    assert_eq!(reply.category, Category::Pricing);
    assert!(reply.text.contains("**₹999**"), "{}", reply.text);
}

#[test]
fn products_show_name_and_price() {
    let reply = respond_with("Show me your products", &sample_profile(), &mut seeded_rng(4));
    assert_eq!(reply.category, Category::Products);
    assert_eq!(
        reply.text,
        "**Our Products:**\n\n• **Chatbot Template Pack** - ₹999\n• **Brand Kit** - ₹1,999\n"
    );
}

#[test]
fn contact_labels_are_title_cased_in_insertion_order() {
    let profile = profile_from(json!({
        "contact": {"phone": "1800-123-4567", "email": "x@y.com"}
    }));
    let reply = respond_with("How can I contact you?", &profile, &mut seeded_rng(5));
    assert_eq!(reply.category, Category::Contact);
    assert_eq!(
        reply.text,
        "**Contact Information:**\n• **Phone**: 1800-123-4567\n• **Email**: x@y.com\n"
    );
}

#[test]
fn product_delivery_takes_precedence_over_hours() {
    let profile = profile_from(json!({
        "products": [{"name": "Logo", "delivery": "3 days"}],
        "business_hours": {"weekdays": "9-5", "weekends": "Closed"}
    }));
    let reply = respond_with("How long will it take?", &profile, &mut seeded_rng(6));
    assert_eq!(reply.category, Category::Delivery);
    assert_eq!(reply.text, "Delivery for Logo: 3 days");
}

#[test]
fn faq_question_inside_query_matches() {
    let reply = respond_with(
        "what is your refund policy please",
        &sample_profile(),
        &mut seeded_rng(7),
    );
    assert_eq!(reply.category, Category::Faq);
    assert_eq!(reply.text, "Full refund within 7 days of delivery.");
}

#[test]
fn keyword_matching_ignores_case_but_keeps_profile_casing() {
    let reply = respond_with("SERVICES PLEASE", &sample_profile(), &mut seeded_rng(8));
    assert_eq!(reply.category, Category::Services);
    assert!(reply.text.contains("**Basic Chatbot**"));
}

#[test]
fn every_query_gets_a_non_empty_reply() {
    let profile = sample_profile();
    for query in [
        "",
        "   ",
        "?",
        "zzz",
        "hi",
        "what do you do",
        "rate card",
        "buy",
        "reach",
        "time",
        "payment methods accepted?",
        "ünïcödé ₹",
    ] {
        assert!(!respond(query, &profile).is_empty(), "empty reply for {query:?}");
    }
}

#[test]
fn degenerate_profiles_still_give_non_empty_replies() {
    let profiles = [
        json!({}),
        json!({"business_name": "", "business_type": "  "}),
        json!({"faqs": [{"question": "refund", "answer": ""}]}),
        json!({"faqs": [{"question": "refund", "answer": "   "}, {"question": ""}]}),
        json!({"services": [{}], "products": [{}], "contact": {"phone": ""}}),
        json!({"services": [{"price": 0}], "business_hours": {}}),
        json!({"products": [{"delivery": ""}], "testimonials": [null]}),
    ];
    let queries = ["refund?", "hi", "services", "price", "products", "call", "delivery", "zzz"];
    for document in profiles {
        let profile = profile_from(document.clone());
        for query in queries {
            let reply = respond_with(query, &profile, &mut seeded_rng(11));
            assert!(
                !reply.text.trim().is_empty(),
                "empty reply for {query:?} with {document}"
            );
        }
    }
}

#[test]
fn blank_faq_answer_gets_placeholder() {
    let profile = profile_from(json!({"faqs": [{"question": "refund", "answer": ""}]}));
    let reply = respond_with("refund?", &profile, &mut seeded_rng(12));
    assert_eq!(reply.category, Category::Faq);
    assert_eq!(reply.text, "Please contact us for details.");
}

#[test]
fn same_query_lands_in_same_category() {
    let profile = sample_profile();
    for query in [
        "hello",
        "What services do you offer?",
        "How much?",
        "Show me your products",
        "phone number",
        "delivery",
        "refund policy",
        "tell me a joke",
    ] {
        let first = respond_with(query, &profile, &mut seeded_rng(10));
        let second = respond_with(query, &profile, &mut seeded_rng(99));
        assert_eq!(first.category, second.category, "query {query:?}");
    }
}

#[test]
fn default_reply_is_a_fallback_template() {
    let profile = sample_profile();
    let templates = fallback_templates(&profile);
    for seed in 0..20 {
        let reply = respond_with("tell me a joke", &profile, &mut seeded_rng(seed));
        assert_eq!(reply.category, Category::Default);
        assert!(templates.contains(&reply.text));
    }
}
