use anyhow::Result;
use faqdesk::chat::responder::{respond_with, Category};
use faqdesk::config::{resolve_profile_path, AppConfig, DEFAULT_PROFILE_FILE_NAME};
use faqdesk::profile::{load_or_default, read_profile};

use crate::support::profile_fixture::{sample_document, seeded_rng};
use crate::IntegrationHarness;

#[test]
fn json_profile_from_disk_answers_queries() -> Result<()> {
    let harness = IntegrationHarness::new();
    let path = harness.write_file(
        DEFAULT_PROFILE_FILE_NAME,
        &serde_json::to_string_pretty(&sample_document())?,
    );
    let profile = read_profile(&path)?;
    assert_eq!(profile.name(), "Sharma Digital Studio");
    assert_eq!(profile.tagline(), "Websites and chatbots for local shops");

    let reply = respond_with("Can I reach you on phone?", &profile, &mut seeded_rng(1));
    assert_eq!(reply.category, Category::Contact);
    assert_eq!(
        reply.text,
        "**Contact Information:**\n\
         • **Phone**: 1800-123-4567\n\
         • **Email**: hello@sharmastudio.in\n\
         • **Whatsapp**: +91 98765 43210\n"
    );
    Ok(())
}

#[test]
fn yaml_profile_keeps_contact_order() -> Result<()> {
    let harness = IntegrationHarness::new();
    let path = harness.write_file(
        "shop.yml",
        "business_name: Ghar Ka Khana\n\
         business_type: Tiffin Service\n\
         contact:\n  \
           email: orders@gkk.in\n  \
           phone: 98200 00000\n\
         business_hours:\n  \
           weekdays: 11 AM - 10 PM\n  \
           weekends: 12 PM - 11 PM\n",
    );
    let profile = read_profile(&path)?;
    let labels: Vec<&str> = profile.contact_entries().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["email", "phone"]);

    let reply = respond_with("delivery timings?", &profile, &mut seeded_rng(2));
    assert_eq!(
        reply.text,
        "**Business Hours:**\n• Weekdays: 11 AM - 10 PM\n• Weekends: 12 PM - 11 PM"
    );
    Ok(())
}

#[test]
fn unreadable_profile_degrades_to_minimal_default() {
    let harness = IntegrationHarness::new();
    let path = harness.write_file(DEFAULT_PROFILE_FILE_NAME, "[not, valid json");
    let profile = load_or_default(Some(&path));
    assert_eq!(profile.name(), "AI Solutions Co.");
    assert_eq!(profile.kind(), "E-commerce");
    assert!(profile.services.is_empty());
    assert!(profile.contact.is_empty());

    let reply = respond_with("what services do you provide", &profile, &mut seeded_rng(3));
    assert_eq!(reply.category, Category::Default);
}

#[test]
fn workspace_profile_is_found_when_nothing_is_configured() {
    let harness = IntegrationHarness::new();
    let config = AppConfig::default();
    assert!(resolve_profile_path(&config, None, harness.workspace_path()).is_none());

    let path = harness.write_file(DEFAULT_PROFILE_FILE_NAME, "{\"business_name\": \"Local\"}");
    let resolved = resolve_profile_path(&config, None, harness.workspace_path());
    assert_eq!(resolved.as_deref(), Some(path.as_path()));
    assert_eq!(load_or_default(resolved.as_deref()).name(), "Local");
}

#[test]
fn profile_with_both_name_keys_keeps_its_data() {
    let harness = IntegrationHarness::new();
    let path = harness.write_file(
        "both_keys.json",
        r#"{
            "business_name": "Sharma",
            "name": "Sharma Studio",
            "type": "Retail",
            "business_type": "Retail",
            "services": [{"name": "Logo Design", "price": "₹1,200"}]
        }"#,
    );
    let profile = load_or_default(Some(&path));
    assert_eq!(profile.name(), "Sharma");
    assert_eq!(profile.kind(), "Retail");
    assert_eq!(profile.services.len(), 1);

    let reply = respond_with("what do you offer", &profile, &mut seeded_rng(5));
    assert_eq!(reply.category, Category::Services);
    assert!(reply.text.contains("• **Logo Design** - ₹1,200"));
}
