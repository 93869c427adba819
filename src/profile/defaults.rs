use super::model::BusinessProfile;

pub const DEFAULT_BUSINESS_NAME: &str = "AI Solutions Co.";
pub const DEFAULT_BUSINESS_TYPE: &str = "E-commerce";
pub const DEFAULT_TAGLINE: &str = "Automating Business Solutions";

/// Minimal profile used when no business data could be loaded.
pub fn default_profile() -> BusinessProfile {
    BusinessProfile {
        name: Some(DEFAULT_BUSINESS_NAME.into()),
        kind: Some(DEFAULT_BUSINESS_TYPE.into()),
        ..BusinessProfile::default()
    }
}
