//! Data structures backing the business profile.
//!
//! Every field is optional on disk. A field with the wrong shape deserializes
//! as absent and a malformed element inside a list is skipped, so a partially
//! broken profile still loads. Display accessors substitute placeholders.

use serde::Deserialize;
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnError, VecSkipError};

use super::defaults::{DEFAULT_BUSINESS_NAME, DEFAULT_BUSINESS_TYPE, DEFAULT_TAGLINE};

/// Static description of the business the assistant answers for.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    #[serde(rename = "business_name")]
    #[serde_as(as = "DefaultOnError")]
    pub name: Option<String>,
    #[serde(rename = "business_type")]
    #[serde_as(as = "DefaultOnError")]
    pub kind: Option<String>,
    /// Short `name` key; only consulted when `business_name` is unusable.
    #[serde(rename = "name")]
    #[serde_as(as = "DefaultOnError")]
    pub short_name: Option<String>,
    /// Short `type` key; only consulted when `business_type` is unusable.
    #[serde(rename = "type")]
    #[serde_as(as = "DefaultOnError")]
    pub short_kind: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub tagline: Option<String>,
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub services: Vec<Service>,
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub products: Vec<Product>,
    /// Label -> value, kept in file order.
    #[serde_as(as = "DefaultOnError")]
    pub contact: Map<String, Value>,
    #[serde_as(as = "DefaultOnError")]
    pub business_hours: Option<BusinessHours>,
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub faqs: Vec<Faq>,
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub testimonials: Vec<Testimonial>,
}

impl BusinessProfile {
    /// Builds a profile from an already-parsed JSON document.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn name(&self) -> &str {
        non_empty(&self.name)
            .or_else(|| non_empty(&self.short_name))
            .unwrap_or(DEFAULT_BUSINESS_NAME)
    }

    pub fn kind(&self) -> &str {
        non_empty(&self.kind)
            .or_else(|| non_empty(&self.short_kind))
            .unwrap_or(DEFAULT_BUSINESS_TYPE)
    }

    pub fn tagline(&self) -> &str {
        non_empty(&self.tagline).unwrap_or(DEFAULT_TAGLINE)
    }

    /// Contact entries in insertion order with values rendered as text.
    pub fn contact_entries(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.contact
            .iter()
            .map(|(label, value)| (label.as_str(), display_value(value)))
    }

    /// Business hours, when at least one of the two ranges is known.
    pub fn hours(&self) -> Option<&BusinessHours> {
        self.business_hours
            .as_ref()
            .filter(|hours| hours.weekdays.is_some() || hours.weekends.is_some())
    }

    /// First product (profile order) that carries a delivery estimate.
    pub fn first_product_with_delivery(&self) -> Option<&Product> {
        self.products.iter().find(|product| product.delivery.is_some())
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde_as(as = "DefaultOnError")]
    pub name: Option<String>,
    /// Usually currency-prefixed text such as `₹2,500`; kept raw so numbers
    /// still show up in listings.
    pub price: Option<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub delivery_time: Option<String>,
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub features: Vec<String>,
}

impl Service {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Service")
    }

    pub fn display_price(&self) -> String {
        match &self.price {
            None | Some(Value::Null) => "Contact for price".into(),
            Some(value) => display_value(value),
        }
    }

    pub fn display_delivery_time(&self) -> &str {
        self.delivery_time.as_deref().unwrap_or("Contact for time")
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde_as(as = "DefaultOnError")]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub price: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub stock: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub delivery: Option<String>,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Product")
    }

    pub fn display_price(&self) -> &str {
        self.price.as_deref().unwrap_or("₹0")
    }

    pub fn display_stock(&self) -> &str {
        self.stock.as_deref().unwrap_or("In stock")
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    #[serde_as(as = "DefaultOnError")]
    pub weekdays: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub weekends: Option<String>,
}

impl BusinessHours {
    pub fn display_weekdays(&self) -> &str {
        self.weekdays.as_deref().unwrap_or("Not listed")
    }

    pub fn display_weekends(&self) -> &str {
        self.weekends.as_deref().unwrap_or("Not listed")
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Faq {
    #[serde_as(as = "DefaultOnError")]
    pub question: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub answer: Option<String>,
}

impl Faq {
    /// Blank answers count as missing so a matched FAQ never yields empty text.
    pub fn display_answer(&self) -> &str {
        non_empty(&self.answer).unwrap_or("Please contact us for details.")
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde_as(as = "DefaultOnError")]
    pub review: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub business: Option<String>,
}

impl Testimonial {
    pub fn display_review(&self) -> &str {
        self.review.as_deref().unwrap_or_default()
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Customer")
    }

    pub fn display_business(&self) -> &str {
        self.business.as_deref().unwrap_or("Business")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "Not listed".into(),
        other => other.to_string(),
    }
}
