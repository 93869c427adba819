//! Business profile: the read-only data every reply is built from.

pub mod defaults;
pub mod model;
pub mod pricing;
pub mod storage;

pub use defaults::default_profile;
pub use model::{BusinessHours, BusinessProfile, Faq, Product, Service, Testimonial};
pub use pricing::{format_amount, parse_price, starting_price};
pub use storage::{load_or_default, read_profile, ProfileFormat};
