//! Domain models for content entities.
//!
//! Every content entity maps one-to-one to a table row. Models derive
//! `sqlx::FromRow` for the runtime `query_as` API and `Serialize` so they
//! can be returned from the JSON API directly.

pub mod admin_user;
pub mod blog;
pub mod brand;
pub mod division;
pub mod industry;
pub mod message;
pub mod office;
pub mod quote;
pub mod section;
pub mod service;
pub mod settings;

pub use admin_user::{AdminUser, AdminUserCreate, AdminUserUpdate, CurrentAdmin};
pub use blog::{BlogPost, BlogPostInput};
pub use brand::{Brand, BrandInput};
pub use division::{Division, DivisionInput};
pub use industry::{Industry, IndustryInput};
pub use message::{ContactMessage, ContactMessageInput};
pub use office::{Office, OfficeInput};
pub use quote::{QuoteRequest, QuoteRequestInput};
pub use section::{Section, SectionInput};
pub use service::{Service, ServiceInput};
pub use settings::{Settings, SettingsInput};

/// Serde default helper for `is_active`-style flags.
pub(crate) fn default_true() -> bool {
    true
}
