//! Application configuration.
//!
//! Centralized configuration for the Pro-Active Therapy frontend.
//! These values are hardcoded for the single-clinic deployment. A
//! multi-tenant build would load them from environment or a config file.

/// Site name for the page title and startup logs.
pub const APP_NAME: &str = "Pro-Active Therapy";

/// Meta description for the landing page.
///
/// Shown by search engines and link previews.
pub const PAGE_DESCRIPTION: &str = "Expert physiotherapy care from licensed professionals. \
     Book an assessment and start your recovery journey.";

/// Where the primary call-to-action points when no booking URL is configured.
pub const CONTACT_FALLBACK_PATH: &str = "/contact";

/// Business contact details consumed by the UI.
///
/// Read-only at render time. Optional fields simply remove the
/// corresponding UI affordance (no phone, no call button).
#[derive(Clone, Debug, PartialEq)]
pub struct BusinessInfo {
    /// Free-form display phone number, as the clinic publishes it.
    pub phone: Option<&'static str>,
    /// External online-booking URL (scheduling provider).
    pub booking_url: Option<&'static str>,
}

/// Contact details for the deployed clinic.
pub const BUSINESS: BusinessInfo = BusinessInfo {
    phone: Some("(555) 123-4567"),
    booking_url: Some("https://proactivetherapy.janeapp.com"),
};
