//! Hero section component.
//!
//! Landing hero for the clinic site: identity row, headline, booking and
//! call CTAs, trust signals, and the background media panel. Default copy
//! lives in [`HERO_CONTENT`]; callers can override individual fields
//! through props and every missing prop falls back to the default.

use leptos::*;

use crate::config::{BusinessInfo, BUSINESS, CONTACT_FALLBACK_PATH};

// =============================================================================
// Static content
// =============================================================================

/// Default hero copy and imagery.
///
/// One instance, [`HERO_CONTENT`], built at compile time. Rendering never
/// mutates it; per-render values are derived in [`EffectiveContent`].
#[derive(Clone, Debug)]
pub struct HeroContent {
    /// Logo image URL.
    pub logo: &'static str,
    /// Alt text for the logo (not overridable).
    pub logo_alt: &'static str,
    /// Business name shown next to the logo.
    pub business_name: &'static str,
    /// Primary headline.
    pub tagline: &'static str,
    /// Supporting paragraph under the headline.
    pub description: &'static str,
    /// Primary call-to-action label.
    pub cta_text: &'static str,
    /// Primary call-to-action target, derived from the booking URL.
    pub cta_url: &'static str,
    /// Label for the secondary phone action.
    pub phone_cta_text: &'static str,
    /// Background image URL for the media panel.
    pub background_image: &'static str,
    /// Alt text for the background image (not overridable).
    pub background_image_alt: &'static str,
}

/// Default primary CTA target for a business configuration.
///
/// The external booking flow when one is configured, else the contact page.
const fn default_cta_url(business: &BusinessInfo) -> &'static str {
    match business.booking_url {
        Some(url) => url,
        None => CONTACT_FALLBACK_PATH,
    }
}

/// Static hero configuration for the deployed site.
pub const HERO_CONTENT: HeroContent = HeroContent {
    logo: "/uploads/Pro-Active-Therapy.gif",
    logo_alt: "Pro-Active Therapy Logo",
    business_name: "Pro-Active Therapy",
    tagline: "Move Better, Feel Better, Live Better",
    description: "Expert physiotherapy care tailored to your recovery journey. \
         Our experienced team combines evidence-based treatment with personalized \
         care to help you achieve optimal movement and wellness.",
    cta_text: "Book Appointment",
    cta_url: default_cta_url(&BUSINESS),
    phone_cta_text: "Call Now",
    background_image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=1920&h=1080&fit=crop&q=80",
    background_image_alt: "Modern physiotherapy treatment room with exercise equipment",
};

/// Trust signals under the CTA row. Fixed copy, not overridable.
const TRUST_SIGNALS: [&str; 3] = [
    "Licensed Professionals",
    "Evidence-Based Care",
    "Personalized Treatment",
];

/// Check-circle glyph path shown next to each trust signal.
const CHECK_GLYPH: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 \
     00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z";

// =============================================================================
// Content resolution
// =============================================================================

/// Caller overrides for [`Hero`].
///
/// `None` means "use the [`HERO_CONTENT`] default". Mirrors the component's
/// optional props minus `class`, which never reaches the content layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeroOverrides {
    pub logo: Option<String>,
    pub business_name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub cta_url: Option<String>,
    pub background_image: Option<String>,
}

/// Display values for a single render, after merging overrides with defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveContent {
    pub logo: String,
    pub business_name: String,
    pub tagline: String,
    pub description: String,
    pub cta_text: String,
    pub cta_url: String,
    pub background_image: String,
}

impl EffectiveContent {
    /// Field-wise coalesce of caller overrides and static defaults.
    ///
    /// Pure and total: every field has a default, so this cannot fail.
    /// Recomputed on every render, never cached.
    pub fn resolve(overrides: HeroOverrides) -> Self {
        fn or_default(value: Option<String>, default: &str) -> String {
            value.unwrap_or_else(|| default.to_string())
        }

        Self {
            logo: or_default(overrides.logo, HERO_CONTENT.logo),
            business_name: or_default(overrides.business_name, HERO_CONTENT.business_name),
            tagline: or_default(overrides.tagline, HERO_CONTENT.tagline),
            description: or_default(overrides.description, HERO_CONTENT.description),
            cta_text: or_default(overrides.cta_text, HERO_CONTENT.cta_text),
            cta_url: or_default(overrides.cta_url, HERO_CONTENT.cta_url),
            background_image: or_default(overrides.background_image, HERO_CONTENT.background_image),
        }
    }
}

/// `tel:` target for the call action, if the business lists a phone.
///
/// Returns `None` when no phone is configured; the call button is then
/// omitted entirely (no placeholder, no disabled state).
fn phone_action(business: &BusinessInfo) -> Option<String> {
    business.phone.map(phone_href)
}

/// Builds a `tel:` link from a free-form phone string.
///
/// Keeps ASCII digits and at most one leading `+`; drops everything else.
/// The number is not validated - garbage in produces a dead but harmless
/// link target.
fn phone_href(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && cleaned.is_empty()) {
            cleaned.push(c);
        }
    }
    format!("tel:{}", cleaned)
}

/// Joins the base section class with caller-provided extras.
fn section_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("hero {}", extra),
        _ => "hero".to_string(),
    }
}

// =============================================================================
// Component
// =============================================================================

/// Hero section for the Pro-Active Therapy landing page.
///
/// Renders five regions in fixed order: identity (logo + name), headline,
/// actions (booking CTA plus an optional call CTA), trust signals, and the
/// background media panel. All props are optional overrides.
#[component]
pub fn Hero(
    /// Override logo image URL.
    #[prop(optional)]
    logo: Option<String>,
    /// Override business name.
    #[prop(optional)]
    business_name: Option<String>,
    /// Override tagline headline.
    #[prop(optional)]
    tagline: Option<String>,
    /// Override description paragraph.
    #[prop(optional)]
    description: Option<String>,
    /// Override CTA button text.
    #[prop(optional)]
    cta_text: Option<String>,
    /// Override CTA button URL.
    #[prop(optional)]
    cta_url: Option<String>,
    /// Override background image.
    #[prop(optional)]
    background_image: Option<String>,
    /// Additional CSS classes for the section.
    #[prop(optional)]
    class: Option<String>,
) -> impl IntoView {
    let EffectiveContent {
        logo,
        business_name,
        tagline,
        description,
        cta_text,
        cta_url,
        background_image,
    } = EffectiveContent::resolve(HeroOverrides {
        logo,
        business_name,
        tagline,
        description,
        cta_text,
        cta_url,
        background_image,
    });
    let phone_link = phone_action(&BUSINESS);

    view! {
        <section class=section_class(class.as_deref())>
            <div class="hero-card">
                // Left column - copy and actions
                <div class="hero-body">
                    // Identity: logo + business name
                    <div class="hero-identity fade-in-up">
                        <img class="hero-logo" src=logo alt=HERO_CONTENT.logo_alt/>
                        <span class="hero-business-name">{business_name}</span>
                    </div>

                    // Headline: tagline + supporting description
                    <div class="hero-headline fade-in-up delay-1">
                        <h1>{tagline}</h1>
                        <p>{description}</p>
                    </div>

                    // Actions: booking CTA, plus a call CTA when a phone is configured
                    <div class="hero-actions fade-in-up delay-2">
                        <a class="btn btn-primary" href=cta_url>
                            {cta_text}
                            <span class="btn-arrow" aria-hidden="true">"→"</span>
                        </a>
                        {phone_link.map(|href| view! {
                            <a class="btn btn-phone" href=href>
                                <span aria-hidden="true">"📞 "</span>
                                {HERO_CONTENT.phone_cta_text}
                            </a>
                        })}
                    </div>

                    // Trust signals
                    <div class="hero-trust fade-in-up delay-3">
                        {TRUST_SIGNALS
                            .into_iter()
                            .map(|signal| view! {
                                <div class="trust-item">
                                    <svg class="trust-check" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
                                        <path fill-rule="evenodd" clip-rule="evenodd" d=CHECK_GLYPH/>
                                    </svg>
                                    <span>{signal}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                // Right column - background image with overlay and decoration
                <div class="hero-media">
                    <img
                        class="hero-media-image"
                        src=background_image
                        alt=HERO_CONTENT.background_image_alt
                    />
                    <div class="hero-media-overlay"></div>
                    <div class="hero-ornament" aria-hidden="true">
                        <div class="ornament-ring"></div>
                        <div class="ornament-ring"></div>
                        <div class="ornament-ring"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_no_overrides() {
        let resolved = EffectiveContent::resolve(HeroOverrides::default());

        assert_eq!(resolved.logo, HERO_CONTENT.logo);
        assert_eq!(resolved.business_name, HERO_CONTENT.business_name);
        assert_eq!(resolved.tagline, HERO_CONTENT.tagline);
        assert_eq!(resolved.description, HERO_CONTENT.description);
        assert_eq!(resolved.cta_text, HERO_CONTENT.cta_text);
        assert_eq!(resolved.cta_url, HERO_CONTENT.cta_url);
        assert_eq!(resolved.background_image, HERO_CONTENT.background_image);
    }

    #[test]
    fn test_resolve_prefers_overrides() {
        let resolved = EffectiveContent::resolve(HeroOverrides {
            logo: Some("/img/alt-logo.png".to_string()),
            business_name: Some("Harbour Physio".to_string()),
            tagline: Some("Stronger Every Day".to_string()),
            description: Some("Hands-on rehab for athletes.".to_string()),
            cta_text: Some("Get Started".to_string()),
            cta_url: Some("https://example.com/book".to_string()),
            background_image: Some("/img/clinic.jpg".to_string()),
        });

        assert_eq!(resolved.logo, "/img/alt-logo.png");
        assert_eq!(resolved.business_name, "Harbour Physio");
        assert_eq!(resolved.tagline, "Stronger Every Day");
        assert_eq!(resolved.description, "Hands-on rehab for athletes.");
        assert_eq!(resolved.cta_text, "Get Started");
        assert_eq!(resolved.cta_url, "https://example.com/book");
        assert_eq!(resolved.background_image, "/img/clinic.jpg");
    }

    #[test]
    fn test_resolve_merges_partial_overrides() {
        let resolved = EffectiveContent::resolve(HeroOverrides {
            tagline: Some("Recover Faster".to_string()),
            ..Default::default()
        });

        assert_eq!(resolved.tagline, "Recover Faster");
        assert_eq!(resolved.business_name, HERO_CONTENT.business_name);
        assert_eq!(resolved.cta_url, HERO_CONTENT.cta_url);
    }

    #[test]
    fn test_resolve_honors_empty_string_overrides() {
        // An explicitly empty override is still an override.
        let resolved = EffectiveContent::resolve(HeroOverrides {
            description: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(resolved.description, "");
    }

    #[test]
    fn test_phone_href_strips_formatting() {
        assert_eq!(phone_href("(555) 123-4567"), "tel:5551234567");
    }

    #[test]
    fn test_phone_href_keeps_single_leading_plus() {
        assert_eq!(phone_href("+1 (555) 123-4567"), "tel:+15551234567");
        // A plus after the first digit is formatting noise, not a prefix.
        assert_eq!(phone_href("55+5 12"), "tel:55512");
        assert_eq!(phone_href("++1"), "tel:+1");
    }

    #[test]
    fn test_phone_href_passes_garbage_through_harmlessly() {
        assert_eq!(phone_href("call us!"), "tel:");
    }

    #[test]
    fn test_phone_action_present_iff_phone_configured() {
        let with_phone = BusinessInfo {
            phone: Some("+1 (555) 000-1111"),
            booking_url: None,
        };
        let href = phone_action(&with_phone).expect("phone action should render");
        assert_eq!(href, "tel:+15550001111");

        let tail = href.strip_prefix("tel:").unwrap();
        let digits = tail.strip_prefix('+').unwrap_or(tail);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));

        let without_phone = BusinessInfo {
            phone: None,
            booking_url: None,
        };
        assert_eq!(phone_action(&without_phone), None);
    }

    #[test]
    fn test_default_cta_url_prefers_booking_link() {
        let business = BusinessInfo {
            phone: None,
            booking_url: Some("https://book.example.com"),
        };
        assert_eq!(default_cta_url(&business), "https://book.example.com");
    }

    #[test]
    fn test_default_cta_url_falls_back_to_contact_page() {
        let business = BusinessInfo {
            phone: None,
            booking_url: None,
        };
        assert_eq!(default_cta_url(&business), CONTACT_FALLBACK_PATH);
        assert_eq!(CONTACT_FALLBACK_PATH, "/contact");
    }

    #[test]
    fn test_hero_content_cta_targets_booking_flow() {
        // The deployed config has a booking URL, so the static default
        // must point at it.
        assert_eq!(Some(HERO_CONTENT.cta_url), BUSINESS.booking_url);
    }

    #[test]
    fn test_trust_signals_are_exactly_three_fixed_claims() {
        assert_eq!(TRUST_SIGNALS.len(), 3);
        assert_eq!(
            TRUST_SIGNALS,
            [
                "Licensed Professionals",
                "Evidence-Based Care",
                "Personalized Treatment",
            ]
        );
    }

    #[test]
    fn test_section_class_merging() {
        assert_eq!(section_class(None), "hero");
        assert_eq!(section_class(Some("home-hero")), "hero home-hero");
        assert_eq!(section_class(Some("")), "hero");
    }
}
