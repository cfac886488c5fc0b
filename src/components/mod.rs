//! UI Components for the Pro-Active Therapy site.
//!
//! # Layout Components
//! - [`Hero`] - Landing hero: identity, headline, CTAs, trust signals, media

mod hero;

pub use hero::*;
