//! # Nocturne
//!
//! Darker weather nights: a content patcher that dims the night-time colors
//! of weather records and their volumetric lighting in a resolved load order.
//!
//! ## What gets dimmed
//!
//! - **PNAM** - night color of every cloud layer
//! - **NAM0** - eleven named weather colors (sky, fog, ambient, sunlight, ...)
//! - **DALC** - the night directional ambient block (sides, up, down, specular)
//! - **HNAM** - the night volumetric lighting record, once per shared record
//!
//! Pure black and pure white colors are never touched; they encode "no tint"
//! rather than light.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nocturne::prelude::*;
//!
//! let settings = Settings::load_validated("nocturne.toml")?;
//! let load_order = LoadOrder::load("load_order.json")?;
//!
//! let mut patch = PatchMod::new("Nocturne.esp");
//! let report = WeatherProcessor::new(&settings).run(
//!     load_order.weathers(settings.inclusion),
//!     &load_order,
//!     &mut patch,
//! );
//! println!("{report}");
//! patch.save("nocturne-patch.json")?;
//! # Ok::<(), nocturne::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `nocturne` command-line binary

pub mod color;
pub mod error;
pub mod processor;
pub mod records;
pub mod settings;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::processor::{RunReport, WeatherProcessor};
    pub use crate::records::{
        FormKey, LinkCache, LoadOrder, OverrideTarget, PatchMod, VolumetricLightingRecord,
        WeatherColor, WeatherRecord,
    };
    pub use crate::settings::{Channel, InclusionMode, Settings};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
