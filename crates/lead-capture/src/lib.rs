//! # lead-capture
//!
//! Contact-form leads enriched with the UTM parameters of the page the
//! visitor landed on, inserted once into a hosted table.
//!
//! ```text
//! ┌──────────────┐   LeadForm + UtmParams   ┌──────────┐  insert  ┌──────────────┐
//! │ contact form │─────────────────────────▶│   Lead   │─────────▶│  LeadStore   │
//! └──────────────┘                          └──────────┘          │ memory │ rest│
//!                                                                 └──────────────┘
//! ```
//!
//! The model and UTM parsing also build for the browser; the stores sit
//! behind the default `store` feature.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lead_capture::{Lead, LeadForm, LeadStore, RestLeadStore, UtmParams};
//!
//! let store = RestLeadStore::from_env()?;
//! let lead = Lead::new(form, UtmParams::from_query("?utm_source=google"))?;
//! let stored = store.insert(lead).await?;
//! ```

mod error;
mod model;
mod utm;

#[cfg(feature = "store")]
mod rest;
#[cfg(feature = "store")]
mod store;

pub use error::{LeadError, Result};
pub use model::{Lead, LeadForm, LeadId};
pub use utm::UtmParams;

#[cfg(feature = "store")]
pub use rest::{RestLeadStore, RestStoreConfig};
#[cfg(feature = "store")]
pub use store::{LeadStore, MemoryLeadStore};
