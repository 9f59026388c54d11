//! # gainmap-transfer
//!
//! Transfer functions (OETF / inverse OETF) used by gain map encode and decode.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **Inverse OETF**: Encoded -> Linear
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Linear range |
//! |----------|----------|--------------|
//! | [`srgb`] | SDR base image | [0, 1] |
//! | [`hlg`] | HDR broadcast (HLG) | [0, 1] |
//! | [`pq`] | HDR10 (PQ) | [0, 10000] cd/m2 |
//!
//! Every scalar function has a [`Color`](gainmap_core::Color) counterpart
//! suffixed `_color` that applies it per channel.
//!
//! # Usage
//!
//! ```rust
//! use gainmap_core::Color;
//! use gainmap_transfer::{hlg, srgb, HdrTransfer};
//!
//! let linear = srgb::inv_oetf(0.5);
//! let signal = hlg::oetf(0.25);
//!
//! let hdr = HdrTransfer::Hlg.inv_oetf(Color::splat(0.75));
//! ```
//!
//! All constants are the published f32 values; evaluation is in f32.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hlg;
pub mod pq;
pub mod srgb;
mod hdr;

pub use hdr::HdrTransfer;

pub use hlg::{inv_oetf as hlg_inv_oetf, oetf as hlg_oetf};
pub use pq::{inv_oetf as pq_inv_oetf, oetf as pq_oetf};
pub use srgb::inv_oetf as srgb_inv_oetf;
