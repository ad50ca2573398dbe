//! # fondra
//!
//! Fund performance and factor decomposition analytics.
//!
//! This crate provides a unified interface to the fondra analytics
//! ecosystem. Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `traits`: Trait abstractions
//! - `math`: Statistical and linear algebra kernels
//! - `metrics`: Performance and risk metrics
//! - `assets`: Fund, benchmark and factor types
//! - `dataset`: Factor dataset assembly
//! - `model`: PCA and regression pipeline
//!
//! ## Example
//!
//! ```rust,ignore
//! // With default features (all components):
//! use fondra::metrics;
//! use fondra::model;
//!
//! // Or with specific features only:
//! // [dependencies]
//! // fondra = { version = "0.1", default-features = false, features = ["metrics"] }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use fondra_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use fondra_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use fondra_math as math;
#[cfg(feature = "metrics")]
#[doc(inline)]
pub use fondra_metrics as metrics;
#[cfg(feature = "assets")]
#[doc(inline)]
pub use fondra_assets as assets;
#[cfg(feature = "dataset")]
#[doc(inline)]
pub use fondra_dataset as dataset;
#[cfg(feature = "model")]
#[doc(inline)]
pub use fondra_model as model;
