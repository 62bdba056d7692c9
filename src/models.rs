//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The [`twine_core::Model`]
//! implementations are thin adapters that validate a request, resolve a cable,
//! and delegate to the model-specific core API. A single `core` is exposed
//! through several adapters.

pub mod thermal;
