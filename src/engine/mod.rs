//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates evaluation by coordinating between primitives
//! (units, errors) and the model layer. It provides the validate-once
//! construction contract and the shared normalize → range-check → evaluate
//! pipeline.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Models
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter and domain validation utilities.
pub mod validator;

/// The shared extinction model evaluation contract.
pub mod model;
