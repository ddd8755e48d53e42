//! Action resolution for tile commands.
//!
//! Every tile command runs through the same two steps: a guard chain that
//! either clears the action or names the first rule it breaks, and a handler
//! that applies the change and builds the [`ActionReport`].
//!
//! # Submodules
//!
//! - [`costs`] -- Default money cost and experience per action.
//! - [`handlers`] -- Execution logic for each tile action.
//! - [`messages`] -- Human-readable report messages.
//! - [`validation`] -- The ordered guard chain per action.
//!
//! [`ActionReport`]: furrow_types::ActionReport

pub mod costs;
pub mod handlers;
pub mod messages;
pub mod validation;
