//! Timer utilities for the contact form.
//!
//! This module provides a one-shot timer that is cancelled when its handle is
//! dropped, so scheduled work never outlives its owner.

pub mod scoped_timer;

pub use scoped_timer::ScopedTimer;
