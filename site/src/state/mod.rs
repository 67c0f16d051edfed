//! Reactive state shared across components

pub mod toast;
pub mod wallet;
