//! Host lifecycle bindings for the `windower` crate.
//!
//! The `windower` crate is UI-agnostic and only does the windowing math. This crate covers the
//! part every adapter needs next to it: attaching a list to a scroll container.
//!
//! - [`ScrollHost`]: the trait a UI runtime implements (measurements, scroll position,
//!   scroll/resize subscriptions)
//! - [`mount`]: measures the container and acquires both subscriptions, returning a
//!   [`Mounted`] guard
//! - [`Mounted`]: routes [`HostEvent`]s into the windower and releases the subscriptions
//!   exactly once when dropped, including when `mount` itself fails halfway
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod host;
mod mount;

#[cfg(test)]
mod tests;

pub use error::MountError;
pub use host::{HostEvent, ScrollHost};
pub use mount::{Mounted, mount};
