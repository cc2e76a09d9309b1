//! Pipeline Module - Page lifecycle
//!
//! - `mount` - Discover carousels, bind input, own the registry

pub mod mount;

pub use mount::{mount, mount_with_clock, unmount, MountHandle};
