//! State Module - Runtime systems around the carousel engine
//!
//! - **Clock** - Time source (system or manual)
//! - **Autoplay** - Polled interval timer
//! - **Keyboard** - Key event types, navigation keys
//! - **Input** - crossterm conversion and polling
//! - **Visibility** - Most-visible carousel resolution
//! - **Router** - Clicks and keys to carousel operations

pub mod autoplay;
pub mod clock;
pub mod input;
pub mod keyboard;
pub mod router;
pub mod visibility;

pub use autoplay::{AutoplayHandle, AutoplayTimer};
pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{convert_key_event, poll_event, read_event, InputEvent};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers, NavKey};
pub use router::{Binding, InputRouter, Routed};
pub use visibility::{most_visible, visible_extent};
