// Data Models
pub mod clipboard;
pub mod entry_info;
pub mod navigation_state;

pub use clipboard::{ClipboardMode, ClipboardState};
pub use entry_info::{EntryInfo, EntryKind};
pub use navigation_state::{Activation, NavigationState};
