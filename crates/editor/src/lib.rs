//! `editor` crate — the form editor's navbar controller.
//!
//! Holds the shared style/options store, the popover menu model, and the
//! navbar actions (font and layout switches, response access, sharing,
//! deletion, publish). Rendering is left to whatever toolkit hosts it.

pub mod cache;
pub mod clipboard;
pub mod error;
pub mod font;
pub mod forms_api;
pub mod menu;
pub mod mock;
pub mod navbar;
pub mod navigation;
pub mod notify;
pub mod session;
pub mod state;

pub use clipboard::{Clipboard, SystemClipboard};
pub use error::{ClipboardError, EditorError};
pub use font::{FontStyle, FONT_STYLES};
pub use forms_api::{FormsApi, HttpFormsApi};
pub use navbar::{EditorNavbar, NavbarProps, NavbarServices, NavbarView};
pub use navigation::{Navigator, Route};
pub use notify::{Notifier, Toast, ToastKind, TracingNotifier};
pub use session::{Session, User};
pub use state::{EditorStore, FormOptions, FormStyle};
