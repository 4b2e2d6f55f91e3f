//! Shared editor state.
//!
//! Two independent slices, style and options, are read and written by many
//! editor components. [`EditorStore`] is the explicit handle to them: clone it
//! to share, subscribe to be told about changes. Values are stored as written.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::FontStyle;

/// Appearance of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormStyle {
    pub font_style: FontStyle,
    pub small_text: bool,
    pub full_width: bool,
}

/// Who may see and submit responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormOptions {
    pub public_responses: bool,
    pub locked_responses: bool,
}

#[derive(Clone)]
pub struct EditorStore {
    style: Arc<watch::Sender<FormStyle>>,
    options: Arc<watch::Sender<FormOptions>>,
}

impl EditorStore {
    pub fn new(style: FormStyle, options: FormOptions) -> Self {
        let (style, _) = watch::channel(style);
        let (options, _) = watch::channel(options);
        Self {
            style: Arc::new(style),
            options: Arc::new(options),
        }
    }

    /// Snapshot of the style slice.
    pub fn style(&self) -> FormStyle {
        self.style.borrow().clone()
    }

    /// Snapshot of the options slice.
    pub fn options(&self) -> FormOptions {
        self.options.borrow().clone()
    }

    pub fn update_style(&self, f: impl FnOnce(&mut FormStyle)) {
        self.style.send_modify(f);
    }

    pub fn update_options(&self, f: impl FnOnce(&mut FormOptions)) {
        self.options.send_modify(f);
    }

    pub fn subscribe_style(&self) -> watch::Receiver<FormStyle> {
        self.style.subscribe()
    }

    pub fn subscribe_options(&self) -> watch::Receiver<FormOptions> {
        self.options.subscribe()
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new(FormStyle::default(), FormOptions::default())
    }
}
