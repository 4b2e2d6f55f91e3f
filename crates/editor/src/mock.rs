//! Recording test doubles for the navbar's collaborators.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use db::models::FormRecord;

use crate::{Clipboard, ClipboardError, EditorError, FormsApi, Navigator, Notifier, Route, Toast};

/// Keeps every toast it is shown.
#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

/// In-memory clipboard; can be told to deny access.
#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: Mutex<Option<String>>,
    pub deny: bool,
}

impl MemoryClipboard {
    pub fn denying() -> Self {
        Self { contents: Mutex::new(None), deny: true }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError("permission denied".into()));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// Records every route pushed.
#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Scripted [`FormsApi`].
///
/// `delete_form` succeeds unless [`MockFormsApi::fail_deletes`] was called.
/// `list_user_forms` pops scripted lists; when none are left it fails.
#[derive(Default)]
pub struct MockFormsApi {
    fail_delete: Mutex<bool>,
    lists: Mutex<VecDeque<Vec<FormRecord>>>,
    pub deleted: Mutex<Vec<String>>,
    pub list_calls: Mutex<Vec<String>>,
}

impl MockFormsApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_deletes(&self) {
        *self.fail_delete.lock().unwrap() = true;
    }

    pub fn push_list(&self, forms: Vec<FormRecord>) {
        self.lists.lock().unwrap().push_back(forms);
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FormsApi for MockFormsApi {
    async fn delete_form(&self, id: &str) -> Result<(), EditorError> {
        if *self.fail_delete.lock().unwrap() {
            return Err(EditorError::Status {
                status: 500,
                url: format!("/api/forms/{id}/delete"),
            });
        }
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }

    async fn list_user_forms(&self, sub: &str) -> Result<Vec<FormRecord>, EditorError> {
        self.list_calls.lock().unwrap().push(sub.to_string());
        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| EditorError::Status {
                status: 502,
                url: format!("/api/forms/user/{sub}"),
            })
    }
}
