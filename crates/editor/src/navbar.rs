//! The editor's top bar.
//!
//! `EditorNavbar` owns no state of its own beyond the popover flag. Style and
//! options live in the shared [`EditorStore`], the sidebar flag belongs to the
//! parent, and every side effect goes through the collaborators in
//! [`NavbarServices`].

use std::sync::Arc;

use db::models::FormRecord;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::cache::{user_forms_key, FormsCache};
use crate::menu::{DisclosureMenu, MenuAction, MenuEvent, MenuItem, SelectOption};
use crate::{
    Clipboard, EditorError, EditorStore, FontStyle, FormsApi, Navigator, Notifier, Route,
    Session, Toast, FONT_STYLES,
};

pub const DEFAULT_TITLE_WIDTH: usize = 48;

pub const FONT_STYLE_LABEL: &str = "Font style";
pub const SMALL_TEXT_LABEL: &str = "Small text";
pub const FULL_WIDTH_LABEL: &str = "Wider layout";
pub const PUBLIC_RESPONSES_LABEL: &str = "Public responses";
pub const LOCK_RESPONSES_LABEL: &str = "Lock responses";
pub const VIEW_FORM_LABEL: &str = "View form";
pub const COPY_LINK_LABEL: &str = "Copy link";
pub const DELETE_LABEL: &str = "Delete";

pub const PUBLIC_LOGIN_MESSAGE: &str = "Log in to change this setting";
pub const LOCK_LOGIN_MESSAGE: &str = "Log in first to lock form responses";
pub const LINK_COPIED_MESSAGE: &str = "Link copied to clipboard";
pub const LINK_COPY_FAILED_MESSAGE: &str = "Could not copy link";
pub const DELETING_MESSAGE: &str = "Deleting form";
pub const DELETED_MESSAGE: &str = "Form has been deleted";
pub const DELETE_FAILED_MESSAGE: &str = "Error while deleting form";

/// Called when the user presses Publish.
pub type PublishHandler = Arc<dyn Fn() + Send + Sync>;

/// What the navbar is showing.
#[derive(Debug, Clone)]
pub struct NavbarProps {
    pub form_id: String,
    pub title: Option<String>,
    /// Image URL shown left of the title.
    pub icon: Option<String>,
    /// Host the share link points at, e.g. `typiform.app`.
    pub host: String,
}

/// Side-effecting collaborators.
#[derive(Clone)]
pub struct NavbarServices {
    pub notifier: Arc<dyn Notifier>,
    pub clipboard: Arc<dyn Clipboard>,
    pub navigator: Arc<dyn Navigator>,
    pub forms_api: Arc<dyn FormsApi>,
    pub cache: FormsCache,
}

/// Render model of the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarView {
    pub sidebar_open: bool,
    pub icon: Option<String>,
    pub title: String,
    pub menu: DisclosureMenu,
    pub publish_label: &'static str,
}

pub struct EditorNavbar {
    props: NavbarProps,
    store: EditorStore,
    session: Session,
    sidebar: Arc<watch::Sender<bool>>,
    services: NavbarServices,
    on_publish: PublishHandler,
    menu_open: watch::Sender<bool>,
    title_width: usize,
}

impl EditorNavbar {
    pub fn new(
        props: NavbarProps,
        store: EditorStore,
        session: Session,
        sidebar: Arc<watch::Sender<bool>>,
        services: NavbarServices,
        on_publish: PublishHandler,
    ) -> Self {
        Self {
            props,
            store,
            session,
            sidebar,
            services,
            on_publish,
            menu_open: watch::channel(false).0,
            title_width: DEFAULT_TITLE_WIDTH,
        }
    }

    pub fn with_title_width(mut self, width: usize) -> Self {
        self.title_width = width;
        self
    }

    // ------------------------------------------------------------------
    // Toolbar
    // ------------------------------------------------------------------

    /// Flip the parent's sidebar flag and return the new value.
    pub fn toggle_sidebar(&self) -> bool {
        self.sidebar.send_modify(|open| *open = !*open);
        *self.sidebar.borrow()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.send_modify(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.send_replace(false);
    }

    pub fn publish(&self) {
        info!(form_id = %self.props.form_id, "publish requested");
        (self.on_publish)();
    }

    pub fn view(&self) -> NavbarView {
        NavbarView {
            sidebar_open: *self.sidebar.borrow(),
            icon: self.props.icon.clone(),
            title: truncate_title(self.props.title.as_deref(), self.title_width),
            menu: self.menu(),
            publish_label: "Publish",
        }
    }

    /// Build the popover menu from the current shared state.
    pub fn menu(&self) -> DisclosureMenu {
        let style = self.store.style();
        let options = self.store.options();
        let logged_in = self.session.is_authenticated();

        let fonts = FONT_STYLES
            .into_iter()
            .map(|font| SelectOption {
                label: font.label().to_string(),
                value: font.class().to_string(),
                checked: font == style.font_style,
            })
            .collect();

        DisclosureMenu::new(vec![
            vec![MenuItem::SingleSelect {
                label: FONT_STYLE_LABEL.to_string(),
                options: fonts,
            }],
            vec![
                toggle(SMALL_TEXT_LABEL, style.small_text, MenuAction::SmallText),
                toggle(FULL_WIDTH_LABEL, style.full_width, MenuAction::FullWidth),
            ],
            vec![
                // Logged-out users see the effective policy, not the stored one.
                toggle(
                    PUBLIC_RESPONSES_LABEL,
                    !logged_in || options.public_responses,
                    MenuAction::PublicResponses,
                ),
                toggle(
                    LOCK_RESPONSES_LABEL,
                    logged_in && options.locked_responses,
                    MenuAction::LockResponses,
                ),
            ],
            vec![
                MenuItem::Link {
                    label: VIEW_FORM_LABEL.to_string(),
                    href: self.view_form_route().path(),
                    new_tab: true,
                },
                MenuItem::Action {
                    label: COPY_LINK_LABEL.to_string(),
                    action: MenuAction::CopyLink,
                },
                MenuItem::Action {
                    label: DELETE_LABEL.to_string(),
                    action: MenuAction::Delete,
                },
            ],
        ])
        .with_open(*self.menu_open.borrow())
    }

    /// Route a menu interaction to the matching operation.
    ///
    /// Activating Copy link or Delete closes the popover, whether or not the
    /// action succeeds.
    pub async fn dispatch(&self, event: MenuEvent) -> Result<(), EditorError> {
        match event {
            MenuEvent::Select(class) => {
                self.select_font(FontStyle::from_class(&class)?);
                Ok(())
            }
            MenuEvent::Toggle(action, checked) => self.apply(action, Some(checked)).await,
            MenuEvent::Activate(action) => {
                let result = self.apply(action, None).await;
                if matches!(action, MenuAction::CopyLink | MenuAction::Delete) {
                    self.close_menu();
                }
                result
            }
        }
    }

    async fn apply(&self, action: MenuAction, checked: Option<bool>) -> Result<(), EditorError> {
        match action {
            MenuAction::SmallText => {
                let value = checked.unwrap_or(!self.store.style().small_text);
                self.set_small_text(value);
                Ok(())
            }
            MenuAction::FullWidth => {
                let value = checked.unwrap_or(!self.store.style().full_width);
                self.set_full_width(value);
                Ok(())
            }
            MenuAction::PublicResponses => {
                let value = checked.unwrap_or(!self.store.options().public_responses);
                self.set_public_responses(value)
            }
            MenuAction::LockResponses => {
                let value = checked.unwrap_or(!self.store.options().locked_responses);
                self.set_locked_responses(value)
            }
            MenuAction::CopyLink => self.copy_link(),
            MenuAction::Delete => self.delete_form().await.map(|_| ()),
        }
    }

    // ------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------

    pub fn select_font(&self, font: FontStyle) {
        self.store.update_style(|s| s.font_style = font);
    }

    pub fn set_small_text(&self, value: bool) {
        self.store.update_style(|s| s.small_text = value);
    }

    pub fn set_full_width(&self, value: bool) {
        self.store.update_style(|s| s.full_width = value);
    }

    // ------------------------------------------------------------------
    // Access options (login required)
    // ------------------------------------------------------------------

    pub fn set_public_responses(&self, value: bool) -> Result<(), EditorError> {
        self.require_login(PUBLIC_LOGIN_MESSAGE)?;
        self.store.update_options(|o| o.public_responses = value);
        Ok(())
    }

    pub fn set_locked_responses(&self, value: bool) -> Result<(), EditorError> {
        self.require_login(LOCK_LOGIN_MESSAGE)?;
        self.store.update_options(|o| o.locked_responses = value);
        Ok(())
    }

    fn require_login(&self, message: &str) -> Result<(), EditorError> {
        if self.session.is_authenticated() {
            return Ok(());
        }
        self.services.notifier.notify(Toast::error(message));
        Err(EditorError::Unauthenticated)
    }

    // ------------------------------------------------------------------
    // Sharing
    // ------------------------------------------------------------------

    pub fn view_form_route(&self) -> Route {
        Route::View(self.props.form_id.clone())
    }

    /// Public link to the form, as copied to the clipboard.
    pub fn share_link(&self) -> String {
        format!("{}{}", self.props.host, self.view_form_route().path())
    }

    pub fn copy_link(&self) -> Result<(), EditorError> {
        let link = self.share_link();
        match self.services.clipboard.write_text(&link) {
            Ok(()) => {
                self.services
                    .notifier
                    .notify(Toast::blank(LINK_COPIED_MESSAGE).with_icon("📎"));
                Ok(())
            }
            Err(e) => {
                warn!("copy link failed: {e}");
                self.services.notifier.notify(Toast::error(LINK_COPY_FAILED_MESSAGE));
                Err(e.into())
            }
        }
    }

    // ------------------------------------------------------------------
    // Forms list + deletion
    // ------------------------------------------------------------------

    /// The current user's forms, from cache or freshly fetched.
    ///
    /// Anonymous sessions have no list.
    pub async fn load_forms(&self) -> Result<Vec<FormRecord>, EditorError> {
        let Some(user) = self.session.user() else {
            return Ok(Vec::new());
        };
        let key = user_forms_key(&user.sub);
        if let Some(forms) = self.services.cache.get(&key) {
            return Ok(forms);
        }
        let forms = self.services.forms_api.list_user_forms(&user.sub).await?;
        self.services.cache.insert(key, forms.clone());
        Ok(forms)
    }

    /// Delete the current form, then move to the next form the user owns.
    ///
    /// Returns the route navigated to: the editor of the first remaining form,
    /// or [`Route::Home`] when none is left. On failure nothing is invalidated
    /// and no navigation happens.
    pub async fn delete_form(&self) -> Result<Route, EditorError> {
        let id = self.props.form_id.clone();
        let notifier = &self.services.notifier;

        notifier.notify(Toast::loading(DELETING_MESSAGE));
        if let Err(e) = self.services.forms_api.delete_form(&id).await {
            warn!(form_id = %id, "delete failed: {e}");
            notifier.notify(Toast::error(DELETE_FAILED_MESSAGE));
            return Err(e);
        }
        notifier.notify(Toast::success(DELETED_MESSAGE));

        let remaining = match self.session.user() {
            Some(user) => self.revalidate_forms(&user.sub).await,
            None => Vec::new(),
        };

        let next = next_route(&remaining, &id);
        info!(form_id = %id, next = %next.path(), "form deleted");
        self.services.navigator.push(next.clone());
        Ok(next)
    }

    /// Drop the cached list and refetch it. Falls back to the stale list when
    /// the refetch fails.
    async fn revalidate_forms(&self, sub: &str) -> Vec<FormRecord> {
        let key = user_forms_key(sub);
        let stale = self.services.cache.invalidate(&key).unwrap_or_default();

        match self.services.forms_api.list_user_forms(sub).await {
            Ok(forms) => {
                self.services.cache.insert(key, forms.clone());
                forms
            }
            Err(e) => {
                warn!("refreshing forms after delete failed: {e}");
                stale
            }
        }
    }
}

fn toggle(label: &str, checked: bool, action: MenuAction) -> MenuItem {
    MenuItem::Toggle {
        label: label.to_string(),
        checked,
        action,
    }
}

/// First form other than `deleted`, or home.
fn next_route(forms: &[FormRecord], deleted: &str) -> Route {
    forms
        .iter()
        .find(|f| f.id != deleted)
        .map(|f| Route::Edit(f.id.clone()))
        .unwrap_or(Route::Home)
}

/// Shorten `title` to at most `width` characters, ending in an ellipsis when cut.
pub fn truncate_title(title: Option<&str>, width: usize) -> String {
    let title = title.unwrap_or_default();
    if width == 0 {
        return String::new();
    }
    if title.chars().count() <= width {
        return title.to_string();
    }
    let mut out: String = title.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
