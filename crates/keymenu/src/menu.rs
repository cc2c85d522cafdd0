//! # Menus and menu items
//!
//! ## Overview
//!
//! A [Menu] is a title and an ordered list of [MenuItem] values. Each item is triggered by a
//! single character and carries a [MenuAction] describing what happens when it's chosen.
use std::borrow::Cow;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// A shared, zero-argument callback bound to a menu item.
pub type MenuCallback = Arc<dyn Fn()>;

/// What happens when a [MenuItem] is selected.
#[derive(Clone, Default)]
pub enum MenuAction {
    /// Invoke a callback.
    Call(MenuCallback),

    /// Show the registered menu with the given name.
    Open(String),

    /// Do nothing, and report that the selection was aborted.
    #[default]
    Nothing,
}

impl MenuAction {
    /// Create an action that invokes the given callback.
    pub fn call<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        MenuAction::Call(Arc::new(f))
    }

    /// Create an action that shows another registered menu.
    pub fn open<T: Into<String>>(name: T) -> Self {
        MenuAction::Open(name.into())
    }

    /// Whether selecting this action aborts the menu.
    pub fn is_nothing(&self) -> bool {
        matches!(self, MenuAction::Nothing)
    }
}

impl Debug for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Call(_) => write!(f, "Call(..)"),
            MenuAction::Open(name) => f.debug_tuple("Open").field(name).finish(),
            MenuAction::Nothing => write!(f, "Nothing"),
        }
    }
}

/// One of the choices shown in a [Menu].
#[derive(Clone, Debug)]
pub struct MenuItem {
    key: char,
    label: Cow<'static, str>,
    action: MenuAction,
}

impl MenuItem {
    /// Create a new item triggered by `key`.
    pub fn new<T>(key: char, label: T, action: MenuAction) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        let label = label.into();

        MenuItem { key, label, action }
    }

    /// The character that selects this item.
    pub fn key(&self) -> char {
        self.key
    }

    /// The text shown next to the key.
    pub fn label(&self) -> &str {
        self.label.as_ref()
    }

    /// The action bound to this item.
    pub fn action(&self) -> &MenuAction {
        &self.action
    }
}

/// A titled list of items.
#[derive(Clone, Debug)]
pub struct Menu {
    title: Cow<'static, str>,
    items: Vec<MenuItem>,
}

impl Menu {
    /// Create a new menu.
    pub fn new<T>(title: T, items: Vec<MenuItem>) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Menu { title: title.into(), items }
    }

    /// Append an item to this menu.
    pub fn item<T>(mut self, key: char, label: T, action: MenuAction) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.items.push(MenuItem::new(key, label, action));
        self
    }

    /// The menu's title.
    pub fn title(&self) -> &str {
        self.title.as_ref()
    }

    /// The items, in display order.
    pub fn items(&self) -> &[MenuItem] {
        self.items.as_slice()
    }

    /// Find the first item triggered by `key`.
    pub fn find(&self, key: char) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.key == key)
    }
}
