//! # Menu registry
//!
//! ## Overview
//!
//! The [MenuRegistry] maps menu names to [Menu] definitions, and remembers the order in which
//! they were registered. That order determines the selector keys assigned when building the
//! [menu of menus](MenuRegistry::menu_of_menus).
use indexmap::IndexMap;

use crate::errors::{MenuError, MenuResult};
use crate::menu::{Menu, MenuAction, MenuItem};

/// Title of the generated menu of menus.
pub const MENUS_TITLE: &str = "Menus";

/// The characters handed out to entries in the menu of menus, in order, leaving out `reserved`.
pub fn selector_keys(reserved: char) -> impl Iterator<Item = char> {
    ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .filter(move |c| *c != reserved)
}

/// An ordered collection of named menus.
#[derive(Clone, Debug, Default)]
pub struct MenuRegistry {
    menus: IndexMap<String, Menu>,
}

impl MenuRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a menu under `name`.
    ///
    /// If the name was already registered, the old menu is returned and the new one takes its
    /// place in the registration order.
    pub fn insert<T: Into<String>>(&mut self, name: T, menu: Menu) -> Option<Menu> {
        self.menus.insert(name.into(), menu)
    }

    /// Builder-style version of [MenuRegistry::insert].
    pub fn with<T: Into<String>>(mut self, name: T, menu: Menu) -> Self {
        let _ = self.insert(name, menu);
        self
    }

    /// Look up a menu by name.
    pub fn get(&self, name: &str) -> Option<&Menu> {
        self.menus.get(name)
    }

    /// Number of registered menus.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Whether no menus have been registered.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Iterate over the registered menus in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Menu)> {
        self.menus.iter().map(|(name, menu)| (name.as_str(), menu))
    }

    /// Iterate over the registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(String::as_str)
    }

    /// Build a menu listing every registered menu.
    ///
    /// Entries get selector keys from [selector_keys], so the first sixteen are `a` through
    /// `p`, and `reserved` (normally the quit key) is never handed out. Each entry opens the
    /// menu it names. Fails with [MenuError::TooManyMenus] once the keys run out.
    pub fn menu_of_menus(&self, reserved: char) -> MenuResult<Menu> {
        let mut keys = selector_keys(reserved);
        let mut items = Vec::with_capacity(self.menus.len());

        for (name, menu) in self.menus.iter() {
            let key = keys.next().ok_or(MenuError::TooManyMenus(self.menus.len()))?;
            let action = MenuAction::open(name.as_str());

            items.push(MenuItem::new(key, menu.title().to_string(), action));
        }

        Ok(Menu::new(MENUS_TITLE, items))
    }
}

impl<T: Into<String>> FromIterator<(T, Menu)> for MenuRegistry {
    fn from_iter<I: IntoIterator<Item = (T, Menu)>>(iter: I) -> Self {
        let menus = iter.into_iter().map(|(name, menu)| (name.into(), menu)).collect();

        MenuRegistry { menus }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn titled(title: &str) -> Menu {
        Menu::new(title.to_string(), vec![])
    }

    fn numbered(n: usize) -> MenuRegistry {
        (0..n).map(|i| (format!("menu-{i}"), titled(&format!("Menu {i}")))).collect()
    }

    #[test]
    fn test_registration_order() {
        let mut registry = MenuRegistry::new()
            .with("buffer-menu", titled("Buffer ops"))
            .with("help-menu", titled("Help ops"))
            .with("file-menu", titled("File ops"));

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.iter().map(|(name, menu)| (name, menu.title())).collect::<Vec<_>>(),
            vec![
                ("buffer-menu", "Buffer ops"),
                ("help-menu", "Help ops"),
                ("file-menu", "File ops")
            ]
        );
        assert_eq!(registry.names().collect::<Vec<_>>(), vec![
            "buffer-menu",
            "help-menu",
            "file-menu"
        ]);

        // Replacing a menu keeps its position.
        let old = registry.insert("help-menu", titled("More help"));
        assert_eq!(old.unwrap().title(), "Help ops");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec![
            "buffer-menu",
            "help-menu",
            "file-menu"
        ]);
        assert_eq!(registry.get("help-menu").unwrap().title(), "More help");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_menu_of_menus() {
        let registry = MenuRegistry::new()
            .with("buffer-menu", titled("Buffer ops"))
            .with("help-menu", titled("Help ops"));

        let menu = registry.menu_of_menus('q').unwrap();
        assert_eq!(menu.title(), MENUS_TITLE);
        assert_eq!(menu.items().len(), 2);

        let items = menu.items();
        assert_eq!(items[0].key(), 'a');
        assert_eq!(items[0].label(), "Buffer ops");
        assert!(matches!(items[0].action(), MenuAction::Open(n) if n == "buffer-menu"));
        assert_eq!(items[1].key(), 'b');
        assert_eq!(items[1].label(), "Help ops");
        assert!(matches!(items[1].action(), MenuAction::Open(n) if n == "help-menu"));
    }

    #[test]
    fn test_menu_of_menus_random_sizes() {
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let n = rng.gen_range(1..=16);
            let menu = numbered(n).menu_of_menus('q').unwrap();
            let keys = menu.items().iter().map(MenuItem::key).collect::<Vec<_>>();
            let expected = (0..n).map(|i| (b'a' + i as u8) as char).collect::<Vec<_>>();

            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn test_menu_of_menus_skips_reserved() {
        let menu = numbered(30).menu_of_menus('q').unwrap();
        let keys = menu.items().iter().map(MenuItem::key).collect::<String>();

        assert_eq!(keys, "abcdefghijklmnoprstuvwxyzABCDE");
        assert!(menu.find('q').is_none());
    }

    #[test]
    fn test_menu_of_menus_exhausted() {
        let menu = numbered(61).menu_of_menus('q').unwrap();
        assert_eq!(menu.items().last().unwrap().key(), '9');

        let err = numbered(62).menu_of_menus('q').unwrap_err();
        assert!(matches!(err, MenuError::TooManyMenus(62)));

        // A reserved key outside the sequence leaves all 62 keys available.
        assert!(numbered(62).menu_of_menus('!').is_ok());
    }
}
