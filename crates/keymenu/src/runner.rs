//! # Menu runner
//!
//! ## Overview
//!
//! The [MenuRunner] owns a [MenuRegistry] and a [Minibuffer]. Each call to [MenuRunner::run]
//! shows one menu, reads a single choice, and dispatches on it:
//!
//! - [MenuAction::Call] invokes its callback once;
//! - [MenuAction::Open] shows the named menu;
//! - [MenuAction::Nothing], including the implicit quit choice, reports that the menu was
//!   aborted.
//!
//! When no menu name is given, or the name isn't registered, the runner shows the
//! [menu of menus](MenuRegistry::menu_of_menus) instead.
use crate::errors::MenuResult;
use crate::host::Minibuffer;
use crate::menu::MenuAction;
use crate::prompt::{choice_keys, render_prompt, PromptOptions};
use crate::registry::MenuRegistry;

/// How a call to [MenuRunner::run] finished.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuOutcome {
    /// There were no menus to show.
    Unconfigured,

    /// The user quit the menu, or chose an item without an action.
    Aborted,

    /// The callback bound to this key was invoked.
    Invoked(char),
}

/// Shows menus from a registry and dispatches the user's choice.
pub struct MenuRunner<M: Minibuffer> {
    registry: MenuRegistry,
    options: PromptOptions,
    minibuffer: M,
}

impl<M: Minibuffer> MenuRunner<M> {
    /// Create a runner for the menus in `registry`.
    pub fn new(registry: MenuRegistry, minibuffer: M) -> Self {
        MenuRunner { registry, options: PromptOptions::default(), minibuffer }
    }

    /// Use different prompt text and keys.
    pub fn with_options(mut self, options: PromptOptions) -> Self {
        self.options = options;
        self
    }

    /// The menus this runner shows.
    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    /// The prompt options in use.
    pub fn options(&self) -> &PromptOptions {
        &self.options
    }

    /// Access the host minibuffer.
    pub fn minibuffer(&self) -> &M {
        &self.minibuffer
    }

    /// Mutably access the host minibuffer.
    pub fn minibuffer_mut(&mut self) -> &mut M {
        &mut self.minibuffer
    }

    /// Consume the runner, returning its minibuffer.
    pub fn into_minibuffer(self) -> M {
        self.minibuffer
    }

    /// Show the menu registered as `name`, or the menu of menus, and act on the user's choice.
    pub fn run(&mut self, name: Option<&str>) -> MenuResult<MenuOutcome> {
        if self.registry.is_empty() {
            tracing::debug!("no menus configured");
            self.minibuffer.echo(self.options.get_unconfigured_message())?;

            return Ok(MenuOutcome::Unconfigured);
        }

        let (key, action) = {
            let generated;
            let menu = match name.and_then(|name| self.registry.get(name)) {
                Some(menu) => menu,
                None => {
                    if let Some(name) = name {
                        tracing::debug!(name, "unknown menu, showing menu of menus");
                    }

                    generated = self.registry.menu_of_menus(self.options.get_quit_key())?;
                    &generated
                },
            };

            let prompt = render_prompt(menu, &self.options);
            let choices = choice_keys(menu, &self.options);
            let key = self.minibuffer.read_choice(&prompt, &choices)?;
            // The quit key always aborts, even if an item is bound to it.
            let action = if key == self.options.get_quit_key() {
                None
            } else {
                menu.find(key).map(|item| item.action().clone())
            };

            (key, action)
        };

        match action {
            Some(MenuAction::Call(f)) => {
                tracing::debug!(%key, "invoking menu item");
                f();

                return Ok(MenuOutcome::Invoked(key));
            },
            Some(MenuAction::Open(target)) => {
                tracing::debug!(%key, target = target.as_str(), "opening menu");

                return self.run(Some(target.as_str()));
            },
            Some(MenuAction::Nothing) | None => {
                tracing::debug!(%key, "menu aborted");
                self.minibuffer.echo(self.options.get_aborted_message())?;

                return Ok(MenuOutcome::Aborted);
            },
        }
    }
}

/// A saved request to show a menu, suitable for binding to a key.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MenuCommand {
    name: Option<String>,
}

impl MenuCommand {
    /// A command that shows the menu registered as `name`.
    pub fn new<T: Into<String>>(name: T) -> Self {
        MenuCommand { name: Some(name.into()) }
    }

    /// A command that shows the menu of menus.
    pub fn menus() -> Self {
        MenuCommand { name: None }
    }

    /// The menu this command shows, if it names one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Run this command.
    pub fn invoke<M: Minibuffer>(&self, runner: &mut MenuRunner<M>) -> MenuResult<MenuOutcome> {
        runner.run(self.name())
    }

    /// Turn this command into a closure, for storing in a keybinding table.
    pub fn into_fn<M: Minibuffer>(self) -> impl Fn(&mut MenuRunner<M>) -> MenuResult<MenuOutcome> {
        move |runner| self.invoke(runner)
    }
}
