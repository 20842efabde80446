//! Route stack between the three screens.
//!
//! # Design
//! Stateless routing table: three named routes, one parameterized
//! transition (list → form carries the item selected for editing). No
//! state machine beyond the current route; `go_back` never pops past the
//! root.

use crate::types::Item;

/// A screen of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// The register/edit form; `editing` carries the item selected on the
    /// list screen, or `None` for create mode.
    Register { editing: Option<Item> },
    Items,
}

/// Navigation stack rooted at `Home`.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Push the current route and move to `route`.
    pub fn navigate(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.current, route);
        self.stack.push(previous);
    }

    /// Return to the previous route. At the root this is a no-op and
    /// returns false.
    pub fn go_back(&mut self) -> bool {
        match self.stack.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
