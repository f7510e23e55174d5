//! Page theme as an explicit value with change observers.
//!
//! One [`ThemeStore`] owns the current theme. Consumers read it or
//! subscribe; observers fire only when the value actually changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LeadeaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for Theme {
    type Err = LeadeaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(LeadeaError::UnknownVariant {
                kind: "theme",
                value: other.to_string(),
            }),
        }
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(Theme)>;

/// Single source of truth for the current theme.
pub struct ThemeStore {
    current: Theme,
    next_id: u64,
    observers: Vec<(Subscription, Observer)>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: initial,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    /// Register an observer. It is not called for the current value.
    pub fn subscribe(&mut self, observer: impl FnMut(Theme) + 'static) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Set the theme. Returns true and notifies observers if it changed.
    pub fn set(&mut self, theme: Theme) -> bool {
        if theme == self.current {
            return false;
        }
        self.current = theme;
        for (_, observer) in self.observers.iter_mut() {
            observer(theme);
        }
        true
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn observers_see_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::new(Theme::Light);
        let sink = Rc::clone(&seen);
        store.subscribe(move |t| sink.borrow_mut().push(t));

        assert!(!store.set(Theme::Light));
        assert!(store.set(Theme::Dark));
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut store = ThemeStore::default();
        let c = Rc::clone(&count);
        let sub = store.subscribe(move |_| *c.borrow_mut() += 1);

        store.toggle();
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.toggle();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn subscriptions_are_independent() {
        let mut store = ThemeStore::default();
        let a = Rc::new(RefCell::new(None));
        let b = Rc::new(RefCell::new(None));
        let (sa, sb) = (Rc::clone(&a), Rc::clone(&b));
        let first = store.subscribe(move |t| *sa.borrow_mut() = Some(t));
        let second = store.subscribe(move |t| *sb.borrow_mut() = Some(t));
        assert_ne!(first, second);

        store.set(Theme::Dark);
        assert_eq!(*a.borrow(), Some(Theme::Dark));
        assert_eq!(*b.borrow(), Some(Theme::Dark));
    }

    #[test]
    fn theme_parses_and_displays() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Light.to_string(), "light");
        assert!("sepia".parse::<Theme>().is_err());
    }
}
