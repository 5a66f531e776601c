use std::collections::HashMap;
use std::rc::Rc;

pub type Listener<E> = Rc<dyn Fn(&E)>;

/// Callbacks per event name, kept in registration order.
pub struct Observers<E> {
    by_name: HashMap<String, Vec<Listener<E>>>,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }
}

impl<E> Observers<E> {
    pub fn subscribe(&mut self, name: &str, listener: Listener<E>) {
        self.by_name.entry(name.to_string()).or_default().push(listener);
    }

    /// Snapshot of the listeners for `name`. Callers invoke these after
    /// releasing any borrow of the registry so callbacks can subscribe again.
    pub fn listeners(&self, name: &str) -> Vec<Listener<E>> {
        self.by_name.get(name).cloned().unwrap_or_default()
    }

    pub fn notify(&self, name: &str, event: &E) {
        for listener in self.listeners(name) {
            listener(event);
        }
    }

    pub fn len(&self, name: &str) -> usize {
        self.by_name.get(name).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn listeners_run_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut obs: Observers<u32> = Observers::default();
        for tag in ["a", "b", "c"] {
            let seen = seen.clone();
            obs.subscribe("swipe", Rc::new(move |v: &u32| seen.borrow_mut().push(format!("{tag}{v}"))));
        }
        obs.notify("swipe", &7);
        assert_eq!(*seen.borrow(), vec!["a7", "b7", "c7"]);
    }

    #[test]
    fn names_are_separate() {
        let hits = Rc::new(RefCell::new(0));
        let mut obs: Observers<()> = Observers::default();
        {
            let hits = hits.clone();
            obs.subscribe("swipeLeft", Rc::new(move |_: &()| *hits.borrow_mut() += 1));
        }
        obs.notify("swipeRight", &());
        obs.notify("swipe", &());
        assert_eq!(*hits.borrow(), 0);
        obs.notify("swipeLeft", &());
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(obs.len("swipeLeft"), 1);
        assert_eq!(obs.len("swipe"), 0);
    }

    #[test]
    fn empty_registry_notifies_nothing() {
        let obs: Observers<()> = Observers::default();
        assert!(obs.is_empty());
        obs.notify("swipe", &());
    }
}
