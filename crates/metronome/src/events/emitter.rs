use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::control::TickControl;

/// Identifies one registered listener.
///
/// Ids are unique per `Emitter` across all event kinds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback<T> = Box<dyn FnMut(&T) -> TickControl>;

struct Entry<T> {
    id: ListenerId,
    once: bool,
    /// Set before a one-shot listener runs; spent entries are never invoked again.
    spent: bool,
    callback: Callback<T>,
}

/// Event-kind keyed listener table.
///
/// Listeners for one kind run in registration order. Callers should not rely
/// on that order.
pub struct Emitter<K, T> {
    listeners: HashMap<K, Vec<Entry<T>>>,
    next_id: u64,
}

impl<K, T> Emitter<K, T>
where
    K: Copy + Eq + Hash + 'static,
    T: 'static,
{
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers a listener that runs on every emission of `kind`.
    pub fn on<F, R>(&mut self, kind: K, f: F) -> ListenerId
    where
        F: FnMut(&T) -> R + 'static,
        R: Into<TickControl> + 'static,
    {
        self.insert(kind, false, f)
    }

    /// Registers a listener that runs on the next emission of `kind` only.
    pub fn once<F, R>(&mut self, kind: K, f: F) -> ListenerId
    where
        F: FnMut(&T) -> R + 'static,
        R: Into<TickControl> + 'static,
    {
        self.insert(kind, true, f)
    }

    fn insert<F, R>(&mut self, kind: K, once: bool, mut f: F) -> ListenerId
    where
        F: FnMut(&T) -> R + 'static,
        R: Into<TickControl> + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        self.listeners.entry(kind).or_default().push(Entry {
            id,
            once,
            spent: false,
            callback: Box::new(move |payload: &T| -> TickControl { f(payload).into() }),
        });

        id
    }

    /// Removes one listener. Returns `false` if `id` is not registered for `kind`.
    pub fn off(&mut self, kind: K, id: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(&kind) else {
            return false;
        };

        let Some(pos) = list.iter().position(|e| e.id == id && !e.spent) else {
            return false;
        };

        list.remove(pos);
        if list.is_empty() {
            self.listeners.remove(&kind);
        }
        true
    }

    /// Removes every listener for `kind`, returning how many were live.
    pub fn clear(&mut self, kind: K) -> usize {
        self.listeners
            .remove(&kind)
            .map(|list| list.iter().filter(|e| !e.spent).count())
            .unwrap_or(0)
    }

    pub fn clear_all(&mut self) {
        self.listeners.clear();
    }

    /// Number of live listeners for `kind`.
    pub fn count(&self, kind: K) -> usize {
        self.listeners
            .get(&kind)
            .map(|list| list.iter().filter(|e| !e.spent).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.listeners
            .values()
            .all(|list| list.iter().all(|e| e.spent))
    }

    /// Invokes every listener for `kind` with `payload`.
    ///
    /// Returns `Stop` if any listener asked for it. A panicking listener
    /// unwinds through here; one-shot entries that already ran stay spent.
    pub fn emit(&mut self, kind: K, payload: &T) -> TickControl {
        let Some(list) = self.listeners.get_mut(&kind) else {
            return TickControl::Continue;
        };

        // Leftovers from an emission that unwound.
        list.retain(|e| !e.spent);

        let mut control = TickControl::Continue;
        for entry in list.iter_mut() {
            if entry.once {
                entry.spent = true;
            }
            control = control.merge((entry.callback)(payload));
        }

        list.retain(|e| !e.spent);
        if list.is_empty() {
            self.listeners.remove(&kind);
        }

        control
    }
}

impl<K, T> Default for Emitter<K, T>
where
    K: Copy + Eq + Hash + 'static,
    T: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, T> fmt::Debug for Emitter<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, list) in &self.listeners {
            map.entry(kind, &list.iter().filter(|e| !e.spent).count());
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;

    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    enum Kind {
        A,
        B,
    }

    fn counter() -> Rc<Cell<u32>> {
        Rc::new(Cell::new(0))
    }

    #[test]
    fn on_fires_every_emit() {
        let mut em: Emitter<Kind, u32> = Emitter::new();
        let hits = counter();
        let h = hits.clone();
        em.on(Kind::A, move |_| h.set(h.get() + 1));

        em.emit(Kind::A, &1);
        em.emit(Kind::A, &2);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn emit_only_reaches_matching_kind() {
        let mut em: Emitter<Kind, u32> = Emitter::new();
        let hits = counter();
        let h = hits.clone();
        em.on(Kind::A, move |_| h.set(h.get() + 1));

        em.emit(Kind::B, &1);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn listener_receives_payload() {
        let mut em: Emitter<Kind, u32> = Emitter::new();
        let seen = counter();
        let s = seen.clone();
        em.on(Kind::A, move |v: &u32| s.set(*v));

        em.emit(Kind::A, &42);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn once_fires_a_single_time() {
        let mut em: Emitter<Kind, u32> = Emitter::new();
        let hits = counter();
        let h = hits.clone();
        em.once(Kind::A, move |_| h.set(h.get() + 1));
        assert_eq!(em.count(Kind::A), 1);

        em.emit(Kind::A, &0);
        em.emit(Kind::A, &0);
        assert_eq!(hits.get(), 1);
        assert_eq!(em.count(Kind::A), 0);
    }

    #[test]
    fn off_removes_only_that_listener() {
        let mut em: Emitter<Kind, u32> = Emitter::new();
        let hits = counter();
        let (h1, h2) = (hits.clone(), hits.clone());
        let first = em.on(Kind::A, move |_| h1.set(h1.get() + 1));
        em.on(Kind::A, move |_| h2.set(h2.get() + 10));

        assert!(em.off(Kind::A, first));
        assert!(!em.off(Kind::A, first));
        em.emit(Kind::A, &0);
        assert_eq!(hits.get(), 10);
    }

    #[test]
    fn off_with_wrong_kind_is_rejected() {
        let mut em: Emitter<Kind, u32> = Emitter::new();
        let id = em.on(Kind::A, |_| ());
        assert!(!em.off(Kind::B, id));
        assert_eq!(em.count(Kind::A), 1);
    }

    #[test]
    fn clear_and_clear_all() {
        let mut em: Emitter<Kind, u32> = Emitter::new();
        em.on(Kind::A, |_| ());
        em.on(Kind::A, |_| ());
        em.on(Kind::B, |_| ());

        assert_eq!(em.clear(Kind::A), 2);
        assert_eq!(em.count(Kind::A), 0);
        assert_eq!(em.count(Kind::B), 1);

        em.clear_all();
        assert!(em.is_empty());
    }

    #[test]
    fn stop_from_any_listener_wins() {
        let mut em: Emitter<Kind, u32> = Emitter::new();
        em.on(Kind::A, |_| TickControl::Stop);
        em.on(Kind::A, |_| ());
        assert_eq!(em.emit(Kind::A, &0), TickControl::Stop);
        assert_eq!(em.emit(Kind::B, &0), TickControl::Continue);
    }

    #[test]
    fn clear_all_drops_captured_state() {
        let mut em: Emitter<Kind, u32> = Emitter::new();
        let shared = Rc::new(());
        let held = shared.clone();
        em.on(Kind::A, move |_| {
            let _ = &held;
        });
        assert_eq!(Rc::strong_count(&shared), 2);

        em.clear_all();
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn panicking_once_listener_does_not_fire_twice() {
        let mut em: Emitter<Kind, u32> = Emitter::new();
        let hits = counter();
        let h = hits.clone();
        em.once(Kind::A, move |_: &u32| -> TickControl {
            h.set(h.get() + 1);
            panic!("listener failure");
        });

        let unwound = panic::catch_unwind(AssertUnwindSafe(|| {
            em.emit(Kind::A, &0);
        }));
        assert!(unwound.is_err());

        em.emit(Kind::A, &0);
        assert_eq!(hits.get(), 1);
        assert_eq!(em.count(Kind::A), 0);
    }
}
