//! In-process publish/subscribe for AR signals.
//!
//! Listeners live on the UI thread, so the bus is `Rc`-based and the
//! process-wide instance is thread-local. Each subscription is an RAII
//! guard: dropping it removes the listener, which keeps handlers from
//! running against torn-down views.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, warn};

/// Signals exchanged between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArSignal {
    /// Return every AR toggle to rest.
    ToggleReset,
    /// A secondary web view was opened over the AR screen.
    WebViewOpened,
}

type Listener = Rc<dyn Fn(ArSignal)>;

#[derive(Default)]
struct BusInner {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

impl BusInner {
    fn is_registered(&self, id: u64) -> bool {
        self.listeners.borrow().iter().any(|(known, _)| *known == id)
    }
}

/// Multi-listener signal bus.
///
/// Cloning yields another handle to the same bus. Delivery order across
/// listeners is unspecified.
///
/// # Examples
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use monastery_tabbar::{ArSignal, EventBus};
///
/// let bus = EventBus::new();
/// let seen = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&seen);
/// let subscription = bus.subscribe(move |_| counter.set(counter.get() + 1));
///
/// bus.emit(ArSignal::ToggleReset);
/// drop(subscription);
/// bus.emit(ArSignal::ToggleReset);
/// assert_eq!(seen.get(), 1);
/// ```
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<BusInner>,
}

thread_local! {
    static SHARED: EventBus = EventBus::new();
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventBus {
    /// A new, independent bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide bus of the current thread.
    #[must_use]
    pub fn shared() -> Self {
        SHARED.with(Self::clone)
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Register `listener` until the returned guard is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ArSignal) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver `signal` to every listener registered at emission time.
    ///
    /// Listeners may subscribe, unsubscribe or emit while being called. A
    /// listener removed during delivery is skipped.
    pub fn emit(&self, signal: ArSignal) {
        let snapshot: Vec<(u64, Listener)> = self.inner.listeners.borrow().clone();
        debug!("emitting {signal:?} to {} listeners", snapshot.len());
        for (id, listener) in snapshot {
            if self.inner.is_registered(id) {
                listener(signal);
            }
        }
    }
}

/// Guard returned by [`EventBus::subscribe`].
#[must_use = "dropping the subscription removes the listener immediately"]
#[derive(Debug)]
pub struct Subscription {
    bus: Weak<BusInner>,
    id: u64,
}

impl Subscription {
    /// Report whether the listener is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.bus
            .upgrade()
            .is_some_and(|inner| inner.is_registered(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            match inner.listeners.try_borrow_mut() {
                Ok(mut listeners) => listeners.retain(|(id, _)| *id != self.id),
                Err(_) => warn!("listener {} left registered; bus list is borrowed", self.id),
            }
        }
    }
}
