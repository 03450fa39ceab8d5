//! Subject/observer plumbing between the generator and its renderers.
//!
//! Observers are held by weak reference: a subject never keeps a renderer alive. Notification is
//! synchronous and runs on the caller's thread, so `update` should only record that a redraw is
//! due and pull data later.

use {
  std::{fmt, rc::{Rc, Weak}},
  tracing::trace
};

pub trait Observer {
  /// Called after the subject finished a change.
  fn update(&self);
}

pub trait Subject {
  fn attach<O: Observer + 'static>(&mut self, observer: &Rc<O>);
  fn detach<O: Observer + ?Sized>(&mut self, observer: &Rc<O>);
  fn notify_all_observers(&self);
}

struct Entry {
  // identity of the registered allocation, metadata stripped
  addr: *const (),
  observer: Weak<dyn Observer>,
}

/// Ordered list of observers. The same observer may be registered more than once, and is then
/// notified once per registration.
#[derive(Default)]
pub struct ObserverRegistry {
  entries: Vec<Entry>,
}

impl ObserverRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn attach<O: Observer + 'static>(&mut self, observer: &Rc<O>) {
    self.prune();
    let weak: Weak<O> = Rc::downgrade(observer);
    let weak: Weak<dyn Observer> = weak;
    self.entries.push(Entry {
      addr: Rc::as_ptr(observer) as *const (),
      observer: weak
    });
  }

  /// Removes the first registration of `observer`. Unknown observers are ignored.
  pub fn detach<O: Observer + ?Sized>(&mut self, observer: &Rc<O>) {
    // dead entries first, so a reused allocation can't be mistaken for them
    self.prune();
    let addr = Rc::as_ptr(observer) as *const ();
    if let Some(i) = self.entries.iter().position(|entry| entry.addr == addr) {
      self.entries.remove(i);
    }
  }

  /// Calls `update` on every live observer, in registration order.
  pub fn notify_all(&self) {
    self.entries.iter()
      .filter_map(|entry| entry.observer.upgrade())
      .for_each(|observer| {
        trace!("notify observer");
        observer.update();
      });
  }

  /// Number of registrations whose observer is still alive.
  pub fn len(&self) -> usize {
    self.entries.iter()
      .filter(|entry| entry.observer.strong_count() > 0)
      .count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn prune(&mut self) {
    self.entries.retain(|entry| entry.observer.strong_count() > 0);
  }
}

impl fmt::Debug for ObserverRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ObserverRegistry")
      .field("observers", &self.len())
      .finish()
  }
}
