//! Lazy Image Loading
//!
//! Registry of image bindings, each paired with one viewport observer.
//! A binding goes `observing -> loaded` on its first intersecting report and
//! is removed on unmount; the observer is released on either path.

mod dom;

use std::cell::RefCell;
use std::collections::HashMap;

pub use dom::{provide_lazy_loader, LazyImage};

/// Something that can stop watching the viewport
pub trait ViewportObserver {
    fn disconnect(&self);
}

/// Something whose image source can be replaced
pub trait ImageTarget {
    fn load_source(&self, src: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyState {
    Observing,
    Loaded,
}

struct Binding<O, T> {
    target: T,
    src: String,
    observer: O,
    state: LazyState,
}

pub struct LazyLoader<O: ViewportObserver, T: ImageTarget> {
    bindings: HashMap<BindingId, Binding<O, T>>,
    next_id: u64,
}

impl<O: ViewportObserver, T: ImageTarget> Default for LazyLoader<O, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ViewportObserver, T: ImageTarget> LazyLoader<O, T> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            next_id: 1,
        }
    }

    /// Bind `target` to `src`; `make_observer` receives the new id and must
    /// start observing the target
    pub fn mount<E>(
        &mut self,
        target: T,
        src: impl Into<String>,
        make_observer: impl FnOnce(BindingId) -> Result<O, E>,
    ) -> Result<BindingId, E> {
        let id = BindingId(self.next_id);
        let observer = make_observer(id)?;
        self.next_id += 1;
        self.bindings.insert(
            id,
            Binding {
                target,
                src: src.into(),
                observer,
                state: LazyState::Observing,
            },
        );
        Ok(id)
    }

    /// Handle one observer entry. Returns true if the image was swapped in.
    pub fn on_intersection(&mut self, id: BindingId, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let Some(binding) = self.bindings.get_mut(&id) else {
            return false;
        };
        if binding.state != LazyState::Observing {
            return false;
        }
        binding.target.load_source(&binding.src);
        binding.observer.disconnect();
        binding.state = LazyState::Loaded;
        log::debug!("[Lazy] binding {:?} loaded {}", id, binding.src);
        true
    }

    /// Drop a binding, disconnecting its observer if still active
    pub fn unmount(&mut self, id: BindingId) -> bool {
        match self.bindings.remove(&id) {
            Some(binding) => {
                if binding.state == LazyState::Observing {
                    binding.observer.disconnect();
                }
                true
            }
            None => false,
        }
    }

}

#[cfg(test)]
impl<O: ViewportObserver, T: ImageTarget> LazyLoader<O, T> {
    pub fn state(&self, id: BindingId) -> Option<LazyState> {
        self.bindings.get(&id).map(|b| b.state)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn observing(&self) -> usize {
        self.bindings
            .values()
            .filter(|b| b.state == LazyState::Observing)
            .count()
    }
}

/// Run `op` against a shared loader. If the loader is already borrowed the
/// operation is handed back untouched so the caller can retry it later.
pub fn try_apply<L, F>(shared: &RefCell<L>, op: F) -> Result<(), F>
where
    F: FnOnce(&mut L),
{
    let Ok(mut inner) = shared.try_borrow_mut() else {
        return Err(op);
    };
    op(&mut inner);
    Ok(())
}

impl<O: ViewportObserver, T: ImageTarget> Drop for LazyLoader<O, T> {
    fn drop(&mut self) {
        for binding in self.bindings.values() {
            if binding.state == LazyState::Observing {
                binding.observer.disconnect();
            }
        }
    }
}
