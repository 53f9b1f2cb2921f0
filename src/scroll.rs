//! Background scroll locking
//!
//! While an overlay is mounted the main canvas must not scroll. Each mounted
//! overlay holds a [`ScrollLock`]; the canvas scrolls only when no lock is
//! outstanding. Locks release on drop, so an overlay torn down by a panic
//! still gives scrolling back.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

/// Scroll state of the main canvas, shared between the shell and the canvas
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    locks: Rc<Cell<usize>>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locks.get() > 0
    }

    pub fn lock(&self) -> ScrollLock {
        let depth = self.locks.get() + 1;
        self.locks.set(depth);
        debug!(depth, "page scroll locked");
        ScrollLock {
            locks: Rc::clone(&self.locks),
        }
    }
}

/// Guard that keeps the main canvas from scrolling while alive
#[derive(Debug)]
pub struct ScrollLock {
    locks: Rc<Cell<usize>>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let depth = self.locks.get().saturating_sub(1);
        self.locks.set(depth);
        debug!(depth, "page scroll lock released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_lock_and_release() {
        let scroll = PageScroll::new();
        assert!(!scroll.is_locked());

        let lock = scroll.lock();
        assert!(scroll.is_locked());

        drop(lock);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_nested_locks() {
        let scroll = PageScroll::new();
        let outer = scroll.lock();
        let inner = scroll.lock();
        drop(outer);
        assert!(scroll.is_locked());
        drop(inner);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_lock_released_on_panic() {
        let scroll = PageScroll::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _lock = scroll.lock();
            panic!("overlay render failed");
        }));
        assert!(result.is_err());
        assert!(!scroll.is_locked());
    }
}
