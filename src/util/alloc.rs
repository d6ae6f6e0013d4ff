use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// Hands out [`Counted`] tokens and keeps track of how many of them have been dropped.
#[derive(Debug, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track(&self) -> Counted {
        Counted(Rc::clone(&self.0))
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
pub struct Counted(Rc<Cell<usize>>);

impl Drop for Counted {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
