// Lifetime accounting tests
// Every element constructed inside a container must be destroyed exactly once

#![allow(clippy::unwrap_used)]

use std::cell::Cell;
use std::rc::Rc;

use stowage::prelude::*;

#[derive(Debug, Default)]
struct Ledger {
    constructed: Cell<usize>,
    destroyed: Cell<usize>,
}

impl Ledger {
    fn live(&self) -> usize {
        self.constructed.get() - self.destroyed.get()
    }

    fn balanced(&self) -> bool {
        self.constructed.get() == self.destroyed.get()
    }
}

#[derive(Debug)]
struct Tracked {
    id: u32,
    ledger: Rc<Ledger>,
}

impl Tracked {
    fn new(id: u32, ledger: &Rc<Ledger>) -> Self {
        ledger.constructed.set(ledger.constructed.get() + 1);
        Self {
            id,
            ledger: Rc::clone(ledger),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.id, &self.ledger)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.destroyed.set(self.ledger.destroyed.get() + 1);
    }
}

#[test]
fn test_queue_push_pop_drop() {
    let ledger = Rc::new(Ledger::default());
    {
        let mut queue = RingQueue::<Tracked, 4>::new();
        for id in 0..4 {
            queue.push(Tracked::new(id, &ledger)).unwrap();
        }
        assert_eq!(ledger.live(), 4);

        // Rejected value is dropped by the failed push
        assert!(queue.push(Tracked::new(99, &ledger)).is_err());
        assert_eq!(ledger.live(), 4);

        let popped = queue.pop().unwrap();
        assert_eq!(popped.id, 0);
        drop(popped);
        assert_eq!(ledger.live(), 3);

        queue.push(Tracked::new(4, &ledger)).unwrap();
        queue.push(Tracked::new(5, &ledger)).unwrap_err();
        assert_eq!(ledger.live(), 4);
    }
    assert!(ledger.balanced());
}

#[test]
fn test_queue_overwrite_eviction() {
    let ledger = Rc::new(Ledger::default());
    {
        let mut queue = RingQueue::<Tracked, 2, Overwrite>::new();
        for id in 0..5 {
            let evicted = queue.push(Tracked::new(id, &ledger));
            if id >= 2 {
                assert_eq!(evicted.map(|t| t.id), Some(id - 2));
            }
        }
        assert_eq!(ledger.live(), 2);
    }
    assert!(ledger.balanced());
}

#[test]
fn test_queue_clone_clone_from_and_copy_from() {
    let ledger = Rc::new(Ledger::default());
    {
        let mut original = RingQueue::<Tracked, 3>::new();
        for id in 0..3 {
            original.push(Tracked::new(id, &ledger)).unwrap();
        }
        original.pop();
        original.push(Tracked::new(3, &ledger)).unwrap();

        let copy = original.clone();
        assert_eq!(ledger.live(), 6);

        let mut target = RingQueue::<Tracked, 3>::new();
        target.push(Tracked::new(10, &ledger)).unwrap();
        target.clone_from(&copy);
        assert_eq!(ledger.live(), 9);
        assert_eq!(target.front().map(|t| t.id), Some(1));

        let mut wide = RingQueue::<Tracked, 5>::new();
        wide.push(Tracked::new(20, &ledger)).unwrap();
        wide.copy_from(&original).unwrap();
        assert_eq!(ledger.live(), 12);

        let mut narrow = RingQueue::<Tracked, 2>::new();
        narrow.push(Tracked::new(30, &ledger)).unwrap();
        assert!(narrow.copy_from(&original).is_err());
        assert_eq!(ledger.live(), 13);

        narrow.clear();
        assert_eq!(ledger.live(), 12);
    }
    assert!(ledger.balanced());
}

#[test]
fn test_queue_swap_moves_without_copies() {
    let ledger = Rc::new(Ledger::default());
    {
        let mut a = RingQueue::<Tracked, 3>::new();
        let mut b = RingQueue::<Tracked, 3>::new();
        a.push(Tracked::new(1, &ledger)).unwrap();
        b.push(Tracked::new(2, &ledger)).unwrap();
        b.push(Tracked::new(3, &ledger)).unwrap();

        a.swap(&mut b);
        assert_eq!(ledger.constructed.get(), 3);
        assert_eq!(ledger.destroyed.get(), 0);
        assert_eq!(a.len(), 2);
        assert_eq!(b.front().map(|t| t.id), Some(1));
    }
    assert!(ledger.balanced());
}

#[test]
fn test_stack_accounting() {
    let ledger = Rc::new(Ledger::default());
    {
        let mut stack = BoundedStack::<Tracked, 3>::new();
        for id in 0..3 {
            stack.push(Tracked::new(id, &ledger)).unwrap();
        }
        assert!(stack.push(Tracked::new(9, &ledger)).is_err());
        assert_eq!(ledger.live(), 3);

        let copy = stack.clone();
        assert_eq!(ledger.live(), 6);

        drop(stack.pop());
        assert_eq!(ledger.live(), 5);

        let mut target = BoundedStack::<Tracked, 4>::new();
        target.push(Tracked::new(40, &ledger)).unwrap();
        target.copy_from(&copy).unwrap();
        assert_eq!(ledger.live(), 8);
        assert_eq!(target.top().map(|t| t.id), Some(2));

        stack.clear();
        assert_eq!(ledger.live(), 6);
    }
    assert!(ledger.balanced());
}
