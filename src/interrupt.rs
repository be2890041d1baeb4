//! Interrupt state shared between the signal handler and the pipeline.
//!
//! Compute loops poll [`Interrupt::flag`] and wind down on their own. A read
//! that is parked in the kernel cannot be woken that way, so the handler is
//! told to end the process itself while the pipeline is inside
//! [`Interrupt::blocking`], or on a repeated interrupt.

use std::sync::atomic::{AtomicBool, Ordering};

pub const INTERRUPTED_MESSAGE: &str = "script interrupted";

#[derive(Debug, Default)]
pub struct Interrupt {
    requested: AtomicBool,
    blocking: AtomicBool,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interrupt. Returns `true` when the handler should exit the
    /// process now instead of waiting for the pipeline to notice.
    pub fn raise(&self) -> bool {
        let repeated = self.requested.swap(true, Ordering::SeqCst);
        repeated || self.blocking.load(Ordering::SeqCst)
    }

    pub fn is_raised(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// The flag polled by the generator, loader and reporter.
    pub fn flag(&self) -> &AtomicBool {
        &self.requested
    }

    /// Run `f` with the process marked as parked in blocking I/O.
    pub fn blocking<T>(&self, f: impl FnOnce() -> T) -> T {
        self.blocking.store(true, Ordering::SeqCst);
        let out = f();
        self.blocking.store(false, Ordering::SeqCst);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_interrupt_outside_io_is_left_to_the_pipeline() {
        let interrupt = Interrupt::new();
        assert!(!interrupt.is_raised());
        assert!(!interrupt.raise());
        assert!(interrupt.is_raised());
        assert!(interrupt.flag().load(Ordering::SeqCst));
    }

    #[test]
    fn second_interrupt_exits() {
        let interrupt = Interrupt::new();
        assert!(!interrupt.raise());
        assert!(interrupt.raise());
    }

    #[test]
    fn interrupt_during_blocking_io_exits() {
        let interrupt = Interrupt::new();
        let exit_now = interrupt.blocking(|| interrupt.raise());
        assert!(exit_now);
    }

    #[test]
    fn blocking_section_ends_with_the_closure() {
        let interrupt = Interrupt::new();
        assert_eq!(interrupt.blocking(|| 7), 7);
        assert!(!interrupt.raise());
    }
}
