//! Cancellation of in-flight requests: a newer request or unmount cancels the
//! previous one, and its result is dropped on arrival.

use std::cell::Cell;
use std::rc::Rc;

/// Shared cancelled flag plus an optional `AbortController` for the transport.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
    controller: Option<web_sys::AbortController>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token backed by a browser `AbortController`.
    pub fn abortable() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
            controller: web_sys::AbortController::new().ok(),
        }
    }

    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    pub fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }

    fn same(&self, other: &CancelToken) -> bool {
        Rc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

/// Holds the token of the request currently in flight.
#[derive(Default)]
pub struct RequestSlot {
    current: Option<CancelToken>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the previous request and makes `token` the current one.
    pub fn begin(&mut self, token: CancelToken) -> CancelToken {
        self.cancel();
        self.current = Some(token.clone());
        token
    }

    /// Releases the slot if `token` is still the current request.
    pub fn finish(&mut self, token: &CancelToken) {
        if self.current.as_ref().is_some_and(|c| c.same(token)) {
            self.current = None;
        }
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_cancels_previous() {
        let mut slot = RequestSlot::new();
        let first = slot.begin(CancelToken::new());
        let second = slot.begin(CancelToken::new());
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(slot.is_pending());
    }

    #[test]
    fn test_finish_only_releases_current() {
        let mut slot = RequestSlot::new();
        let first = slot.begin(CancelToken::new());
        let second = slot.begin(CancelToken::new());

        slot.finish(&first);
        assert!(slot.is_pending());
        slot.finish(&second);
        assert!(!slot.is_pending());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn test_cancel_on_unmount() {
        let mut slot = RequestSlot::new();
        let token = slot.begin(CancelToken::new());
        let seen_by_task = token.clone();
        slot.cancel();
        assert!(seen_by_task.is_cancelled());
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_plain_token_has_no_signal() {
        let token = CancelToken::new();
        assert!(token.signal().is_none());
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
