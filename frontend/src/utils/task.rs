use futures::future::{AbortHandle, Abortable};
use leptos::on_cleanup;
use std::{cell::RefCell, future::Future, rc::Rc};

use crate::api::ApiError;

/// Holds the in-flight request of one view.
///
/// Starting a new request aborts the previous one, and a slot created with
/// [`RequestSlot::scoped`] aborts when its reactive owner is disposed.
/// Aborted requests resolve to [`ApiError::cancelled`]; dropping the
/// underlying future also cancels the browser fetch.
#[derive(Clone, Default)]
pub struct RequestSlot {
    current: Rc<RefCell<Option<AbortHandle>>>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scoped() -> Self {
        let slot = Self::new();
        let owned = slot.clone();
        on_cleanup(move || owned.abort());
        slot
    }

    pub fn run<F, T>(&self, fut: F) -> impl Future<Output = Result<T, ApiError>>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.current.borrow_mut().replace(handle) {
            previous.abort();
        }
        let guarded = Abortable::new(fut, registration);
        async move {
            match guarded.await {
                Ok(result) => result,
                Err(_) => {
                    log::debug!("request aborted");
                    Err(ApiError::cancelled())
                }
            }
        }
    }

    pub fn abort(&self) {
        if let Some(handle) = self.current.borrow_mut().take() {
            handle.abort();
        }
    }
}
