use std::{
    any::Any,
    fmt,
    future::Future,
    ops::{Deref, DerefMut},
    pin::Pin,
    task::{Context, Poll},
};

use tokio::task::{JoinError, JoinHandle};

/// A type that can not be instantiated
pub(crate) enum Never {}

/// A wrapper around `tokio::task::JoinHandle` that aborts the task when the wrapper is dropped,
/// while allowing access to the handle.
///
/// Aborting does not run the task to completion; the task's owned resources are dropped at the
/// next await point. The monitor process is written so that dropping it releases the signal
/// reader.
#[derive(Debug)]
pub(crate) struct AbortOnDropHandle<T>(JoinHandle<T>);

impl<T> From<JoinHandle<T>> for AbortOnDropHandle<T> {
    fn from(handle: JoinHandle<T>) -> Self {
        Self(handle)
    }
}

impl<T> Deref for AbortOnDropHandle<T> {
    type Target = JoinHandle<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for AbortOnDropHandle<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Future for AbortOnDropHandle<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl<T> Drop for AbortOnDropHandle<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Debug)]
pub struct PanicPayload(String);

impl From<Box<dyn Any + Send>> for PanicPayload {
    fn from(value: Box<dyn Any + Send>) -> Self {
        let panic_msg = if let Some(s) = value.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = value.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "unknown panic payload".to_string()
        };

        Self(panic_msg)
    }
}

impl fmt::Display for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::panic::{self, AssertUnwindSafe};

    use tokio::{sync::oneshot, time};

    #[tokio::test]
    async fn handle_aborts_task_on_drop() {
        let (tx, rx) = oneshot::channel::<()>();

        let handle = AbortOnDropHandle::from(tokio::spawn(async move {
            // Held until the task is dropped
            let _tx = tx;
            time::sleep(time::Duration::from_secs(3600)).await;
        }));

        drop(handle);

        // The sender is dropped together with the aborted task
        assert!(rx.await.is_err());
    }

    #[test]
    fn panic_payload_captures_str_message() {
        let payload = panic::catch_unwind(AssertUnwindSafe(|| panic!("boom"))).unwrap_err();
        assert_eq!(PanicPayload::from(payload).to_string(), "boom");
    }

    #[test]
    fn panic_payload_captures_string_message() {
        let payload =
            panic::catch_unwind(AssertUnwindSafe(|| panic!("{}", String::from("formatted boom"))))
                .unwrap_err();
        assert_eq!(PanicPayload::from(payload).to_string(), "formatted boom");
    }
}
