//! Task-local trace context for web requests.
//!
//! Holds the current request's trace_id in Tokio task-local storage so the
//! error renderer can stamp it into response bodies without threading it
//! through every call site. Scoped by the `RequestTrace` middleware.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Get the trace_id for the current task.
/// Returns "unknown" outside of a request context.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string())
        })
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future within a trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}

/// Run a synchronous closure within a trace context.
///
/// Middleware rejects before the request future is first polled, so the
/// async scope set up around that future is not yet entered; rendering the
/// error body inside this scope keeps the trace id available anyway.
pub fn with_trace_id_sync<F, R>(trace_id: String, f: F) -> R
where
    F: FnOnce() -> R,
{
    TRACE_ID.sync_scope(RefCell::new(Some(trace_id)), f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_outside_context() {
        assert_eq!(trace_id(), "unknown");
    }

    #[test]
    fn sync_scope_exposes_the_id() {
        let id = "trace-sync-456".to_string();

        let seen = with_trace_id_sync(id.clone(), trace_id);
        assert_eq!(seen, id);
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn scoped_within_context() {
        let id = "trace-abc-123".to_string();

        with_trace_id(id.clone(), async {
            assert_eq!(trace_id(), id);
        })
        .await;

        assert_eq!(trace_id(), "unknown");
    }
}
