//! Fire-and-forget request tasks.

use std::future::Future;

/// Run a page's request future on the browser event loop.
///
/// Event handlers never fire during server rendering, so off the browser
/// the future is dropped unpolled.
pub fn spawn_request<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
