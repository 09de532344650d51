//! Bridge between the browser controller and the WebViews.
//!
//! Handles coordinate conversion, chrome IPC dispatch, and keeping page
//! WebViews mounted and sized.

pub(super) mod bounds;
mod ipc_dispatch;
mod lifecycle;
