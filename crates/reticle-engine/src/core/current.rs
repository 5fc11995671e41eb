//! Optional "current context" for free-function call sites.
//!
//! The slot is thread-local: each thread sees its own current context, and a
//! context is never shared across threads through this module. Everything here
//! forwards to [`Context`] methods.

use std::cell::RefCell;
use std::rc::Rc;

use crate::id::Id;
use crate::scene::DrawList;

use super::Context;

/// Shared handle stored in the current-context slot.
pub type ContextHandle = Rc<RefCell<Context>>;

thread_local! {
    static CURRENT: RefCell<Option<ContextHandle>> = const { RefCell::new(None) };
}

/// Makes `ctx` current on this thread, returning the previous one.
pub fn set_current(ctx: ContextHandle) -> Option<ContextHandle> {
    CURRENT.with(|slot| slot.borrow_mut().replace(ctx))
}

/// Clears the current context on this thread, returning it.
pub fn take_current() -> Option<ContextHandle> {
    CURRENT.with(|slot| slot.borrow_mut().take())
}

/// Returns the current context handle, if any.
pub fn current() -> Option<ContextHandle> {
    CURRENT.with(|slot| slot.borrow().clone())
}

/// Runs `f` against the current context.
///
/// # Panics
/// Panics if no context is current, or if the context is already borrowed
/// (e.g. calling `with_current` from inside a draw callback).
pub fn with_current<R>(f: impl FnOnce(&mut Context) -> R) -> R {
    let Some(handle) = current() else {
        panic!("no current reticle context on this thread; call set_current first");
    };
    let mut ctx = handle.borrow_mut();
    f(&mut ctx)
}

pub fn new_frame() {
    with_current(|ctx| ctx.reset_frame());
}

pub fn end_frame(draw: impl FnMut(&DrawList<'_>)) {
    with_current(|ctx| ctx.end_frame(draw));
}

pub fn active_id() -> Id {
    with_current(|ctx| ctx.active_id())
}
