#![forbid(unsafe_code)]

//! The memoized default-renderer handle.
//!
//! # Design
//!
//! [`DefaultSlot<R>`] wraps a default renderer together with the prop bag
//! that was current when the slot was bound, in a shared reference-counted
//! closure. The owning [`Delegate`](crate::delegate::Delegate) hands the slot
//! to the active render source, which can invoke it as-is or with an override
//! bag merged on top of the captured props.
//!
//! # Invariants
//!
//! 1. A slot always renders with the props captured at bind time; later
//!    changes to the delegate's prop bag are not visible through an existing
//!    slot.
//! 2. Cloning a slot clones a handle to the **same** bound closure;
//!    [`ptr_eq`](DefaultSlot::ptr_eq) observes that identity.
//! 3. Invocation is pure: the slot holds no mutable state.

use std::rc::Rc;

use crate::props::Props;

/// A fallback renderer: invoked with a full prop bag, produces output `R`.
pub type DefaultFn<R> = Rc<dyn Fn(&Props) -> R>;

/// A cached closure binding a default renderer to the props current at bind
/// time.
pub struct DefaultSlot<R> {
    inner: Rc<dyn Fn(&Props) -> R>,
}

impl<R> Clone for DefaultSlot<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R> std::fmt::Debug for DefaultSlot<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultSlot").finish_non_exhaustive()
    }
}

impl<R: 'static> DefaultSlot<R> {
    /// Bind `default` to a snapshot of `props`.
    pub(crate) fn bind(default: &DefaultFn<R>, props: &Props) -> Self {
        let default = Rc::clone(default);
        let bound = props.clone();
        Self {
            inner: Rc::new(move |overrides: &Props| (*default)(&bound.merged(overrides))),
        }
    }

    /// Render the default with the props captured at bind time.
    #[must_use]
    pub fn render(&self) -> R {
        (*self.inner)(&Props::new())
    }

    /// Render the default with `overrides` merged over the captured props.
    ///
    /// Overrides win on key collision.
    #[must_use]
    pub fn render_with(&self, overrides: &Props) -> R {
        (*self.inner)(overrides)
    }

    /// Whether two handles share one bound closure.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}
