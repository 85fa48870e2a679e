#![forbid(unsafe_code)]

//! Select-and-invoke rendering delegation.
//!
//! # Design
//!
//! [`Delegate<R>`] owns a [`DelegateConfig<R>`] naming up to three render
//! sources (`to`, `render`, `children`) plus an optional default renderer.
//! Each render pass picks the first present source by that fixed precedence
//! and invokes it; when no source is present the default renders directly.
//! The chosen source is handed a [`DefaultSlot`] it can invoke for fallback
//! display, bound once and kept while the default renderer's identity is
//! unchanged so downstream identity-based render-skip checks keep working.
//!
//! # Invariants
//!
//! 1. Exactly one source renders per pass; precedence is `to` over `render`
//!    over `children`.
//! 2. The bound slot reflects the current default renderer and the props at
//!    bind time. A props-only configuration change never rebinds it.
//! 3. [`update`](Delegate::update) rebinds only when `pass_default` is set,
//!    a default is present, and the default's reference identity differs
//!    from the previous configuration's.
//! 4. [`render`](Delegate::render) is pure: it reads the configuration and
//!    the slot, mutates nothing.
//!
//! # Failure Modes
//!
//! - **Source assumes an absent slot**: a source that unconditionally
//!   unwraps its slot argument panics when `pass_default` is off or no
//!   default is configured. The panic is caller-induced and propagates
//!   unmodified.
//! - **Nothing configured**: `render` returns `None`; no error is raised.

use std::rc::Rc;

use crate::props::Props;
use crate::slot::{DefaultFn, DefaultSlot};

/// A render source: invoked with the delegate's prop bag and, when
/// configured, the memoized default slot.
pub type RenderFn<R> = Rc<dyn Fn(&Props, Option<&DefaultSlot<R>>) -> R>;

/// Configuration for a [`Delegate`].
///
/// Builder-style: start from [`DelegateConfig::new`] and chain setters.
/// Cloning a configuration clones source *handles*, so a cloned-and-tweaked
/// configuration keeps the original renderer identities — that is what the
/// memoization check compares across updates.
pub struct DelegateConfig<R> {
    to: Option<RenderFn<R>>,
    render: Option<RenderFn<R>>,
    children: Option<RenderFn<R>>,
    default: Option<DefaultFn<R>>,
    props: Props,
    pass_default: bool,
}

impl<R> DelegateConfig<R> {
    /// An empty configuration: no sources, no default, empty props,
    /// `pass_default` on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            to: None,
            render: None,
            children: None,
            default: None,
            props: Props::new(),
            pass_default: true,
        }
    }

    /// Set the highest-precedence render source.
    #[must_use]
    pub fn to(mut self, source: RenderFn<R>) -> Self {
        self.to = Some(source);
        self
    }

    /// Set the second-precedence render source.
    #[must_use]
    pub fn render(mut self, source: RenderFn<R>) -> Self {
        self.render = Some(source);
        self
    }

    /// Set the third-precedence render source (child content).
    #[must_use]
    pub fn children(mut self, source: RenderFn<R>) -> Self {
        self.children = Some(source);
        self
    }

    /// Set the fallback renderer.
    #[must_use]
    pub fn default_renderer(mut self, default: DefaultFn<R>) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the prop bag forwarded to the active source.
    #[must_use]
    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Set whether the memoized default slot is computed and injected.
    #[must_use]
    pub fn pass_default(mut self, pass_default: bool) -> Self {
        self.pass_default = pass_default;
        self
    }

    /// The current prop bag.
    #[must_use]
    pub fn props_ref(&self) -> &Props {
        &self.props
    }

    /// Whether slot injection is enabled.
    #[must_use]
    pub fn passes_default(&self) -> bool {
        self.pass_default
    }

    /// Whether any render source is configured.
    #[must_use]
    pub fn has_source(&self) -> bool {
        self.to.is_some() || self.render.is_some() || self.children.is_some()
    }
}

impl<R> Default for DelegateConfig<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for DelegateConfig<R> {
    fn clone(&self) -> Self {
        Self {
            to: self.to.clone(),
            render: self.render.clone(),
            children: self.children.clone(),
            default: self.default.clone(),
            props: self.props.clone(),
            pass_default: self.pass_default,
        }
    }
}

impl<R> std::fmt::Debug for DelegateConfig<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegateConfig")
            .field("to", &self.to.is_some())
            .field("render", &self.render.is_some())
            .field("children", &self.children.is_some())
            .field("default", &self.default.is_some())
            .field("props", &self.props)
            .field("pass_default", &self.pass_default)
            .finish()
    }
}

/// The delegation component: one configuration plus at most one bound slot.
pub struct Delegate<R> {
    config: DelegateConfig<R>,
    slot: Option<DefaultSlot<R>>,
}

impl<R: 'static> Delegate<R> {
    /// Construct from a configuration.
    ///
    /// Binds the default slot now if a default renderer is present and
    /// `pass_default` is on.
    #[must_use]
    pub fn new(config: DelegateConfig<R>) -> Self {
        let slot = match (&config.default, config.pass_default) {
            (Some(default), true) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(target: "render_delegate", "default slot bound");
                Some(DefaultSlot::bind(default, &config.props))
            }
            _ => None,
        };
        Self { config, slot }
    }

    /// Receive the next configuration.
    ///
    /// Rebinds the slot only when `next` enables injection, carries a
    /// default, and that default's reference identity differs from the
    /// previous configuration's (absent previous counts as differing).
    /// A props-only change keeps the existing slot, including its captured
    /// props.
    pub fn update(&mut self, next: DelegateConfig<R>) {
        if next.pass_default {
            if let Some(next_default) = &next.default {
                let changed = match &self.config.default {
                    Some(prev) => !Rc::ptr_eq(prev, next_default),
                    None => true,
                };
                if changed {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        target: "render_delegate",
                        "default slot rebound: renderer identity changed"
                    );
                    self.slot = Some(DefaultSlot::bind(next_default, &next.props));
                }
            }
        }
        self.config = next;
    }

    /// Produce one render pass.
    ///
    /// Picks the first present of `to`, `render`, `children`; falls back to
    /// invoking the default directly; returns `None` when nothing is
    /// configured.
    #[must_use]
    pub fn render(&self) -> Option<R> {
        let active = self
            .config
            .to
            .as_ref()
            .or(self.config.render.as_ref())
            .or(self.config.children.as_ref());

        let Some(active) = active else {
            let default = self.config.default.as_ref()?;
            return Some((**default)(&self.config.props));
        };

        if self.config.default.is_none() || !self.config.pass_default {
            return Some((**active)(&self.config.props, None));
        }

        Some((**active)(&self.config.props, self.slot.as_ref()))
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &DelegateConfig<R> {
        &self.config
    }

    /// The bound slot, if any.
    #[must_use]
    pub fn default_slot(&self) -> Option<&DefaultSlot<R>> {
        self.slot.as_ref()
    }
}

impl<R> std::fmt::Debug for Delegate<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delegate")
            .field("config", &self.config)
            .field("slot_bound", &self.slot.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_default() -> DefaultFn<String> {
        Rc::new(|props: &Props| props.get_str("label").unwrap_or("").to_string())
    }

    fn passthrough_source() -> RenderFn<String> {
        Rc::new(|props: &Props, _| props.get_str("label").unwrap_or("").to_string())
    }

    #[test]
    fn construction_binds_slot_when_default_present() {
        let delegate = Delegate::new(DelegateConfig::new().default_renderer(label_default()));
        assert!(delegate.default_slot().is_some());
    }

    #[test]
    fn construction_skips_slot_without_default() {
        let delegate = Delegate::<String>::new(DelegateConfig::new());
        assert!(delegate.default_slot().is_none());
    }

    #[test]
    fn construction_skips_slot_when_pass_default_off() {
        let delegate = Delegate::new(
            DelegateConfig::new()
                .default_renderer(label_default())
                .pass_default(false),
        );
        assert!(delegate.default_slot().is_none());
    }

    #[test]
    fn update_binds_slot_when_default_appears() {
        let mut delegate = Delegate::<String>::new(DelegateConfig::new());
        assert!(delegate.default_slot().is_none());

        delegate.update(DelegateConfig::new().default_renderer(label_default()));
        assert!(delegate.default_slot().is_some());
    }

    #[test]
    fn update_keeps_stale_none_for_unchanged_default() {
        // Bound once off, re-enabling injection without changing the default
        // renderer does not bind: the rebind test fires on identity change
        // only. Carried over from the original behavior.
        let default = label_default();
        let config = DelegateConfig::new()
            .default_renderer(Rc::clone(&default))
            .pass_default(false);
        let mut delegate = Delegate::<String>::new(config.clone());
        assert!(delegate.default_slot().is_none());

        delegate.update(config.pass_default(true));
        assert!(delegate.default_slot().is_none());
    }

    #[test]
    fn update_with_pass_default_off_keeps_previous_slot() {
        let default = label_default();
        let config = DelegateConfig::new().default_renderer(Rc::clone(&default));
        let mut delegate = Delegate::<String>::new(config.clone());
        let first = delegate.default_slot().cloned().unwrap();

        delegate.update(config.pass_default(false));
        let second = delegate.default_slot().cloned().unwrap();
        assert!(DefaultSlot::ptr_eq(&first, &second));
    }

    #[test]
    fn debug_reports_presence_not_closures() {
        let delegate = Delegate::new(
            DelegateConfig::new()
                .to(passthrough_source())
                .default_renderer(label_default()),
        );
        let dbg = format!("{delegate:?}");
        assert!(dbg.contains("Delegate"));
        assert!(dbg.contains("slot_bound: true"));
    }

    #[test]
    fn has_source_reflects_any_source() {
        assert!(!DelegateConfig::<String>::new().has_source());
        assert!(DelegateConfig::new().children(passthrough_source()).has_source());
    }
}
