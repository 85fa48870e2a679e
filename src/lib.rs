#![forbid(unsafe_code)]

//! Rendering delegation for component trees.
//!
//! [`Delegate`] forwards one render pass to the first present of three
//! interchangeable sources (`to`, `render`, `children`, in that precedence),
//! optionally handing the chosen source a memoized default renderer
//! ([`DefaultSlot`]) it can invoke for fallback display. The slot is rebound
//! only when the default renderer's identity changes, so hosts can use slot
//! identity for render-skip checks.
//!
//! ```
//! use std::rc::Rc;
//! use render_delegate::{DefaultFn, Delegate, DelegateConfig, Props, RenderFn};
//!
//! let default: DefaultFn<String> =
//!     Rc::new(|props| props.get_str("label").unwrap_or("").to_string());
//! let to: RenderFn<String> = Rc::new(|props, slot| {
//!     let icon = props.get_str("icon").unwrap_or("");
//!     match slot {
//!         Some(slot) => format!("{icon} - {}", slot.render()),
//!         None => icon.to_string(),
//!     }
//! });
//!
//! let delegate = Delegate::new(
//!     DelegateConfig::new()
//!         .to(to)
//!         .default_renderer(default)
//!         .props(Props::new().with("icon", "search").with("label", "Find...")),
//! );
//! assert_eq!(delegate.render().as_deref(), Some("search - Find..."));
//! ```

pub mod delegate;
pub mod props;
pub mod slot;

pub use delegate::{Delegate, DelegateConfig, RenderFn};
pub use props::{PropValue, Props};
pub use slot::{DefaultFn, DefaultSlot};
