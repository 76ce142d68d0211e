//! Renderers module
//!
//! Turns the source text and its entities into the node sequence shown in
//! the browser, either wholesale or as in-place patches.

pub mod display_list;
pub mod view;

pub use display_list::{render, RenderNode};
pub use view::{DisplayList, DomOp, NodeId, View, ViewNode, ViewUpdate};
