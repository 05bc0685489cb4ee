//! Mindmap extraction from the document model.
//!
//! Two layers: [`extract_list`] turns one marked list into nodes, and
//! [`extract_outline`] assembles the whole forest by walking headings and
//! lists in document order.

mod list;
mod outline;

pub use list::extract_list;
pub use outline::extract_outline;
