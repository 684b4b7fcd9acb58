//! Page content: persisted section records, the key-namespacing scheme,
//! compiled-in defaults, and the resolver that overlays one onto the other.

pub mod defaults;
pub mod key;
pub mod model;
pub mod resolve;
