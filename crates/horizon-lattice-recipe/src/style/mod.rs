//! Style tree types.

mod block;
mod selector;
mod value;

pub use block::StyleBlock;
pub use selector::SelectorPath;
pub use value::PropertyValue;
