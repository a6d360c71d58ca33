mod node;
mod value;

pub use node::MessageNode;
pub use value::{Value, Values};
