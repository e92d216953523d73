mod cursor;
mod errors;
mod forward_list;
mod node;

pub use cursor::Cursor;
pub use errors::ListError;
pub use forward_list::{ForwardList, IntoIter, Iter};
