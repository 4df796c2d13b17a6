pub use either::{Either, Left, Right};
pub use optional::{Empty, Optional, Present};
