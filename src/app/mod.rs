pub mod session;

pub use session::{take_top, Answer, Selection, Session};
