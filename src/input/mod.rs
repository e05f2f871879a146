mod helper;

pub use helper::{InputHelper, ThemeHandle};
