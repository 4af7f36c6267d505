mod chat;
mod designer;

pub use chat::{ChatState, show_chat};
pub use designer::{DesignerState, show_designer};
