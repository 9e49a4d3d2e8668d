pub mod button;
pub mod field;

pub use button::{Button, ButtonVariant};
pub use field::{ChoiceField, InputKind, NoteField, TextField};
