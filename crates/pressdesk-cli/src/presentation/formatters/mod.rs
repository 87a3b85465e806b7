pub mod text;

pub use text::{excerpt, truncate};
