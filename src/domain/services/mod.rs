pub mod format;
pub mod reference;
