pub mod lifecycle;
pub mod slots;
