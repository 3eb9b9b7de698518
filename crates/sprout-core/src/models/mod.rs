pub mod emotion;
pub mod recommendation;
pub mod screening;
