pub mod health;
pub mod rating;
pub mod recommendation;
