pub mod assessments;
pub mod diagnostic;
pub mod health;
pub mod instruments;
pub mod recommendations;
pub mod reports;
pub mod schema;
pub mod scores;
