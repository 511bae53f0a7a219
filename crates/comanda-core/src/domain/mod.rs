pub mod customer;
pub mod ids;
pub mod meal;
pub mod money;
pub mod waiter;

pub use ids::{CustomerId, MealId, WaiterId};
pub use money::Money;
