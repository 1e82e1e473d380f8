mod deposit;
mod get_balance;
mod list_expenses;
mod record_expense;
mod set_tab;

pub use deposit::*;
pub use get_balance::*;
pub use list_expenses::*;
pub use record_expense::*;
pub use set_tab::*;
