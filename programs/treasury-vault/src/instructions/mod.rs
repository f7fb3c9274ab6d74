pub mod deposit;
pub mod initialize_treasury;
pub mod initialize_vault;
pub mod pay_interest;

pub use deposit::*;
pub use initialize_treasury::*;
pub use initialize_vault::*;
pub use pay_interest::*;
