//! Request and response shapes exchanged with the 9jaPay API.
//!
//! Field names follow the camelCase wire format; query parameters use the
//! hyphenated keys the API expects.

mod balances;
mod envelope;
mod transactions;
mod transfers;
mod virtual_accounts;

pub use balances::*;
pub use envelope::*;
pub use transactions::*;
pub use transfers::*;
pub use virtual_accounts::*;
