//! releve-core: the tracker's transaction model, the French statement
//! locale, and the JSON transaction store.

pub mod locale;
pub mod store;
pub mod transaction;

pub use locale::{FRENCH, Locale};
pub use store::{read_transactions, write_transactions};
pub use transaction::{Transaction, TransactionType};
