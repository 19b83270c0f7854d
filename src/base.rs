pub mod aggregate;
pub mod cents;
pub mod charset;
pub mod chart;
pub mod config;
pub mod date;
pub mod fs;
pub mod interval;
pub mod kind;
pub mod ledger;
pub mod personal;
pub mod session;
pub mod sort;
pub mod store;
pub mod summary;
pub mod table;
pub mod transaction;
pub mod util;
pub mod view;

pub use aggregate::Totals;
pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use fs::Fs;
pub use interval::Interval;
pub use kind::Kind;
pub use ledger::Ledger;
pub use personal::PersonalDetails;
pub use session::Session;
pub use sort::Column;
pub use sort::Direction;
pub use sort::SortState;
pub use store::Store;
pub use transaction::Draft;
pub use transaction::Fields;
pub use transaction::Id;
pub use transaction::Patch;
pub use transaction::Transaction;
pub use transaction::ValidationError;
pub use view::Frame;
pub use view::Query;
