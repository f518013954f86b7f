pub mod executor;

pub use executor::HistoryExecutor;
