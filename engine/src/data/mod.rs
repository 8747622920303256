// Price history sources
pub mod csv_parser;
pub mod market_data;
pub mod provider;
pub mod yahoo;

pub use csv_parser::CsvDirectoryProvider;
pub use market_data::MarketDataStore;
pub use provider::PriceProvider;
pub use yahoo::YahooFinanceProvider;
