// src/lib.rs
pub mod broker;
pub mod config;
pub mod console;
pub mod demos;
pub mod error;
pub mod market;
pub mod models;
pub mod observer;
pub mod regulator;

// Re-export commonly used items
pub use broker::{Broker, BrokerHandle};
pub use config::Settings;
pub use console::{Console, OutputFormat};
pub use error::DemoError;
pub use market::{Exchange, Nse, StockMarketApp};
pub use models::*;
pub use observer::{PriceEvent, PriceObserver, StockValue};
pub use regulator::Sebi;
