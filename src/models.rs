use crate::console::rupees;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Anything that can render a one-line description of itself.
pub trait Describe {
    fn describe(&self) -> String;
}

/// Stock represents a listed equity.
/// It has a ticker and a price in rupees.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Stock {
    pub ticker: String,
    pub price: f64,
}

impl Stock {
    pub fn new(ticker: impl Into<String>, price: f64) -> Self {
        Self {
            ticker: ticker.into(),
            price,
        }
    }
}

impl Describe for Stock {
    fn describe(&self) -> String {
        format!("{}: {}", self.ticker, rupees(self.price))
    }
}

/// A stock issued by a technology company, described with its company name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TechStock {
    #[serde(flatten)]
    pub stock: Stock,
    pub company_name: String,
}

impl TechStock {
    pub fn new(ticker: impl Into<String>, price: f64, company_name: impl Into<String>) -> Self {
        Self {
            stock: Stock::new(ticker, price),
            company_name: company_name.into(),
        }
    }
}

impl Describe for TechStock {
    fn describe(&self) -> String {
        format!(
            "{} ({}): {}",
            self.company_name,
            self.stock.ticker,
            rupees(self.stock.price)
        )
    }
}

/// Closed set of listing kinds. Lets callers hold either kind of stock and
/// get the variant-specific description.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Listing {
    Plain(Stock),
    Tech(TechStock),
}

impl Listing {
    /// The base stock data, whatever the variant.
    pub fn stock(&self) -> &Stock {
        match self {
            Listing::Plain(stock) => stock,
            Listing::Tech(tech) => &tech.stock,
        }
    }
}

impl Describe for Listing {
    fn describe(&self) -> String {
        match self {
            Listing::Plain(stock) => stock.describe(),
            Listing::Tech(tech) => tech.describe(),
        }
    }
}

impl From<Stock> for Listing {
    fn from(stock: Stock) -> Self {
        Listing::Plain(stock)
    }
}

impl From<TechStock> for Listing {
    fn from(tech: TechStock) -> Self {
        Listing::Tech(tech)
    }
}

/// An ordered collection of shared stock handles.
///
/// The list can only change by being replaced wholesale.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    stocks: Vec<Rc<Stock>>,
}

impl Portfolio {
    pub fn new(stocks: Vec<Rc<Stock>>) -> Self {
        Self { stocks }
    }

    pub fn stocks(&self) -> &[Rc<Stock>] {
        &self.stocks
    }

    /// Sum of the prices of every held stock.
    pub fn total_value(&self) -> f64 {
        self.stocks.iter().map(|s| s.price).sum()
    }

    pub fn replace_stocks(&mut self, stocks: Vec<Rc<Stock>>) {
        self.stocks = stocks;
    }
}

/// Investor represents a person who may own a portfolio.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Investor {
    pub name: String,
    pub portfolio: Option<Portfolio>,
}

impl Investor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            portfolio: None,
        }
    }

    /// Build an investor and a portfolio holding `stocks` in one step.
    pub fn with_stocks(name: impl Into<String>, stocks: Vec<Rc<Stock>>) -> Self {
        let mut investor = Self::new(name);
        investor.assign_portfolio(Portfolio::new(stocks));
        investor
    }

    pub fn assign_portfolio(&mut self, portfolio: Portfolio) {
        self.portfolio = Some(portfolio);
    }

    /// Value of the portfolio, or zero when the investor holds none.
    pub fn portfolio_value(&self) -> f64 {
        self.portfolio
            .as_ref()
            .map(Portfolio::total_value)
            .unwrap_or(0.0)
    }
}

/// A purchase record. Copies are independent of each other.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StockTransaction {
    pub stock_name: String,
    pub shares_bought: i64,
}

impl StockTransaction {
    pub fn new(stock_name: impl Into<String>, shares_bought: i64) -> Self {
        Self {
            stock_name: stock_name.into(),
            shares_bought,
        }
    }

    /// Add `delta` shares to this record.
    pub fn update_shares(&mut self, delta: i64) {
        self.shares_bought += delta;
    }
}

/// Geographic location of an exchange or listing office.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct StockLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl StockLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tech_stock_overrides_description() {
        let tcs = TechStock::new("TCS", 3500.0, "Tata Consultancy Services");
        assert_eq!(tcs.describe(), "Tata Consultancy Services (TCS): ₹3500.0");
        assert_eq!(tcs.stock.describe(), "TCS: ₹3500.0");
    }

    #[test]
    fn listing_dispatches_to_variant() {
        let listings: Vec<Listing> = vec![
            Stock::new("RELIANCE", 2400.0).into(),
            TechStock::new("INFY", 1600.0, "Infosys").into(),
        ];
        let described: Vec<String> = listings.iter().map(|l| l.describe()).collect();
        assert_eq!(described, vec!["RELIANCE: ₹2400.0", "Infosys (INFY): ₹1600.0"]);
        assert_eq!(listings[1].stock().ticker, "INFY");
    }

    #[test]
    fn portfolio_total_is_sum_of_prices() {
        let portfolio = Portfolio::new(vec![
            Rc::new(Stock::new("RELIANCE", 2400.0)),
            Rc::new(Stock::new("INFY", 1600.0)),
        ]);
        assert_eq!(portfolio.total_value(), 4000.0);
        assert_eq!(Portfolio::default().total_value(), 0.0);
    }

    #[test]
    fn portfolio_shares_stock_handles() {
        let reliance = Rc::new(Stock::new("RELIANCE", 2400.0));
        let portfolio = Portfolio::new(vec![Rc::clone(&reliance)]);
        assert!(Rc::ptr_eq(&portfolio.stocks()[0], &reliance));
        assert_eq!(Rc::strong_count(&reliance), 2);
    }

    #[test]
    fn replacing_stocks_changes_total() {
        let mut portfolio = Portfolio::new(vec![Rc::new(Stock::new("RELIANCE", 2400.0))]);
        portfolio.replace_stocks(vec![
            Rc::new(Stock::new("HDFCBANK", 1500.0)),
            Rc::new(Stock::new("ITC", 450.5)),
        ]);
        assert_eq!(portfolio.stocks().len(), 2);
        assert_eq!(portfolio.total_value(), 1950.5);
    }

    #[test]
    fn investor_constructors() {
        let bare = Investor::new("Asha");
        assert!(bare.portfolio.is_none());
        assert_eq!(bare.portfolio_value(), 0.0);

        let invested = Investor::with_stocks(
            "Ravi",
            vec![
                Rc::new(Stock::new("RELIANCE", 2400.0)),
                Rc::new(Stock::new("INFY", 1600.0)),
            ],
        );
        assert_eq!(invested.name, "Ravi");
        assert_eq!(invested.portfolio_value(), 4000.0);
    }

    #[test]
    fn investor_can_receive_portfolio_later() {
        let mut investor = Investor::new("Asha");
        investor.assign_portfolio(Portfolio::new(vec![Rc::new(Stock::new("TCS", 3500.0))]));
        assert_eq!(investor.portfolio_value(), 3500.0);
    }

    #[test]
    fn transaction_update_only_touches_own_copy() {
        let original = StockTransaction::new("Infosys", 10);
        let mut copy = original.clone();
        copy.update_shares(5);
        assert_eq!(copy.shares_bought, 15);
        assert_eq!(original.shares_bought, 10);
    }

    #[test]
    fn location_copies_are_independent() {
        let mumbai = StockLocation::new(19.0760, 72.8777);
        let mut moved = mumbai;
        moved.latitude = 28.6139;
        moved.longitude = 77.2090;
        assert_eq!(mumbai, StockLocation::new(19.0760, 72.8777));
        assert_ne!(mumbai, moved);
    }

    #[test]
    fn tech_stock_serializes_flat() {
        let tcs = TechStock::new("TCS", 3500.0, "Tata Consultancy Services");
        let json = serde_json::to_value(&tcs).unwrap();
        assert_eq!(json["ticker"], "TCS");
        assert_eq!(json["company_name"], "Tata Consultancy Services");
    }
}
