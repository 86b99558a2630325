use crate::console::rupees;
use crate::models::StockLocation;
use serde::Serialize;

/// StockMarketApp holds a user's trading funds.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct StockMarketApp {
    user_funds: f64,
}

impl StockMarketApp {
    /// Returns `None` unless `funds` is a non-negative number.
    pub fn new(funds: f64) -> Option<Self> {
        if funds.is_nan() || funds < 0.0 {
            tracing::warn!("rejected funds: {}", funds);
            return None;
        }
        Some(Self { user_funds: funds })
    }

    pub fn user_funds(&self) -> f64 {
        self.user_funds
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Behaviour of a stock exchange. Sealed: [`Nse`] is the only implementor.
pub trait Exchange: sealed::Sealed {
    fn name(&self) -> &str;

    fn total_funds(&self) -> f64;

    fn fund_summary(&self) -> String {
        format!("{} manages total funds of {}", self.name(), rupees(self.total_funds()))
    }
}

/// The National Stock Exchange. There is exactly one, obtained from
/// [`Nse::shared`].
#[derive(Debug)]
pub struct Nse {
    name: String,
    location: StockLocation,
}

lazy_static::lazy_static! {
    static ref NSE: Nse = Nse {
        name: "NSE".to_string(),
        location: StockLocation::new(19.0600, 72.8656),
    };
}

impl Nse {
    pub const TOTAL_FUNDS: f64 = 1_000_000.0;

    pub fn shared() -> &'static Nse {
        &NSE
    }

    /// Bandra Kurla Complex, Mumbai.
    pub fn location(&self) -> StockLocation {
        self.location
    }
}

impl sealed::Sealed for Nse {}

impl Exchange for Nse {
    fn name(&self) -> &str {
        &self.name
    }

    fn total_funds(&self) -> f64 {
        Self::TOTAL_FUNDS
    }
}
