use crate::console::{rupees, Console};
use crate::market::{Exchange, Nse, StockMarketApp};

pub fn run_fallible(console: &Console) {
    for funds in [50_000.0, -100.0] {
        match StockMarketApp::new(funds) {
            Some(app) => console.say(format!("App created with funds {}", rupees(app.user_funds()))),
            None => console.say(format!("Invalid funds: {}", rupees(funds))),
        }
    }
}

pub fn run_sealed(console: &Console) {
    console.say(Nse::shared().fund_summary());
}
