use crate::console::Console;
use crate::models::{Describe, Listing, Stock, TechStock};

pub fn run(console: &Console) {
    let listings: Vec<Listing> = vec![
        Stock::new("RELIANCE", 2400.0).into(),
        TechStock::new("TCS", 3500.0, "Tata Consultancy Services").into(),
    ];

    for listing in &listings {
        console.say(listing.describe());
    }
}
