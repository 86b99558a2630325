use crate::console::Console;
use crate::models::{StockLocation, StockTransaction};
use crate::regulator::Sebi;

pub fn run_mutation(console: &Console) {
    let original = StockTransaction::new("Infosys", 10);
    let mut copy = original.clone();
    copy.update_shares(5);

    console.say(format!(
        "Original: {} shares of {}",
        original.shares_bought, original.stock_name
    ));
    console.say(format!(
        "Updated copy: {} shares of {}",
        copy.shares_bought, copy.stock_name
    ));
}

pub fn run_value_vs_reference(console: &Console) {
    let mumbai = StockLocation::new(19.076, 72.8777);
    let mut delhi = mumbai;
    delhi.latitude = 28.6139;
    delhi.longitude = 77.209;
    console.say(format!(
        "Original location: {}, {}",
        mumbai.latitude, mumbai.longitude
    ));
    console.say(format!(
        "Copied location: {}, {}",
        delhi.latitude, delhi.longitude
    ));

    let sebi = Sebi::new("Insider trading is prohibited");
    let alias = sebi.clone();
    alias.set_rule("Circuit breaker at 10%");
    console.say(format!("SEBI rule via original: {}", sebi.rule()));
    console.say(format!("SEBI rule via copy: {}", alias.rule()));
}
