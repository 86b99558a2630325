use crate::console::{rupees, Console};
use crate::models::{Investor, Portfolio, Stock};
use std::rc::Rc;

fn holdings_line(investor: &Investor) -> String {
    match &investor.portfolio {
        Some(portfolio) => {
            let count = portfolio.stocks().len();
            format!(
                "{} holds {} {} worth {}",
                investor.name,
                count,
                if count == 1 { "stock" } else { "stocks" },
                rupees(portfolio.total_value())
            )
        }
        None => format!("{} has no portfolio yet", investor.name),
    }
}

pub fn run(console: &Console) {
    let reliance = Rc::new(Stock::new("RELIANCE", 2400.0));
    let infy = Rc::new(Stock::new("INFY", 1600.0));

    // Secondary constructor builds the portfolio itself.
    let ravi = Investor::with_stocks("Ravi", vec![Rc::clone(&reliance), Rc::clone(&infy)]);
    console.say(holdings_line(&ravi));

    // Primary constructor, portfolio assigned afterwards.
    let mut asha = Investor::new("Asha");
    console.say(holdings_line(&asha));
    asha.assign_portfolio(Portfolio::new(vec![Rc::new(Stock::new("TCS", 3500.0))]));
    console.say(holdings_line(&asha));
}
