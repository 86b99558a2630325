use crate::console::Console;
use crate::observer::{ConsoleObserver, StockValue};

pub fn run(console: &Console) {
    let mut value = StockValue::new(1000.0, ConsoleObserver(console.clone()));
    value.set_price(1200.0);
    value.set_price(1500.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_assignment_is_bracketed_by_hooks() {
        let console = Console::new();
        run(&console);
        assert_eq!(
            console.lines(),
            vec![
                "About to set price to ₹1200.0".to_string(),
                "Price changed from ₹1000.0 to ₹1200.0".to_string(),
                "About to set price to ₹1500.0".to_string(),
                "Price changed from ₹1200.0 to ₹1500.0".to_string(),
            ]
        );
    }
}
