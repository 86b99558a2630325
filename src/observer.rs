use crate::console::{rupees, Console};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Hooks invoked around every price assignment.
pub trait PriceObserver {
    /// Called before the price changes, with the incoming value.
    fn will_set(&mut self, new_price: f64);
    /// Called after the price changed.
    fn did_set(&mut self, old_price: f64, new_price: f64);
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum PriceEvent {
    WillSet(f64),
    DidSet { old: f64, new: f64 },
}

/// Writes each hook invocation to the console.
pub struct ConsoleObserver(pub Console);

impl PriceObserver for ConsoleObserver {
    fn will_set(&mut self, new_price: f64) {
        self.0.say(format!("About to set price to {}", rupees(new_price)));
    }

    fn did_set(&mut self, old_price: f64, new_price: f64) {
        self.0.say(format!(
            "Price changed from {} to {}",
            rupees(old_price),
            rupees(new_price)
        ));
    }
}

/// Collects hook invocations. Clones share the same event log.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver(Rc<RefCell<Vec<PriceEvent>>>);

impl RecordingObserver {
    pub fn events(&self) -> Vec<PriceEvent> {
        self.0.borrow().clone()
    }
}

impl PriceObserver for RecordingObserver {
    fn will_set(&mut self, new_price: f64) {
        self.0.borrow_mut().push(PriceEvent::WillSet(new_price));
    }

    fn did_set(&mut self, old_price: f64, new_price: f64) {
        self.0.borrow_mut().push(PriceEvent::DidSet {
            old: old_price,
            new: new_price,
        });
    }
}

/// A price whose every assignment is observed.
pub struct StockValue {
    price: f64,
    observer: Box<dyn PriceObserver>,
}

impl StockValue {
    pub fn new(price: f64, observer: impl PriceObserver + 'static) -> Self {
        Self {
            price,
            observer: Box::new(observer),
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Assign a new price. Both hooks fire even when the value is unchanged.
    pub fn set_price(&mut self, new_price: f64) {
        self.observer.will_set(new_price);
        let old_price = std::mem::replace(&mut self.price, new_price);
        self.observer.did_set(old_price, new_price);
    }
}

impl std::fmt::Debug for StockValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockValue")
            .field("price", &self.price)
            .finish_non_exhaustive()
    }
}
