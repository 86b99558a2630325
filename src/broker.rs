use crate::console::Console;
use std::rc::Rc;

/// Broker represents an intermediary handling trades for clients.
///
/// A broker is only reachable through [`BrokerHandle`]s. When the last handle
/// is released the broker announces that it is no longer handling clients.
#[derive(Debug)]
pub struct Broker {
    name: String,
    active_clients: u32,
    console: Console,
}

impl Broker {
    /// Create a broker owned by a single handle.
    pub fn open(name: impl Into<String>, active_clients: u32, console: &Console) -> BrokerHandle {
        let broker = Broker {
            name: name.into(),
            active_clients,
            console: console.clone(),
        };
        tracing::info!(
            "broker {} opened with {} active clients",
            broker.name,
            broker.active_clients
        );
        BrokerHandle(Rc::new(broker))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn active_clients(&self) -> u32 {
        self.active_clients
    }
}

impl Drop for Broker {
    fn drop(&mut self) {
        tracing::info!("broker {} released by its last owner", self.name);
        self.console
            .say(format!("{} is no longer handling clients.", self.name));
    }
}

/// Shared ownership of a [`Broker`]. Cloning adds an owner.
#[derive(Debug, Clone)]
pub struct BrokerHandle(Rc<Broker>);

impl BrokerHandle {
    /// Number of handles currently keeping the broker alive.
    pub fn owners(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Give up this owner's claim. Tears the broker down if it was the last.
    pub fn release(self) {
        drop(self);
    }
}

impl std::ops::Deref for BrokerHandle {
    type Target = Broker;

    fn deref(&self) -> &Broker {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAREWELL: &str = "Zerodha is no longer handling clients.";

    #[test]
    fn teardown_waits_for_last_owner() {
        let console = Console::new();
        let first = Broker::open("Zerodha", 1500, &console);
        let second = first.clone();
        assert_eq!(first.owners(), 2);

        first.release();
        assert!(console.lines().is_empty());
        assert_eq!(second.owners(), 1);
        assert_eq!(second.active_clients(), 1500);

        second.release();
        assert_eq!(console.lines(), vec![FAREWELL.to_string()]);
    }

    #[test]
    fn teardown_fires_exactly_once() {
        let console = Console::new();
        {
            let handle = Broker::open("Zerodha", 10, &console);
            let _a = handle.clone();
            let _b = handle.clone();
        }
        let farewells = console.lines().iter().filter(|l| *l == FAREWELL).count();
        assert_eq!(farewells, 1);
    }

    #[test]
    fn handle_derefs_to_broker() {
        let console = Console::new();
        let handle = Broker::open("Upstox", 42, &console);
        assert_eq!(handle.name(), "Upstox");
        assert_eq!(handle.active_clients(), 42);
    }
}
