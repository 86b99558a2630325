use crate::broker::Broker;
use crate::console::Console;

pub fn run(console: &Console) {
    let broker = Broker::open("Zerodha", 1500, console);
    console.say(format!(
        "{} has {} active clients",
        broker.name(),
        broker.active_clients()
    ));

    let desk = broker.clone();
    console.say(format!("{} has {} owners", broker.name(), broker.owners()));

    broker.release();
    console.say(format!("{} still has {} owner", desk.name(), desk.owners()));
    desk.release();
}
