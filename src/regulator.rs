use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Rulebook {
    rule: String,
}

/// Handle to the market regulator.
///
/// Cloning produces another name for the same regulator: a rule changed
/// through one handle is seen through every other.
#[derive(Debug, Clone, Default)]
pub struct Sebi(Rc<RefCell<Rulebook>>);

impl Sebi {
    pub fn new(rule: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(Rulebook { rule: rule.into() })))
    }

    pub fn rule(&self) -> String {
        self.0.borrow().rule.clone()
    }

    pub fn set_rule(&self, rule: impl Into<String>) {
        let rule = rule.into();
        tracing::info!("SEBI rule updated: {}", rule);
        self.0.borrow_mut().rule = rule;
    }

    /// True when both handles refer to the same regulator.
    pub fn same_regulator(a: &Sebi, b: &Sebi) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Number of live handles sharing this regulator.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_alias_the_same_rule() {
        let sebi = Sebi::new("Insider trading is prohibited");
        let alias = sebi.clone();
        alias.set_rule("Circuit breaker at 10%");
        assert_eq!(sebi.rule(), "Circuit breaker at 10%");
        assert!(Sebi::same_regulator(&sebi, &alias));
        assert_eq!(sebi.holders(), 2);
    }

    #[test]
    fn separate_regulators_are_independent() {
        let a = Sebi::new("rule A");
        let b = Sebi::new("rule A");
        b.set_rule("rule B");
        assert_eq!(a.rule(), "rule A");
        assert!(!Sebi::same_regulator(&a, &b));
    }

    #[test]
    fn lifetime_is_shared_by_all_holders() {
        let sebi = Sebi::new("rule");
        let alias = sebi.clone();
        drop(sebi);
        assert_eq!(alias.holders(), 1);
        assert_eq!(alias.rule(), "rule");
    }
}
