//! Do-notation through the instrumentation attributes.

#![cfg(feature = "derive")]

use std::cell::Cell;

use rightward::prelude::*;
use rstest::rstest;

// =============================================================================
// Free functions
// =============================================================================

#[do_notation]
fn add(a: Outcome<i32, &'static str>, b: Outcome<i32, &'static str>, scope: Scope) -> Outcome<i32, &'static str> {
    let a = scope.unwrap(a)?;
    let b = scope.unwrap(b)?;
    Outcome::success(a + b)
}

#[rstest]
fn successes_are_combined() {
    assert_eq!(add(Outcome::success(1), Outcome::success(2)), Outcome::success(3));
}

#[rstest]
fn first_failure_is_returned() {
    assert_eq!(add(Outcome::failure("x"), Outcome::success(2)), Outcome::failure("x"));
    assert_eq!(add(Outcome::success(1), Outcome::failure("y")), Outcome::failure("y"));
}

#[do_notation]
fn counted(value: Maybe<i32>, counter: &Cell<u32>, scope: Scope) -> Maybe<i32> {
    counter.set(counter.get() + 1);
    let value = scope.unwrap(value)?;
    counter.set(counter.get() + 1);
    Maybe::just(value)
}

#[rstest]
#[case(Maybe::just(1), 2)]
#[case(Maybe::Nothing, 1)]
fn statements_after_a_halt_never_run(#[case] value: Maybe<i32>, #[case] expected: u32) {
    let counter = Cell::new(0);
    let _ = counted(value, &counter);
    assert_eq!(counter.get(), expected);
}

#[do_notation]
fn early_return(flag: bool, scope: Scope) -> Maybe<&'static str> {
    if flag {
        return Maybe::just("early");
    }
    let rest = scope.unwrap(Some("late"))?;
    Maybe::just(rest)
}

#[rstest]
fn return_statements_exit_normally() {
    assert_eq!(early_return(true), Maybe::just("early"));
    assert_eq!(early_return(false), Maybe::just("late"));
}

#[do_notation]
fn leftmost(scope: Scope) -> Outcome<i32, i32> {
    let (a, b, c) = scope.unwrap_all((
        Outcome::<i32, i32>::success(0),
        Outcome::<i32, i32>::failure(1),
        Outcome::<i32, i32>::failure(2),
    ))?;
    Outcome::success(a + b + c)
}

#[rstest]
fn multi_value_unwrap_halts_on_first_left() {
    assert_eq!(leftmost(), Outcome::failure(1));
}

#[do_notation]
fn sum_all(values: Vec<Validated<i32, &'static str>>, scope: Scope) -> Outcome<i32, Vec<&'static str>> {
    let values = scope.unwrap(List::from(values))?;
    Outcome::success(values.into_iter().sum())
}

#[rstest]
fn sequences_are_traversed_before_unwrapping() {
    assert_eq!(sum_all(vec![Validated::valid(1), Validated::valid(2)]), Outcome::success(3));
    assert_eq!(
        sum_all(vec![Validated::invalid("a"), Validated::valid(2), Validated::invalid("b")]),
        Outcome::failure(vec!["a", "b"])
    );
}

#[do_notation]
fn as_option(value: Result<i32, String>, scope: Scope) -> Option<i32> {
    let value = scope.unwrap(value.ok())?;
    Some(value * 2)
}

#[rstest]
fn std_families_can_be_returned() {
    assert_eq!(as_option(Ok(4)), Some(8));
    assert_eq!(as_option(Err("no".to_string())), None);
}

// =============================================================================
// Recursion and explicit scopes
// =============================================================================

#[do_notation(with = countdown_in)]
fn countdown(n: u32, scope: Scope) -> Outcome<u32, String> {
    if n == 0 {
        return Outcome::success(0);
    }
    let checked = scope.unwrap(if n > 10 {
        Outcome::failure(format!("{n} is too large"))
    } else {
        Outcome::success(n)
    })?;
    let rest = scope.unwrap(countdown(checked - 1))?;
    Outcome::success(checked + rest)
}

#[rstest]
fn recursive_calls_have_independent_boundaries() {
    assert_eq!(countdown(4), Outcome::success(10));
    assert_eq!(countdown(11), Outcome::failure("11 is too large".to_string()));
}

#[do_notation]
fn forwards_scope(n: u32, log: &Cell<u32>, scope: Scope) -> Outcome<u32, String> {
    let value = scope.unwrap(countdown_in(n, scope)?)?;
    log.set(log.get() + 1);
    Outcome::success(value)
}

#[rstest]
fn explicit_variant_halts_the_callers_boundary() {
    let log = Cell::new(0);
    assert_eq!(forwards_scope(3, &log), Outcome::success(6));
    assert_eq!(forwards_scope(20, &log), Outcome::failure("20 is too large".to_string()));
    assert_eq!(log.get(), 1);
}

// =============================================================================
// Transactions
// =============================================================================

#[derive(Default)]
struct Ledger {
    committed: Vec<i32>,
    events: Vec<&'static str>,
}

impl Ledger {
    fn transaction<T, E>(&mut self, body: impl FnOnce(&mut Vec<i32>) -> Result<T, E>) -> Result<T, E> {
        self.events.push("begin");
        let mut staged = self.committed.clone();
        let result = body(&mut staged);
        if result.is_ok() {
            self.committed = staged;
            self.events.push("commit");
        } else {
            self.events.push("rollback");
        }
        result
    }
}

#[do_all]
impl Ledger {
    fn record(&mut self, amounts: Vec<Outcome<i32, &'static str>>, scope: Scope) -> Outcome<usize, &'static str> {
        let written = self.transaction(|staged| {
            for amount in amounts {
                staged.push(scope.unwrap(amount)?);
            }
            Ok::<usize, Halt<'_, Failed<&'static str>>>(staged.len())
        })?;
        Outcome::success(written)
    }
}

#[rstest]
fn halting_inside_a_transaction_rolls_it_back() {
    let mut ledger = Ledger::default();
    assert_eq!(ledger.record(vec![Outcome::success(5)]), Outcome::success(1));
    assert_eq!(
        ledger.record(vec![Outcome::success(7), Outcome::failure("declined")]),
        Outcome::failure("declined")
    );
    assert_eq!(ledger.committed, vec![5]);
    assert_eq!(ledger.events, vec!["begin", "commit", "begin", "rollback"]);
}

// =============================================================================
// Block attributes
// =============================================================================

struct Catalog {
    prices: Vec<(&'static str, u32)>,
}

#[do_for(price, total: pub(crate))]
impl Catalog {
    fn price(&self, name: &str, scope: Scope) -> Outcome<u32, String> {
        let found = self
            .prices
            .iter()
            .find(|(item, _)| *item == name)
            .map(|(_, price)| *price)
            .ok_or_else(|| format!("unknown item {name}"));
        Outcome::success(scope.unwrap(found)?)
    }

    fn total(&self, names: &[&str], scope: Scope) -> Outcome<u32, String> {
        let mut sum = 0;
        for name in names {
            sum += scope.unwrap(self.price(name))?;
        }
        Outcome::success(sum)
    }

    fn untouched(&self, value: u32) -> u32 {
        value
    }
}

#[rstest]
fn do_for_instruments_named_methods() {
    let catalog = Catalog {
        prices: vec![("tea", 3), ("cake", 5)],
    };
    assert_eq!(catalog.total(&["tea", "cake"]), Outcome::success(8));
    assert_eq!(catalog.total(&["tea", "pie"]), Outcome::failure("unknown item pie".to_string()));
    assert_eq!(catalog.untouched(4), 4);
}

#[do_all]
trait Greeter {
    fn name(&self, scope: Scope) -> Maybe<String>;

    fn greeting(&self, scope: Scope) -> Maybe<String> {
        let name = scope.unwrap(self.name())?;
        Maybe::just(format!("hello, {name}"))
    }
}

struct Known(&'static str);
struct Anonymous;

#[do_all]
impl Greeter for Known {
    fn name(&self, scope: Scope) -> Maybe<String> {
        let name = scope.unwrap(Some(self.0))?;
        Maybe::just(name.to_string())
    }
}

#[do_all]
impl Greeter for Anonymous {
    fn name(&self, scope: Scope) -> Maybe<String> {
        scope.unwrap(None::<String>)?;
        Maybe::Nothing
    }

    fn greeting(&self, scope: Scope) -> Maybe<String> {
        let _ = scope;
        Maybe::just("hello, stranger".to_string())
    }
}

#[rstest]
fn trait_defaults_and_overrides_get_their_own_boundaries() {
    assert_eq!(Known("ada").greeting(), Maybe::just("hello, ada".to_string()));
    assert_eq!(Anonymous.name(), Maybe::Nothing);
    assert_eq!(Anonymous.greeting(), Maybe::just("hello, stranger".to_string()));
}

struct Account {
    balance: i32,
}

#[do_all]
impl Account {
    fn withdraw(&self, amount: i32, scope: Scope) -> Outcome<i32, String> {
        let remaining = scope.unwrap(self.check(amount))?;
        Outcome::success(remaining)
    }

    #[do_notation]
    fn check(&self, amount: i32, scope: Scope) -> Outcome<i32, String> {
        let _ = scope;
        if amount > self.balance {
            return Outcome::failure(format!("insufficient funds for {amount}"));
        }
        Outcome::success(self.balance - amount)
    }
}

#[rstest]
fn methods_with_their_own_attribute_are_left_to_it() {
    let account = Account { balance: 10 };
    assert_eq!(account.withdraw(4), Outcome::success(6));
    assert_eq!(
        account.withdraw(40),
        Outcome::failure("insufficient funds for 40".to_string())
    );
}

// =============================================================================
// Visibility across modules
// =============================================================================

mod shop {
    use rightward::prelude::*;

    pub struct Till {
        pub rates: Vec<(&'static str, u32)>,
    }

    #[do_for(fee, total: pub)]
    impl Till {
        fn fee(&self, item: &str, scope: Scope) -> Outcome<u32, String> {
            let rate = self
                .rates
                .iter()
                .find(|(name, _)| *name == item)
                .map(|(_, rate)| *rate)
                .ok_or_else(|| format!("no rate for {item}"));
            Outcome::success(scope.unwrap(rate)? / 10)
        }

        fn total(&self, items: &[&str], scope: Scope) -> Outcome<u32, String> {
            let mut sum = 0;
            for item in items {
                sum += scope.unwrap(self.fee(item))?;
            }
            Outcome::success(sum)
        }
    }
}

#[rstest]
fn public_entry_point_runs_private_instrumented_helpers() {
    let till = shop::Till {
        rates: vec![("lamp", 120), ("chair", 450)],
    };
    assert_eq!(till.total(&["lamp", "chair"]), Outcome::success(57));
    assert_eq!(till.total(&[]), Outcome::success(0));
}

#[rstest]
fn private_helper_failure_short_circuits_the_public_entry_point() {
    let till = shop::Till {
        rates: vec![("lamp", 120)],
    };
    assert_eq!(
        till.total(&["lamp", "sofa", "chair"]),
        Outcome::failure("no rate for sofa".to_string())
    );
}
