//! Contract tests for the `Maybe` optional container.

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

use stow::{AccessError, Maybe};

/// Bumps a shared counter on drop so teardown is observable.
struct Tracked<'a> {
    drops: &'a Cell<u32>,
    id: u32,
}

impl<'a> Tracked<'a> {
    fn new(drops: &'a Cell<u32>, id: u32) -> Self {
        Self { drops, id }
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn default_constructed_is_empty() {
    let maybe: Maybe<i32> = Maybe::default();
    assert!(!maybe.has_value());
    assert_eq!(maybe.as_ref(), None);

    let maybe: Maybe<String> = Maybe::empty();
    assert!(!maybe.has_value());
}

#[test]
fn construction_from_value_is_populated() {
    let maybe = Maybe::new(7);
    assert!(maybe.has_value());
    assert_eq!(*maybe.get(), 7);

    let maybe: Maybe<i32> = 9.into();
    assert_eq!(*maybe.get(), 9);
}

#[test]
fn option_interop_mirrors_presence() {
    let maybe: Maybe<u8> = Maybe::from(Some(3));
    assert_eq!(*maybe.get(), 3);

    let maybe: Maybe<u8> = Maybe::from(None);
    assert!(!maybe.has_value());

    assert_eq!(Maybe::new(5).into_option(), Some(5));
    assert_eq!(Maybe::<u8>::empty().into_option(), None);
}

#[test]
fn emplace_reset_scenario() {
    let mut a = Maybe::empty();
    a.emplace(5);
    assert_eq!(*a.get(), 5);
    a.reset();
    assert!(!a.has_value());
}

#[test]
fn emplace_returns_reference_to_new_value() {
    let mut maybe = Maybe::new(String::from("old"));
    let fresh = maybe.emplace(String::from("new"));
    fresh.push('!');
    assert_eq!(maybe.get(), "new!");
}

#[test]
fn reset_is_idempotent() {
    let drops = Cell::new(0);
    let mut maybe = Maybe::new(Tracked::new(&drops, 1));

    maybe.reset();
    assert_eq!(drops.get(), 1);
    assert!(!maybe.has_value());

    maybe.reset();
    assert_eq!(drops.get(), 1);
}

#[test]
#[should_panic(expected = "accessed an empty Maybe")]
fn get_on_empty_panics() {
    let maybe: Maybe<i32> = Maybe::empty();
    let _ = maybe.get();
}

#[test]
#[should_panic(expected = "accessed an empty Maybe")]
fn get_mut_on_empty_panics() {
    let mut maybe: Maybe<i32> = Maybe::empty();
    let _ = maybe.get_mut();
}

#[test]
fn checked_access_reports_access_error() {
    let mut maybe: Maybe<i32> = Maybe::empty();
    assert_eq!(maybe.try_get(), Err(AccessError));
    assert_eq!(maybe.try_get_mut(), Err(AccessError));

    maybe.set(4);
    assert_eq!(maybe.try_get(), Ok(&4));
    *maybe.try_get_mut().unwrap() += 1;
    assert_eq!(*maybe.get(), 5);
}

#[test]
fn take_transfers_and_empties_the_source() {
    let mut source = Maybe::new(String::from("payload"));
    let moved = source.take();

    assert!(!source.has_value());
    assert_eq!(moved.get(), "payload");

    // Taking from an empty source yields another empty container.
    let mut empty: Maybe<String> = Maybe::empty();
    assert!(!empty.take().has_value());
    assert!(!empty.has_value());
}

#[test]
fn try_into_inner_moves_the_value_out() {
    assert_eq!(Maybe::new(11).try_into_inner(), Ok(11));
    assert_eq!(Maybe::<u8>::empty().try_into_inner(), Err(AccessError));

    // Moving out must not run the value's destructor.
    let drops = Cell::new(0);
    let value = Maybe::new(Tracked::new(&drops, 1)).try_into_inner().unwrap();
    assert_eq!(drops.get(), 0);
    drop(value);
    assert_eq!(drops.get(), 1);
}

#[test]
fn value_or_never_mutates_presence() {
    let maybe = Maybe::new(10);
    assert_eq!(maybe.value_or(99), 10);
    assert!(maybe.has_value());

    let empty: Maybe<i32> = Maybe::empty();
    assert_eq!(empty.value_or(99), 99);
    assert!(!empty.has_value());

    assert_eq!(Maybe::new(10).into_value_or(99), 10);
    assert_eq!(Maybe::<i32>::empty().into_value_or(99), 99);
}

#[test]
fn set_overwrites_in_place_and_drops_the_old_value() {
    let drops = Cell::new(0);
    let mut maybe = Maybe::new(Tracked::new(&drops, 1));

    maybe.set(Tracked::new(&drops, 2));
    assert_eq!(drops.get(), 1);
    assert_eq!(maybe.get().id, 2);

    let mut empty = Maybe::empty();
    empty.set(Tracked::new(&drops, 3));
    assert_eq!(drops.get(), 1);
    assert_eq!(empty.get().id, 3);
}

#[test]
fn clone_copies_presence_and_value() {
    let populated = Maybe::new(vec![1, 2, 3]);
    let copy = populated.clone();
    assert_eq!(copy.get(), &[1, 2, 3]);
    assert!(populated.has_value());

    let empty: Maybe<Vec<i32>> = Maybe::empty();
    assert!(!empty.clone().has_value());
}

#[test]
fn clone_from_assigns_into_existing_storage() {
    // `String::clone_from` reuses the destination's buffer, which is only
    // reachable through the assign-in-place path.
    let mut target = Maybe::new(String::with_capacity(64));
    let source = Maybe::new(String::from("abc"));
    target.clone_from(&source);
    assert_eq!(target.get(), "abc");
    assert!(target.get().capacity() >= 64);

    // Empty source resets the target.
    target.clone_from(&Maybe::empty());
    assert!(!target.has_value());

    // Empty target constructs fresh storage.
    let mut fresh: Maybe<String> = Maybe::empty();
    fresh.clone_from(&source);
    assert_eq!(fresh.get(), "abc");
}

#[test]
fn panicking_initializer_leaves_the_container_empty() {
    let mut maybe = Maybe::new(5);
    let result = catch_unwind(AssertUnwindSafe(|| {
        maybe.emplace_with(|| -> i32 { panic!("initializer failed") });
    }));
    assert!(result.is_err());
    // The reset happened before construction began.
    assert!(!maybe.has_value());
}

#[test]
fn dropping_the_container_drops_the_value() {
    let drops = Cell::new(0);
    {
        let _maybe = Maybe::new(Tracked::new(&drops, 1));
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 1);

    // An empty container drops nothing.
    {
        let _maybe: Maybe<Tracked<'_>> = Maybe::empty();
    }
    assert_eq!(drops.get(), 1);
}

#[test]
fn equality_compares_presence_then_value() {
    assert_eq!(Maybe::new(1), Maybe::new(1));
    assert_ne!(Maybe::new(1), Maybe::new(2));
    assert_ne!(Maybe::new(1), Maybe::empty());
    assert_eq!(Maybe::<i32>::empty(), Maybe::empty());
}

#[test]
fn debug_rendering_distinguishes_emptiness() {
    assert_eq!(format!("{:?}", Maybe::new(3)), "Maybe(3)");
    assert_eq!(format!("{:?}", Maybe::<i32>::empty()), "Maybe(<empty>)");
}
