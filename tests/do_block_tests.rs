//! Integration tests for the do_! macro and the Bindings engine.
//!
//! These tests cover single-pass do-blocks over every monad instance the
//! engine is documented against: ordering, dependent bindings, short-circuit
//! behavior and multi-valued fan-out.

use std::cell::Cell;
use std::rc::Rc;

use dobind::block::{BindingValue, Bindings, DoState};
use dobind::control::{Reader, Thunk};
use dobind::do_;
use dobind::typeclass::Identity;

// =============================================================================
// Basic Sequencing
// =============================================================================

#[test]
fn empty_builder_yields_empty_record() {
    let result = Bindings::<Option<BindingValue>>::new().run();
    assert!(result.unwrap().is_empty());
}

#[test]
fn single_binding_projects_its_value() {
    let result: Option<DoState> = do_! {
        x <= |_s: &DoState| Some(BindingValue::new(7_i32));
    };
    assert_eq!(result.unwrap().get::<i32>("x").unwrap(), 7);
}

#[test]
fn later_bindings_see_earlier_ones() {
    let result: Option<DoState> = do_! {
        x <= |_s: &DoState| Some(BindingValue::new(1_i32));
        y <= |s: &DoState| Some(BindingValue::new(s.get::<i32>("x").unwrap() + 1));
        z <= |s: &DoState| {
            let x: i32 = s.get("x").ok()?;
            let y: i32 = s.get("y").ok()?;
            Some(BindingValue::new(x + y))
        };
    };

    let state = result.unwrap();
    assert_eq!(state.get::<i32>("y").unwrap(), 2);
    assert_eq!(state.get::<i32>("z").unwrap(), 3);
}

#[test]
fn record_preserves_declaration_order() {
    let result: Option<DoState> = do_! {
        first <= |_s: &DoState| Some(BindingValue::new(1_i32));
        second <= |_s: &DoState| Some(BindingValue::new(2_i32));
        third <= |_s: &DoState| Some(BindingValue::new(3_i32));
    };

    let state = result.unwrap();
    let names: Vec<&str> = state.entries().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn bindings_may_hold_different_types() {
    let result: Option<DoState> = do_! {
        count <= |_s: &DoState| Some(BindingValue::new(3_usize));
        label <= |_s: &DoState| Some(BindingValue::new("items".to_owned()));
        summary <= |s: &DoState| {
            let count: usize = s.get("count").ok()?;
            let label: String = s.get("label").ok()?;
            Some(BindingValue::new(format!("{count} {label}")))
        };
    };

    assert_eq!(
        result.unwrap().get::<String>("summary").unwrap(),
        "3 items"
    );
}

// =============================================================================
// Short-Circuit Behavior
// =============================================================================

#[test]
fn none_stops_the_block() {
    let ran = Rc::new(Cell::new(false));
    let probe = Rc::clone(&ran);

    let result: Option<DoState> = do_! {
        x <= |_s: &DoState| None;
        y <= move |_s: &DoState| {
            probe.set(true);
            Some(BindingValue::new(2_i32))
        };
    };

    assert!(result.is_none());
    assert!(!ran.get());
}

#[test]
fn err_stops_the_block_and_carries_the_error() {
    let result: Result<DoState, String> = do_! {
        x <= |_s: &DoState| Ok(BindingValue::new(1_i32));
        y <= |_s: &DoState| Err("midway failure".to_owned());
        z <= |_s: &DoState| Ok(BindingValue::new(3_i32));
    };

    assert_eq!(result.unwrap_err(), "midway failure");
}

#[test]
fn empty_vec_stops_the_fan_out() {
    let result: Vec<DoState> = do_! {
        x <= |_s: &DoState| vec![BindingValue::new(1_i32), BindingValue::new(2_i32)];
        y <= |_s: &DoState| Vec::new();
    };
    assert!(result.is_empty());
}

// =============================================================================
// Multi-Valued Fan-Out
// =============================================================================

#[test]
fn vec_bindings_fan_out_row_major() {
    let result: Vec<DoState> = do_! {
        x <= |_s: &DoState| vec![BindingValue::new(1_i32), BindingValue::new(2_i32)];
        y <= |_s: &DoState| vec![BindingValue::new(10_i32), BindingValue::new(20_i32)];
    };

    let pairs: Vec<(i32, i32)> = result
        .iter()
        .map(|state| {
            (
                state.get::<i32>("x").unwrap(),
                state.get::<i32>("y").unwrap(),
            )
        })
        .collect();
    assert_eq!(pairs, vec![(1, 10), (1, 20), (2, 10), (2, 20)]);
}

#[test]
fn fan_out_expressions_see_each_branch_state() {
    let result: Vec<DoState> = do_! {
        x <= |_s: &DoState| vec![BindingValue::new(1_i32), BindingValue::new(2_i32)];
        doubled <= |s: &DoState| vec![BindingValue::new(s.get::<i32>("x").unwrap() * 2)];
    };

    let doubled: Vec<i32> = result
        .iter()
        .map(|state| state.get::<i32>("doubled").unwrap())
        .collect();
    assert_eq!(doubled, vec![2, 4]);
}

// =============================================================================
// Other Instances
// =============================================================================

#[test]
fn identity_do_block_is_plain_sequencing() {
    let result: Identity<DoState> = do_! {
        x <= |_s: &DoState| Identity::new(BindingValue::new(5_i32));
        y <= |s: &DoState| Identity::new(BindingValue::new(s.get::<i32>("x").unwrap() * 3));
    };
    assert_eq!(result.into_inner().get::<i32>("y").unwrap(), 15);
}

#[test]
fn thunk_do_block_defers_until_forced() {
    let ran = Rc::new(Cell::new(false));
    let probe = Rc::clone(&ran);

    let pending: Thunk<DoState> = do_! {
        x <= move |_s: &DoState| {
            let probe = Rc::clone(&probe);
            Thunk::new(move || {
                probe.set(true);
                BindingValue::new(1_i32)
            })
        };
        y <= |s: &DoState| {
            let x = s.get::<i32>("x").unwrap();
            Thunk::new(move || BindingValue::new(x + 1))
        };
    };

    assert!(!ran.get());
    let state = pending.force();
    assert!(ran.get());
    assert_eq!(state.get::<i32>("y").unwrap(), 2);
}

#[test]
fn reader_do_block_shares_one_environment() {
    let pending: Reader<i32, DoState> = do_! {
        base <= |_s: &DoState| Reader::asks(|environment: i32| BindingValue::new(environment));
        total <= |s: &DoState| {
            let base = s.get::<i32>("base").unwrap();
            Reader::new(move |environment: i32| BindingValue::new(base + environment))
        };
    };

    let state = pending.run_with(10);
    assert_eq!(state.get::<i32>("base").unwrap(), 10);
    assert_eq!(state.get::<i32>("total").unwrap(), 20);
}

// =============================================================================
// Seeded Runs
// =============================================================================

#[test]
fn run_from_makes_seed_bindings_visible() {
    let mut seed = DoState::new();
    seed.insert("base", BindingValue::new(100_i32));

    let result = Bindings::<Option<BindingValue>>::new()
        .bind("total", |state| {
            let base: i32 = state.get("base").ok()?;
            Some(BindingValue::new(base + 1))
        })
        .run_from(seed);

    let state = result.unwrap();
    assert_eq!(state.get::<i32>("base").unwrap(), 100);
    assert_eq!(state.get::<i32>("total").unwrap(), 101);
}

#[test]
fn rebinding_a_name_overwrites_in_place() {
    let result: Option<DoState> = do_! {
        x <= |_s: &DoState| Some(BindingValue::new(1_i32));
        y <= |_s: &DoState| Some(BindingValue::new(2_i32));
        x <= |s: &DoState| Some(BindingValue::new(s.get::<i32>("x").unwrap() + 10));
    };

    let state = result.unwrap();
    assert_eq!(state.len(), 2);
    assert_eq!(state.get::<i32>("x").unwrap(), 11);
    let names: Vec<&str> = state.entries().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["x", "y"]);
}
