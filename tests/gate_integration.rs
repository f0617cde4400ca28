#![cfg(all(feature = "compose", feature = "control"))]
//! Integration tests combining the sequencing, currying, and gating
//! families.
//!
//! The three areas never call into each other; these tests exercise the
//! intended pattern of a caller wrapping a function with curry and/or a
//! gate, then threading values through the result with pipe!/compose!.

use funcomb::compose::curry;
use funcomb::control::{Clock, Debounce, ManualClock, Throttle};
use funcomb::{compose, curry2, pipe};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[test]
fn test_curried_partials_feed_a_pipeline() {
    let multiply = curry2!(|first: i32, second: i32| first * second);
    let add = curry2!(|first: i32, second: i32| first + second);

    let double = multiply(2);
    let add_ten = add(10);

    // double(5) = 10, add_ten(10) = 20
    assert_eq!(pipe!(5, &double, &add_ten), 20);
    assert_eq!(compose!(double, add_ten)(5), 20);
}

#[test]
fn test_throttled_stage_inside_a_pipeline() {
    let executions = Rc::new(Cell::new(0));
    let counter = Rc::clone(&executions);
    let clock = ManualClock::new();
    let expensive = Throttle::with_clock(Duration::from_micros(1_000), clock.clone()).wrap(
        move |value: i32| {
            counter.set(counter.get() + 1);
            value * 100
        },
    );

    let stage = |value: i32| expensive.call(value);

    assert_eq!(pipe!(3, &stage, |n: i32| n + 1), 301);
    // Gated: the pipeline observes the cached stage result.
    assert_eq!(pipe!(9, &stage, |n: i32| n + 1), 301);
    assert_eq!(executions.get(), 1);

    clock.advance(Duration::from_micros(1_000));
    assert_eq!(pipe!(9, &stage, |n: i32| n + 1), 901);
    assert_eq!(executions.get(), 2);
}

#[test]
fn test_debounced_completion_of_a_curried_call() {
    let clock = ManualClock::new();
    let add3 = curry(3, |arguments: &[i32]| arguments.iter().sum::<i32>());
    let primed = add3.apply([1, 2]).partial().expect("one argument short");

    let delayed = Debounce::with_clock(Duration::from_micros(50), clock.clone())
        .wrap(move |final_argument: i32| primed.supply(final_argument).complete());

    let start = clock.now();
    assert_eq!(delayed.call(3), Some(6));
    assert_eq!(delayed.call(7), Some(10));
    // Both calls waited out their own delay.
    assert_eq!(clock.now() - start, Duration::from_micros(100));
}

#[test]
fn test_compose_feeds_a_throttled_sink() {
    let clock = ManualClock::new();
    let sink = Throttle::with_clock(Duration::from_micros(500), clock.clone())
        .wrap(|report: String| report.len());

    let render = compose!(|value: i32| value * 2, |value: i32| format!("value={value}"));

    assert_eq!(sink.call(render(5)), 8); // "value=10"
    // Gated: the freshly rendered report is discarded.
    assert_eq!(sink.call(render(5_000)), 8);

    clock.advance(Duration::from_micros(500));
    assert_eq!(sink.call(render(5_000)), 11); // "value=10000"
}
