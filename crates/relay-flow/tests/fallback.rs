use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use relay_core::{effect, gate, Action};
use relay_flow::Try;

fn counting_fallback(count: &Arc<AtomicUsize>) -> impl Action<i32> + Clone {
    let count = Arc::clone(count);
    gate(move |_: &mut i32| {
        count.fetch_add(1, Ordering::SeqCst);
        true
    })
}

#[test]
fn fallback_skipped_when_primary_succeeds() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut action = Try::new(gate(|_: &mut i32| true)).fallback(counting_fallback(&fired));

    assert!(action.call(&mut 0));
    assert!(action.call(&mut 0));
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn fallback_runs_once_when_primary_fails() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut action = Try::new(gate(|_: &mut i32| false)).fallback(counting_fallback(&fired));

    assert!(action.call(&mut 0));
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn reports_fallback_result() {
    let mut action = Try::new(gate(|_: &mut i32| false)).fallback(gate(|_: &mut i32| false));
    assert!(!action.call(&mut 0));

    let mut action = Try::new(gate(|_: &mut i32| false)).fallback(effect(|_: &mut i32| {}));
    assert!(action.call(&mut 0));
}

#[test]
fn effect_primary_never_falls_back() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut action = Try::new(effect(|a: &mut i32| *a += 1)).fallback(counting_fallback(&fired));

    let mut a = 0;
    action.call(&mut a);
    assert_eq!(a, 1);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn chained_fallbacks_stop_at_first_success() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));
    let step = |name: &'static str, ok: bool| {
        let order = Arc::clone(&order);
        gate(move |_: &mut ()| {
            order.lock().unwrap().push(name);
            ok
        })
    };

    let mut action = Try::new(step("primary", false))
        .fallback(step("second", false))
        .fallback(step("third", true))
        .fallback(step("fourth", true));

    assert!(action.call(&mut ()));
    assert_eq!(*order.lock().unwrap(), vec!["primary", "second", "third"]);
}

#[test]
fn primary_mutations_visible_to_fallback() {
    let mut action = Try::new(gate(|(attempts, _): &mut (u32, bool)| {
        *attempts += 1;
        false
    }))
    .fallback(effect(|(attempts, recovered): &mut (u32, bool)| {
        *recovered = *attempts == 1;
    }));

    let mut args = (0, false);
    action.call(&mut args);
    assert_eq!(args, (1, true));
}
