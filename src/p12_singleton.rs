// Pattern 12: Singleton - Process-Wide Counter Behind OnceLock
// The first access initializes the instance exactly once, even under
// concurrent first access; every access returns the same 'static reference.

use colored::Colorize;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;

struct Counter {
    value: AtomicI64,
}

impl Counter {
    fn instance() -> &'static Counter {
        static INSTANCE: OnceLock<Counter> = OnceLock::new();
        INSTANCE.get_or_init(|| Counter {
            value: AtomicI64::new(0),
        })
    }

    fn set_value(&self, value: i64) {
        self.value.store(value, Ordering::SeqCst);
    }

    fn get_value(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("{}", "=== Singleton ===".bold());

    // First construction request initializes the counter.
    let singleton1 = Counter::instance();
    singleton1.set_value(42);
    println!("Singleton1 Value: {}", singleton1.get_value());

    // A second construction request returns the same instance.
    let singleton2 = Counter::instance();
    println!("Singleton2 Value: {}", singleton2.get_value());

    println!(
        "Are both instances the same? {}",
        std::ptr::eq(singleton1, singleton2)
    );
}
