// Pattern 4: Builder - Fluent Assembly with Director Presets
// A consuming builder accumulates configuration via chained setters; the
// director encapsulates named preset configurations.

use colored::Colorize;
use std::fmt;

// ============================================================================
// The product
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Computer {
    cpu: String,
    ram: String,
    storage: String,
}

impl Computer {
    fn builder() -> ComputerBuilder {
        ComputerBuilder::new()
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Computer(CPU: {}, RAM: {}, Storage: {})",
            self.cpu, self.ram, self.storage
        )
    }
}

// ============================================================================
// The builder
// ============================================================================

// Each setter takes `self` and returns `self` for chaining; the last write
// to a field wins, unset fields keep their defaults.
struct ComputerBuilder {
    cpu: String,
    ram: String,
    storage: String,
}

impl ComputerBuilder {
    fn new() -> Self {
        Self {
            cpu: String::new(),
            ram: String::new(),
            storage: String::new(),
        }
    }

    fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = cpu.into();
        self
    }

    fn ram(mut self, ram: impl Into<String>) -> Self {
        self.ram = ram.into();
        self
    }

    fn storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = storage.into();
        self
    }

    fn build(self) -> Computer {
        Computer {
            cpu: self.cpu,
            ram: self.ram,
            storage: self.storage,
        }
    }
}

// ============================================================================
// The director: named presets
// ============================================================================

struct Director;

impl Director {
    fn build_gaming_computer() -> Computer {
        Computer::builder()
            .cpu("Intel i9")
            .ram("32GB")
            .storage("1TB SSD")
            .build()
    }

    fn build_office_computer() -> Computer {
        Computer::builder()
            .cpu("Intel i5")
            .ram("16GB")
            .storage("512GB SSD")
            .build()
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("{}", "=== Builder ===".bold());

    // Director-driven preset configurations.
    println!("{}", Director::build_gaming_computer());
    println!("{}", Director::build_office_computer());

    // Building a custom configuration directly.
    let custom = Computer::builder()
        .cpu("AMD Ryzen 7")
        .ram("16GB")
        .storage("256GB SSD")
        .build();
    println!("{}", custom);
}
