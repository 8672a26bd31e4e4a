// Design Patterns Catalog
// Twelve classic patterns, one runnable example per file.

pub mod catalog {
    //! # Design Patterns Catalog
    //!
    //! Each pattern lives in its own self-contained file with its demo and
    //! its tests:
    //!
    //! ## Creational
    //! - Abstract Factory (matched families of UI widgets)
    //! - Builder (fluent computer assembly with director presets)
    //! - Factory Method (logistics creators with a template method)
    //! - Prototype (deep-copied book records)
    //! - Singleton (process-wide counter behind `OnceLock`)
    //!
    //! ## Structural
    //! - Adapter (European socket powering an American device)
    //! - Bridge (remote controls decoupled from TV brands)
    //! - Decorator (stacked notification channels)
    //! - Facade (one-call computer startup sequence)
    //! - Flyweight (shared tree species in a forest)
    //! - Proxy (role-checked database access)
    //!
    //! ## Behavioral
    //! - Chain of Responsibility (log handlers forwarding by level)
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p01_abstract_factory
    //! cargo run --bin p02_adapter
    //! cargo run --bin p03_bridge
    //! cargo run --bin p04_builder
    //! cargo run --bin p05_chain_of_responsibility
    //! cargo run --bin p06_decorator
    //! cargo run --bin p07_facade
    //! cargo run --bin p08_factory_method
    //! cargo run --bin p09_flyweight
    //! cargo run --bin p10_prototype
    //! cargo run --bin p11_proxy
    //! cargo run --bin p12_singleton
    //! ```
}
