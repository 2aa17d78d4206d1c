// Classic OO Design Patterns Catalog
// This crate demonstrates classic object-oriented patterns in Rust.

pub mod examples {
    //! # Classic OO Design Patterns
    //!
    //! This crate provides runnable examples for:
    //!
    //! ## Pattern 1: Object Adapter (Structural)
    //! - Incompatible data holder behind a target trait (composition)
    //! - Shared adaptee ownership with `Arc`
    //!
    //! ## Pattern 2: Factory Method (Creational)
    //! - Product traits with interchangeable variants (trait objects)
    //! - Discriminator dispatch with a documented fallback
    //! - Enum-based factory (zero-cost flavor)
    //!
    //! ## Pattern 3: Singleton (Creational)
    //! - Double-checked locking with explicit memory ordering
    //! - Singleton with OnceLock
    //! - Two-thread initialization race
    //!
    //! ## Pattern 4: Observer (Behavioral)
    //! - Publisher with trait-object subscribers
    //! - Channel-based observer
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_object_adapter
    //! cargo run --bin p2_factory
    //! cargo run --bin p3_singleton
    //! cargo run --bin p4_observer
    //! ```
}
