// Adapters layer: concrete implementations for external systems (console output).

pub mod console;
