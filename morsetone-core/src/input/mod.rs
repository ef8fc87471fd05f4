//! Operator input
//!
//! Symbols arrive from two buttons, are debounced per button, and collect
//! in a bounded group buffer until the light sensor signals a word break.

pub mod debounce;
pub mod symbol;
pub mod word_break;

pub use debounce::Debouncer;
pub use symbol::{GroupSnapshot, Symbol, SymbolBuffer, SymbolGroup};
pub use word_break::WordBreakDetector;
