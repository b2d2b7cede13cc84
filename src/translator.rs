//! The two translation directions
//!
//! Both directions are single forward scans driven by the same
//! [`SymbolTable`](crate::table::SymbolTable) and by `Modes`, a small
//! state machine tracking numeric and capital word mode one input unit
//! at a time. The encoder inserts indicator cells ahead of digits
//! and uppercase letters; the decoder consumes them to toggle modes.
//! Neither direction ever fails: unmapped input units are dropped.

mod decode;
mod encode;
mod modes;
