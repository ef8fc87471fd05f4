//! Morse symbols and the group buffer

use heapless::Vec;

use crate::config::SYMBOL_CAPACITY;

/// A single Morse symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Short press ("dot" button)
    Dot,
    /// Long press ("dash" button)
    Dash,
}

impl Symbol {
    /// Parse the conventional `.` / `-` notation
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }
}

/// A finalized group of up to [`SYMBOL_CAPACITY`] symbols
pub type SymbolGroup = Vec<Symbol, SYMBOL_CAPACITY>;

/// Display feedback: which positions hold a dot, a dash or nothing
pub type GroupSnapshot = [Option<Symbol>; SYMBOL_CAPACITY];

/// Parse a group from `.` / `-` notation
///
/// Returns `None` on any other character or when the text is longer than
/// a group.
pub fn parse_group(text: &str) -> Option<SymbolGroup> {
    let mut group = SymbolGroup::new();
    for c in text.chars() {
        group.push(Symbol::from_char(c)?).ok()?;
    }
    Some(group)
}

/// Bounded buffer collecting the symbols of the group being entered
///
/// Appends past capacity are discarded. The buffer has a single owner
/// (the decode loop); producers hand symbols over through a queue, so
/// [`take`](Self::take) snapshots and clears in one step.
#[derive(Debug, Clone, Default)]
pub struct SymbolBuffer {
    symbols: SymbolGroup,
}

impl SymbolBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Append a symbol
    ///
    /// Returns `false` if the buffer was already full and the symbol
    /// was dropped.
    pub fn push(&mut self, symbol: Symbol) -> bool {
        self.symbols.push(symbol).is_ok()
    }

    /// Number of buffered symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if no symbols are buffered
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check if further symbols will be dropped
    pub fn is_full(&self) -> bool {
        self.symbols.is_full()
    }

    /// Current contents laid out by display position
    pub fn snapshot(&self) -> GroupSnapshot {
        let mut snapshot = [None; SYMBOL_CAPACITY];
        for (slot, symbol) in snapshot.iter_mut().zip(self.symbols.iter()) {
            *slot = Some(*symbol);
        }
        snapshot
    }

    /// Remove and return the buffered group, leaving the buffer empty
    pub fn take(&mut self) -> SymbolGroup {
        core::mem::take(&mut self.symbols)
    }

    /// Discard the buffered symbols
    pub fn clear(&mut self) {
        self.symbols.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_until_full() {
        let mut buffer = SymbolBuffer::new();
        assert!(buffer.push(Symbol::Dot));
        assert!(buffer.push(Symbol::Dash));
        assert!(buffer.push(Symbol::Dot));
        assert!(buffer.push(Symbol::Dash));
        assert!(buffer.is_full());

        // Fifth symbol is dropped silently
        assert!(!buffer.push(Symbol::Dot));
        assert_eq!(buffer.len(), 4);
        let group = buffer.take();
        assert_eq!(
            group.as_slice(),
            &[Symbol::Dot, Symbol::Dash, Symbol::Dot, Symbol::Dash]
        );
    }

    #[test]
    fn test_take_clears() {
        let mut buffer = SymbolBuffer::new();
        buffer.push(Symbol::Dash);
        buffer.push(Symbol::Dot);

        let group = buffer.take();
        assert_eq!(group.as_slice(), &[Symbol::Dash, Symbol::Dot]);
        assert!(buffer.is_empty());

        // Next group starts from scratch
        buffer.push(Symbol::Dot);
        assert_eq!(buffer.take().as_slice(), &[Symbol::Dot]);
    }

    #[test]
    fn test_snapshot_positions() {
        let mut buffer = SymbolBuffer::new();
        assert_eq!(buffer.snapshot(), [None; 4]);

        buffer.push(Symbol::Dash);
        buffer.push(Symbol::Dot);
        assert_eq!(
            buffer.snapshot(),
            [Some(Symbol::Dash), Some(Symbol::Dot), None, None]
        );
    }

    #[test]
    fn test_parse_group() {
        assert_eq!(
            parse_group("-.-.").unwrap().as_slice(),
            &[Symbol::Dash, Symbol::Dot, Symbol::Dash, Symbol::Dot]
        );
        assert!(parse_group("").unwrap().is_empty());
        assert!(parse_group(".....").is_none());
        assert!(parse_group(".x").is_none());
    }

    fn any_symbol() -> impl Strategy<Value = Symbol> {
        prop_oneof![Just(Symbol::Dot), Just(Symbol::Dash)]
    }

    proptest! {
        #[test]
        fn prop_buffer_never_exceeds_capacity(
            symbols in proptest::collection::vec(any_symbol(), 0..32)
        ) {
            let mut buffer = SymbolBuffer::new();
            for (i, symbol) in symbols.iter().enumerate() {
                let accepted = buffer.push(*symbol);
                prop_assert_eq!(accepted, i < SYMBOL_CAPACITY);
                prop_assert!(buffer.len() <= SYMBOL_CAPACITY);
            }

            // The kept prefix is exactly the first symbols delivered
            let kept = symbols.len().min(SYMBOL_CAPACITY);
            let taken = buffer.take();
            prop_assert_eq!(taken.as_slice(), &symbols[..kept]);
        }
    }
}
