//! Decode pipeline
//!
//! Owns the group buffer, the word-break detector, the melody track and
//! the mode. Each finalized group produces one [`Outcome`]; the firmware
//! turns outcomes into lamps, display patterns, tones and flash writes.
//!
//! ```text
//! symbols ──► SymbolBuffer ──(word break)──► decode ──┬─► Command ──► Mode
//!                                                      └─► Note ──► MelodyTrack
//!                                                                      │ full
//!                                              Save / LoadAndPlay / Play ◄┘
//! ```

use crate::config::{EmptyGroupPolicy, PipelineConfig};
use crate::decode::{decode, Command, DecodeError, Decoded, Note};
use crate::input::{GroupSnapshot, Symbol, SymbolBuffer, WordBreakDetector};
use crate::melody::{lamp_mask, Melody, MelodyTrack};
use crate::state::{Mode, ModeEvent};
use crate::traits::{IndicatorLamps, SegmentDisplay};

/// What to do with a completed melody
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Completion {
    /// Write the melody to storage
    Save(Melody),
    /// Load the stored melody over this one, then play the result
    LoadAndPlay(Melody),
    /// Play the melody
    Play(Melody),
}

/// Result of finalizing one group
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Empty group dropped before decoding
    EmptyGroup,
    /// A command armed a pending action
    ModeChanged(Mode),
    /// A command arrived while another action was armed
    CommandIgnored(Command),
    /// A note was added to the melody
    NoteAdded {
        /// The decoded note
        note: Note,
        /// Notes now held
        position: usize,
        /// Indicator lamp pattern for the new position
        lamps: u8,
    },
    /// The note completed the melody; the track is empty again
    MelodyComplete {
        /// The final note
        note: Note,
        /// Action to perform on the melody
        completion: Completion,
    },
    /// The group did not decode; the melody is unchanged
    DecodeFailed(DecodeError),
}

impl Outcome {
    /// Apply the visual part of this outcome
    ///
    /// Audible feedback and persistence are left to the caller since they
    /// need timers and flash access. A save is confirmed by
    /// [`save_with_feedback`](crate::melody::save_with_feedback) once the
    /// slots are written, so the display is blanked here.
    pub fn present<D: SegmentDisplay, L: IndicatorLamps>(&self, display: &mut D, lamps: &mut L) {
        match self {
            Outcome::EmptyGroup => {}
            Outcome::ModeChanged(mode) => display.show_mode(*mode),
            Outcome::CommandIgnored(_) => display.clear(),
            Outcome::NoteAdded { note, lamps: mask, .. } => {
                display.show_note(note);
                lamps.set_mask(*mask);
            }
            Outcome::MelodyComplete { note, completion } => {
                lamps.clear();
                match completion {
                    Completion::Save(_) => display.clear(),
                    Completion::LoadAndPlay(_) | Completion::Play(_) => display.show_note(note),
                }
            }
            Outcome::DecodeFailed(_) => display.show_error(),
        }
    }
}

/// The decode/record/playback pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    buffer: SymbolBuffer,
    detector: WordBreakDetector,
    track: MelodyTrack,
    mode: Mode,
    dropped_symbols: u32,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl Pipeline {
    /// Create a pipeline
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            buffer: SymbolBuffer::new(),
            detector: WordBreakDetector::new(config.light_threshold, config.word_break),
            track: MelodyTrack::new(),
            mode: Mode::Normal,
            dropped_symbols: 0,
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Notes in the melody being entered
    pub fn position(&self) -> usize {
        self.track.position()
    }

    /// Symbols in the group being entered
    pub fn group_len(&self) -> usize {
        self.buffer.len()
    }

    /// Symbols dropped because the group was already full
    pub fn dropped_symbols(&self) -> u32 {
        self.dropped_symbols
    }

    /// Add a symbol to the current group
    ///
    /// Returns the updated display snapshot, or `None` if the group was
    /// full and the symbol was dropped.
    pub fn push_symbol(&mut self, symbol: Symbol) -> Option<GroupSnapshot> {
        if self.buffer.push(symbol) {
            Some(self.buffer.snapshot())
        } else {
            self.dropped_symbols = self.dropped_symbols.saturating_add(1);
            None
        }
    }

    /// Feed one light sample, finalizing the group on a word break
    pub fn sample_light(&mut self, level: u16) -> Option<Outcome> {
        if self.detector.sample(level) {
            Some(self.finalize())
        } else {
            None
        }
    }

    /// Finalize the current group
    ///
    /// The group buffer is always empty afterwards.
    pub fn finalize(&mut self) -> Outcome {
        let group = self.buffer.take();

        if group.is_empty() && self.config.empty_group == EmptyGroupPolicy::Filter {
            return Outcome::EmptyGroup;
        }

        match decode(&group, self.track.position()) {
            Ok(Decoded::Command(command)) => self.dispatch_command(command),
            Ok(Decoded::Note(note)) => self.append_note(note),
            Err(e) => Outcome::DecodeFailed(e),
        }
    }

    fn dispatch_command(&mut self, command: Command) -> Outcome {
        let next = self.mode.transition(ModeEvent::Command(command));
        if next == self.mode {
            return Outcome::CommandIgnored(command);
        }
        self.mode = next;
        Outcome::ModeChanged(next)
    }

    fn append_note(&mut self, note: Note) -> Outcome {
        let position = match self.track.push(note) {
            Ok(position) => position,
            // Unreachable in practice: a full track is consumed immediately
            Err(_) => return self.complete(note),
        };

        if self.track.is_full() {
            self.complete(note)
        } else {
            Outcome::NoteAdded {
                note,
                position,
                lamps: lamp_mask(position),
            }
        }
    }

    fn complete(&mut self, note: Note) -> Outcome {
        let melody = self.track.frequencies();
        let completion = match self.mode {
            Mode::Recording => Completion::Save(melody),
            Mode::PlaybackPending => Completion::LoadAndPlay(melody),
            Mode::Normal => Completion::Play(melody),
        };

        self.track.clear();
        self.buffer.clear();
        self.mode = self.mode.transition(ModeEvent::PendingActionComplete);

        Outcome::MelodyComplete { note, completion }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MELODY_CAPACITY, WordBreakTrigger};
    use crate::melody::persistence::tests::MemorySlots;
    use crate::melody::{load, save, save_with_feedback, LoadStatus};
    use crate::traits::display::{ALL_SEGMENTS, SAVED_SEGMENTS};
    use embassy_futures::block_on;
    use proptest::prelude::*;

    const DARK: u16 = 100;
    const LIGHT: u16 = 900;

    fn enter(pipeline: &mut Pipeline, text: &str) -> Outcome {
        for c in text.chars() {
            pipeline.push_symbol(Symbol::from_char(c).unwrap());
        }
        // Light covered then uncovered, as an operator would
        let outcome = pipeline.sample_light(DARK).expect("word break");
        assert!(pipeline.sample_light(LIGHT).is_none());
        outcome
    }

    fn enter_notes(pipeline: &mut Pipeline, count: usize) -> Option<Outcome> {
        let mut last = None;
        for _ in 0..count {
            last = Some(enter(pipeline, ".-"));
        }
        last
    }

    #[test]
    fn test_note_added() {
        let mut pipeline = Pipeline::default();
        match enter(&mut pipeline, ".-") {
            Outcome::NoteAdded {
                note,
                position,
                lamps,
            } => {
                assert_eq!(note.name, 'A');
                assert_eq!(position, 1);
                assert_eq!(lamps, 0b1);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(pipeline.group_len(), 0);
    }

    #[test]
    fn test_four_symbol_non_note_fails() {
        let mut pipeline = Pipeline::default();
        assert_eq!(
            enter(&mut pipeline, ".-.-"),
            Outcome::DecodeFailed(DecodeError::NoMatch)
        );
        assert_eq!(pipeline.position(), 0);
    }

    #[test]
    fn test_start_record_sets_mode() {
        let mut pipeline = Pipeline::default();
        assert_eq!(
            enter(&mut pipeline, "...."),
            Outcome::ModeChanged(Mode::Recording)
        );
        assert_eq!(pipeline.mode(), Mode::Recording);
        assert_eq!(pipeline.position(), 0);
    }

    #[test]
    fn test_short_group_exact_match() {
        let mut pipeline = Pipeline::default();
        assert_eq!(
            enter(&mut pipeline, "-."),
            Outcome::DecodeFailed(DecodeError::NoMatch)
        );
        assert!(matches!(
            enter(&mut pipeline, "-.."),
            Outcome::NoteAdded { note: Note { name: 'D', .. }, .. }
        ));
    }

    #[test]
    fn test_unknown_group_mid_melody_keeps_position() {
        let mut pipeline = Pipeline::default();
        enter_notes(&mut pipeline, 2);
        assert_eq!(pipeline.position(), 2);

        let outcome = enter(&mut pipeline, "--.-");
        assert!(matches!(outcome, Outcome::DecodeFailed(_)));
        assert_eq!(pipeline.position(), 2);
    }

    #[test]
    fn test_command_mid_melody_is_failure() {
        let mut pipeline = Pipeline::default();
        enter_notes(&mut pipeline, 1);
        assert_eq!(
            enter(&mut pipeline, "----"),
            Outcome::DecodeFailed(DecodeError::NoMatch)
        );
        assert_eq!(pipeline.mode(), Mode::Normal);
    }

    #[test]
    fn test_second_command_ignored() {
        let mut pipeline = Pipeline::default();
        enter(&mut pipeline, "....");
        assert_eq!(
            enter(&mut pipeline, "----"),
            Outcome::CommandIgnored(Command::RequestPlayback)
        );
        assert_eq!(pipeline.mode(), Mode::Recording);
    }

    #[test]
    fn test_fifth_symbol_dropped() {
        let mut pipeline = Pipeline::default();
        for _ in 0..4 {
            assert!(pipeline.push_symbol(Symbol::Dash).is_some());
        }
        assert!(pipeline.push_symbol(Symbol::Dot).is_none());
        assert_eq!(pipeline.group_len(), 4);
        assert_eq!(pipeline.dropped_symbols(), 1);

        // Decodes as the first four symbols only
        assert_eq!(
            pipeline.sample_light(DARK),
            Some(Outcome::ModeChanged(Mode::PlaybackPending))
        );
    }

    #[test]
    fn test_play_when_full() {
        let mut pipeline = Pipeline::default();
        let outcome = enter_notes(&mut pipeline, MELODY_CAPACITY).unwrap();
        match outcome {
            Outcome::MelodyComplete {
                completion: Completion::Play(melody),
                ..
            } => assert_eq!(melody, [440.0; MELODY_CAPACITY]),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(pipeline.position(), 0);
        assert_eq!(pipeline.mode(), Mode::Normal);
    }

    #[test]
    fn test_record_saves_and_returns_to_normal() {
        let mut pipeline = Pipeline::default();
        enter(&mut pipeline, "....");
        let outcome = enter_notes(&mut pipeline, MELODY_CAPACITY).unwrap();
        assert!(matches!(
            outcome,
            Outcome::MelodyComplete {
                completion: Completion::Save(_),
                ..
            }
        ));
        assert_eq!(pipeline.mode(), Mode::Normal);
        assert_eq!(pipeline.position(), 0);
    }

    #[test]
    fn test_playback_replays_stored_melody_every_time() {
        let mut storage = MemorySlots::new();
        let mut pipeline = Pipeline::default();

        // Record C D E F G A B C
        enter(&mut pipeline, "....");
        let mut recorded = None;
        for group in ["-.-.", "-..", ".", "..-.", "--.", ".-", "-...", "-.-."] {
            if let Outcome::MelodyComplete {
                completion: Completion::Save(melody),
                ..
            } = enter(&mut pipeline, group)
            {
                block_on(save(&mut storage, &melody)).unwrap();
                recorded = Some(melody);
            }
        }
        let recorded = recorded.expect("melody saved");

        // Request playback twice, entering different notes each time
        for filler in [".", "--."] {
            assert_eq!(
                enter(&mut pipeline, "----"),
                Outcome::ModeChanged(Mode::PlaybackPending)
            );
            let mut outcome = None;
            for _ in 0..MELODY_CAPACITY {
                outcome = Some(enter(&mut pipeline, filler));
            }
            match outcome.unwrap() {
                Outcome::MelodyComplete {
                    completion: Completion::LoadAndPlay(mut melody),
                    ..
                } => {
                    let status = block_on(load(&mut storage, &mut melody)).unwrap();
                    assert_eq!(status, LoadStatus::Complete);
                    assert_eq!(melody, recorded);
                }
                other => panic!("unexpected {:?}", other),
            }
            assert_eq!(pipeline.mode(), Mode::Normal);
        }
    }

    #[test]
    fn test_empty_group_filtered_by_default() {
        let mut pipeline = Pipeline::default();
        assert_eq!(pipeline.finalize(), Outcome::EmptyGroup);
    }

    #[test]
    fn test_legacy_level_trigger_repeats_errors() {
        let mut pipeline = Pipeline::new(PipelineConfig::legacy());
        pipeline.push_symbol(Symbol::Dot);

        // First sample decodes the group, the following ones see it empty
        assert!(matches!(
            pipeline.sample_light(DARK),
            Some(Outcome::NoteAdded { .. })
        ));
        for _ in 0..3 {
            assert_eq!(
                pipeline.sample_light(DARK),
                Some(Outcome::DecodeFailed(DecodeError::EmptyGroup))
            );
        }
        assert_eq!(pipeline.sample_light(LIGHT), None);
        assert_eq!(pipeline.position(), 1);
    }

    #[test]
    fn test_edge_trigger_fires_once() {
        let config = PipelineConfig {
            word_break: WordBreakTrigger::Edge,
            empty_group: EmptyGroupPolicy::Report,
            ..PipelineConfig::default()
        };
        let mut pipeline = Pipeline::new(config);
        pipeline.push_symbol(Symbol::Dot);

        assert!(pipeline.sample_light(DARK).is_some());
        assert!(pipeline.sample_light(DARK).is_none());
        assert!(pipeline.sample_light(DARK).is_none());
    }

    struct MockDisplay {
        digits: [u8; 4],
    }

    impl SegmentDisplay for MockDisplay {
        fn write_digits(&mut self, digits: [u8; 4]) {
            self.digits = digits;
        }
    }

    struct MockLamps {
        mask: u8,
    }

    impl IndicatorLamps for MockLamps {
        fn set_mask(&mut self, mask: u8) {
            self.mask = mask;
        }
    }

    #[test]
    fn test_present() {
        let mut display = MockDisplay { digits: [0; 4] };
        let mut lamps = MockLamps { mask: 0 };
        let mut pipeline = Pipeline::default();

        enter(&mut pipeline, ".").present(&mut display, &mut lamps);
        assert_eq!(display.digits[0], 0x79);
        assert_eq!(lamps.mask, 0b1);

        enter(&mut pipeline, "..--").present(&mut display, &mut lamps);
        assert_eq!(display.digits, [0xFF; 4]);
        assert_eq!(lamps.mask, 0b1);

        let last = enter_notes(&mut pipeline, MELODY_CAPACITY - 1).unwrap();
        last.present(&mut display, &mut lamps);
        assert_eq!(lamps.mask, 0);
    }

    #[test]
    fn test_save_confirmed_only_after_write() {
        let mut display = MockDisplay { digits: [0; 4] };
        let mut lamps = MockLamps { mask: 0 };
        let mut pipeline = Pipeline::default();

        enter(&mut pipeline, "....");
        let outcome = enter_notes(&mut pipeline, MELODY_CAPACITY).unwrap();
        outcome.present(&mut display, &mut lamps);
        assert_ne!(display.digits, [SAVED_SEGMENTS; 4]);

        let melody = match outcome {
            Outcome::MelodyComplete {
                completion: Completion::Save(melody),
                ..
            } => melody,
            other => panic!("expected save, got {:?}", other),
        };

        let mut storage = MemorySlots::new();
        storage.fail_writes = true;
        assert!(block_on(save_with_feedback(&mut storage, &melody, &mut display)).is_err());
        assert_eq!(display.digits, [ALL_SEGMENTS; 4]);

        storage.fail_writes = false;
        block_on(save_with_feedback(&mut storage, &melody, &mut display)).unwrap();
        assert_eq!(display.digits, [SAVED_SEGMENTS; 4]);
    }

    fn any_symbol() -> impl Strategy<Value = Symbol> {
        prop_oneof![Just(Symbol::Dot), Just(Symbol::Dash)]
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_for_any_input(
            groups in proptest::collection::vec(
                proptest::collection::vec(any_symbol(), 0..7),
                0..40,
            )
        ) {
            let mut pipeline = Pipeline::default();
            for group in groups {
                for symbol in group {
                    pipeline.push_symbol(symbol);
                    prop_assert!(pipeline.group_len() <= 4);
                }

                let before = pipeline.position();
                let mode_before = pipeline.mode();
                let outcome = pipeline.finalize();

                prop_assert_eq!(pipeline.group_len(), 0);
                prop_assert!(pipeline.position() < MELODY_CAPACITY);

                match outcome {
                    Outcome::NoteAdded { position, .. } => {
                        prop_assert_eq!(position, before + 1);
                    }
                    Outcome::MelodyComplete { .. } => {
                        prop_assert_eq!(before, MELODY_CAPACITY - 1);
                        prop_assert_eq!(pipeline.position(), 0);
                        prop_assert_eq!(pipeline.mode(), Mode::Normal);
                    }
                    Outcome::ModeChanged(_) => {
                        prop_assert_eq!(before, 0);
                        prop_assert_eq!(mode_before, Mode::Normal);
                    }
                    _ => {
                        prop_assert_eq!(pipeline.position(), before);
                        prop_assert_eq!(pipeline.mode(), mode_before);
                    }
                }
            }
        }
    }
}
