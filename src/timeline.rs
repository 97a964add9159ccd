//! Event timeline reconstruction.
//!
//! Commands only say which slots fired and how many cycles passed since the
//! previous command. Replaying them against a running timer turns each lane
//! into Begin/End spans: a slot stays open until a later command either lets
//! cycles pass or reports a different set of slots.

use std::collections::BTreeMap;

use tracing::debug;

use crate::command::{Command, EventSlots};
use crate::error::{Result, TraceError};
use crate::events::EventNames;
use crate::metadata::{EventCodeTable, TraceMetadata};
use crate::output::TraceEvent;
use crate::trace::constants::{EVENT_SYNC_CYCLES, NUM_ACTIVE_FLAGS};
use crate::trace::{LaneKey, LaneMap};

/// Replay state of one lane.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveEventState {
    pub active: [bool; NUM_ACTIVE_FLAGS],
    pub timer: u64,
}

/// Emits span records for one lane.
struct LaneReplay<'a> {
    key: &'a LaneKey,
    table: &'a EventCodeTable,
    names: &'a EventNames,
    state: ActiveEventState,
}

impl LaneReplay<'_> {
    fn name(&self, slot: usize) -> &'static str {
        self.names.slot_name(self.key.trace_type, self.table.code(slot))
    }

    /// Close every active slot unless it is kept and no cycles passed.
    fn deactivate(&mut self, keep: EventSlots, cycles: u32, out: &mut Vec<TraceEvent>) {
        for slot in 0..NUM_ACTIVE_FLAGS {
            if self.state.active[slot] && (cycles > 0 || !keep.contains(slot)) {
                out.push(TraceEvent::end(
                    self.name(slot),
                    self.state.timer,
                    self.table.pid,
                    slot as u32,
                ));
                self.state.active[slot] = false;
            }
        }
    }

    /// Open every slot in `slots` that is not open yet and has an event.
    fn activate(&mut self, slots: EventSlots, out: &mut Vec<TraceEvent>) {
        for slot in slots.iter().map(usize::from) {
            if self.state.active[slot] || self.table.code(slot).is_none() {
                continue;
            }
            out.push(TraceEvent::begin(
                self.name(slot),
                self.state.timer,
                self.table.pid,
                slot as u32,
            ));
            self.state.active[slot] = true;
        }
    }

    fn fired(&mut self, slots: EventSlots, cycles: u32, out: &mut Vec<TraceEvent>) {
        self.state.timer += 1;
        self.deactivate(slots, cycles, out);
        self.state.timer += u64::from(cycles);
        self.activate(slots, out);
    }

    fn apply(&mut self, command: &Command, out: &mut Vec<TraceEvent>) {
        match *command {
            Command::Single0 { slot, cycles }
            | Command::Single1 { slot, cycles }
            | Command::Single2 { slot, cycles } => {
                self.fired(EventSlots::single(slot), cycles, out)
            }
            Command::Multiple0 { cycles, slots }
            | Command::Multiple1 { cycles, slots }
            | Command::Multiple2 { cycles, slots } => self.fired(slots, cycles, out),
            Command::Repeat0 { repeats } | Command::Repeat1 { repeats } => {
                self.state.timer += u64::from(repeats)
            }
            Command::EventSync => self.state.timer += EVENT_SYNC_CYCLES,
            Command::Start { .. } => {}
        }
    }
}

/// Replays decoded commands of every lane into span records.
pub struct EventTimelineBuilder<'a> {
    metadata: &'a TraceMetadata,
    names: &'a EventNames,
}

impl<'a> EventTimelineBuilder<'a> {
    pub fn new(metadata: &'a TraceMetadata, names: &'a EventNames) -> Self {
        Self { metadata, names }
    }

    /// Append Begin/End records of every lane to `out`.
    ///
    /// Fails with [`TraceError::MissingTileMetadata`] on the first lane with
    /// commands but no event configuration.
    pub fn build(&self, lanes: &LaneMap<Vec<Command>>, out: &mut Vec<TraceEvent>) -> Result<()> {
        for (key, commands) in lanes.iter() {
            let state = self.replay_lane(key, commands, out)?;
            debug!("{key}: replay ended at timer {}", state.timer);
        }
        Ok(())
    }

    /// Replay one lane and return its final state.
    pub fn replay_lane(
        &self,
        key: &LaneKey,
        commands: &[Command],
        out: &mut Vec<TraceEvent>,
    ) -> Result<ActiveEventState> {
        let table = self
            .metadata
            .get(key)
            .ok_or_else(|| TraceError::MissingTileMetadata {
                lane: *key,
                known: self.metadata.known_lanes(),
            })?;

        let mut replay = LaneReplay {
            key,
            table,
            names: self.names,
            state: ActiveEventState::default(),
        };
        for command in commands {
            replay.apply(command, out);
        }
        Ok(replay.state)
    }
}

/// Timer value at every single-event command, grouped by slot.
///
/// A coarser view than [`EventTimelineBuilder`]: `Start` loads its timer
/// value, event syncs advance the timer, and single events add their cycles
/// before being recorded. Multiple-event and repeat commands are ignored.
pub fn slot_timestamps(commands: &[Command]) -> BTreeMap<u8, Vec<u64>> {
    let mut timestamps: BTreeMap<u8, Vec<u64>> = BTreeMap::new();
    let mut ts = 0u64;
    for command in commands {
        match *command {
            Command::Start { timer_value } => ts = timer_value,
            Command::EventSync => ts += EVENT_SYNC_CYCLES,
            Command::Single0 { slot, cycles }
            | Command::Single1 { slot, cycles }
            | Command::Single2 { slot, cycles } => {
                ts += u64::from(cycles);
                timestamps.entry(slot).or_default().push(ts);
            }
            _ => {}
        }
    }
    timestamps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::SlotCodes;
    use crate::output::Phase;
    use crate::trace::{TileLocation, TraceType};

    fn core_lane() -> LaneKey {
        LaneKey::new(TraceType::Core, TileLocation::new(2, 0))
    }

    fn metadata_with(slots: SlotCodes) -> TraceMetadata {
        let mut codes = LaneMap::new();
        codes.insert(core_lane(), slots);
        TraceMetadata::from_slot_codes(&codes)
    }

    fn all_slots() -> TraceMetadata {
        // INSTR_VECTOR, ..., LOCK_STALL, ...
        metadata_with([
            Some(0x25),
            Some(0x21),
            Some(0x22),
            Some(0x4B),
            Some(0x4F),
            Some(0x1A),
            Some(0x2C),
            Some(0x2D),
        ])
    }

    fn replay(metadata: &TraceMetadata, commands: &[Command]) -> (Vec<TraceEvent>, u64) {
        let names = EventNames::new().unwrap();
        let builder = EventTimelineBuilder::new(metadata, &names);
        let mut out = Vec::new();
        let state = builder
            .replay_lane(&core_lane(), commands, &mut out)
            .unwrap();
        (out, state.timer)
    }

    fn spans(events: &[TraceEvent]) -> Vec<(Phase, u32, u64)> {
        events
            .iter()
            .map(|e| (e.ph, e.tid.unwrap(), e.ts.unwrap()))
            .collect()
    }

    #[test]
    fn test_single_opens_span() {
        let metadata = all_slots();
        let (events, timer) = replay(&metadata, &[Command::Single0 { slot: 0, cycles: 4 }]);
        assert_eq!(timer, 5);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].ph, Phase::Begin);
        assert_eq!(events[0].name, "INSTR_VECTOR");
        assert_eq!(events[0].ts, Some(5));
        assert_eq!(events[0].pid, 0);
        assert_eq!(events[0].tid, Some(0));
    }

    #[test]
    fn test_same_slot_zero_cycles_stays_open() {
        let metadata = all_slots();
        let (events, timer) = replay(
            &metadata,
            &[
                Command::Single0 { slot: 5, cycles: 0 },
                Command::Single0 { slot: 5, cycles: 0 },
            ],
        );
        assert_eq!(timer, 2);
        assert_eq!(spans(&events), vec![(Phase::Begin, 5, 1)]);
        assert_eq!(events[0].name, "LOCK_STALL");
    }

    #[test]
    fn test_cycles_close_and_reopen() {
        let metadata = all_slots();
        let (events, _) = replay(
            &metadata,
            &[
                Command::Single0 { slot: 1, cycles: 0 },
                Command::Single1 {
                    slot: 1,
                    cycles: 10,
                },
            ],
        );
        // End at timer after the increment, Begin after the cycles.
        assert_eq!(
            spans(&events),
            vec![(Phase::Begin, 1, 1), (Phase::End, 1, 2), (Phase::Begin, 1, 12)]
        );
    }

    #[test]
    fn test_other_slot_closes_previous() {
        let metadata = all_slots();
        let (events, _) = replay(
            &metadata,
            &[
                Command::Single0 { slot: 0, cycles: 0 },
                Command::Single0 { slot: 3, cycles: 0 },
            ],
        );
        assert_eq!(
            spans(&events),
            vec![(Phase::Begin, 0, 1), (Phase::End, 0, 2), (Phase::Begin, 3, 2)]
        );
    }

    #[test]
    fn test_multiple_keeps_listed_slots() {
        let metadata = all_slots();
        let (events, timer) = replay(
            &metadata,
            &[
                Command::Multiple0 {
                    cycles: 0,
                    slots: EventSlots::from_mask(0b0000_0110),
                },
                Command::Multiple1 {
                    cycles: 0,
                    slots: EventSlots::from_mask(0b0000_1100),
                },
                Command::Multiple2 {
                    cycles: 3,
                    slots: EventSlots::from_mask(0b0000_1000),
                },
            ],
        );
        assert_eq!(timer, 6);
        assert_eq!(
            spans(&events),
            vec![
                (Phase::Begin, 1, 1),
                (Phase::Begin, 2, 1),
                (Phase::End, 1, 2),
                (Phase::Begin, 3, 2),
                (Phase::End, 2, 3),
                (Phase::End, 3, 3),
                (Phase::Begin, 3, 6),
            ]
        );
    }

    #[test]
    fn test_timer_only_commands() {
        let metadata = all_slots();
        let (events, timer) = replay(
            &metadata,
            &[
                Command::Start {
                    timer_value: 1_000_000,
                },
                Command::Repeat0 { repeats: 7 },
                Command::Repeat1 { repeats: 300 },
                Command::EventSync,
            ],
        );
        assert!(events.is_empty());
        assert_eq!(timer, 307 + 0x3FFFF);
    }

    #[test]
    fn test_unconfigured_slot_never_opens() {
        let metadata = metadata_with([Some(0x25), None, None, None, None, None, None, None]);
        let (events, timer) = replay(
            &metadata,
            &[
                Command::Single0 { slot: 4, cycles: 2 },
                Command::Single0 { slot: 0, cycles: 0 },
                Command::Single0 { slot: 4, cycles: 0 },
            ],
        );
        assert_eq!(timer, 5);
        assert_eq!(spans(&events), vec![(Phase::Begin, 0, 4), (Phase::End, 0, 5)]);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let metadata = all_slots();
        let commands = [
            Command::Single0 { slot: 2, cycles: 1 },
            Command::Multiple0 {
                cycles: 0,
                slots: EventSlots::from_mask(0xFF),
            },
            Command::Repeat0 { repeats: 2 },
            Command::EventSync,
            Command::Single2 {
                slot: 7,
                cycles: 0x1_0000,
            },
        ];
        assert_eq!(replay(&metadata, &commands), replay(&metadata, &commands));
    }

    #[test]
    fn test_missing_metadata() {
        let metadata = all_slots();
        let names = EventNames::new().unwrap();
        let builder = EventTimelineBuilder::new(&metadata, &names);

        let mut lanes = LaneMap::new();
        let shim = LaneKey::new(TraceType::Shim, TileLocation::new(0, 1));
        lanes.insert(shim, vec![Command::EventSync]);

        let err = builder.build(&lanes, &mut Vec::new()).unwrap_err();
        match err {
            TraceError::MissingTileMetadata { lane, known } => {
                assert_eq!(lane, shim);
                assert_eq!(known, vec![core_lane()]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_slot_timestamps() {
        let commands = [
            Command::Single0 { slot: 1, cycles: 3 },
            Command::Start { timer_value: 100 },
            Command::Single1 { slot: 1, cycles: 5 },
            Command::Multiple0 {
                cycles: 9,
                slots: EventSlots::from_mask(0x3),
            },
            Command::EventSync,
            Command::Single0 { slot: 0, cycles: 0 },
        ];
        let timestamps = slot_timestamps(&commands);
        assert_eq!(timestamps[&1], vec![3, 105]);
        assert_eq!(timestamps[&0], vec![105 + 0x3FFFF]);
        assert_eq!(timestamps.len(), 2);
    }
}
