use std::collections::HashMap;

use crate::model::{Isolation, SwipeConfig, SwipeResult, TouchSample};

/// Identifies one in-flight interaction: the bound element's index and, with
/// the pointer transport, the pointer id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InteractionKey {
    pub element: usize,
    pub pointer: Option<i32>,
}

impl InteractionKey {
    pub fn element(element: usize) -> Self {
        Self {
            element,
            pointer: None,
        }
    }

    pub fn pointer(element: usize, pointer: i32) -> Self {
        Self {
            element,
            pointer: Some(pointer),
        }
    }
}

/// Start sample and last move sample of one gesture.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Interaction {
    pub start: Option<TouchSample>,
    pub last_move: Option<TouchSample>,
}

impl Interaction {
    pub fn evaluate(&self, config: &SwipeConfig) -> Option<SwipeResult> {
        match (&self.start, &self.last_move) {
            (Some(start), Some(last)) => Some(SwipeResult::evaluate(start, last, config)),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct InteractionTable {
    isolation: Isolation,
    slots: HashMap<InteractionKey, Interaction>,
}

impl InteractionTable {
    pub fn new(isolation: Isolation) -> Self {
        Self {
            isolation,
            slots: HashMap::new(),
        }
    }

    fn slot_key(&self, key: InteractionKey) -> InteractionKey {
        match self.isolation {
            Isolation::PerElement => key,
            Isolation::Shared => InteractionKey::element(0),
        }
    }

    /// Per element, a start replaces the whole interaction, stale move
    /// included. The shared slot only overwrites its start sample, so a move
    /// recorded on another element survives.
    pub fn begin(&mut self, key: InteractionKey, sample: TouchSample) {
        let k = self.slot_key(key);
        match self.isolation {
            Isolation::PerElement => {
                self.slots.insert(
                    k,
                    Interaction {
                        start: Some(sample),
                        last_move: None,
                    },
                );
            }
            Isolation::Shared => self.slots.entry(k).or_default().start = Some(sample),
        }
    }

    /// Only the latest move is kept. Per element, moves without a start
    /// (pointer hover) are ignored.
    pub fn record_move(&mut self, key: InteractionKey, sample: TouchSample) {
        let k = self.slot_key(key);
        match self.isolation {
            Isolation::PerElement => {
                if let Some(it) = self.slots.get_mut(&k) {
                    it.last_move = Some(sample);
                }
            }
            Isolation::Shared => self.slots.entry(k).or_default().last_move = Some(sample),
        }
    }

    /// Removes the interaction for `key`. Always clears the slot, even when
    /// the gesture is incomplete.
    pub fn finish(&mut self, key: InteractionKey) -> Option<Interaction> {
        let k = self.slot_key(key);
        self.slots.remove(&k)
    }

    pub fn get(&self, key: InteractionKey) -> Option<&Interaction> {
        self.slots.get(&self.slot_key(key))
    }

    pub fn active(&self) -> usize {
        self.slots.len()
    }
}
