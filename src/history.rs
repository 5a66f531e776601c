//! Recent swipes shown by the demo.

use std::rc::Rc;
use yew::Reducible;
use yew_swipe::{Direction, SwipeDetail};

pub const HISTORY_LEN: usize = 8;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeHistory {
    /// Newest first.
    pub entries: Vec<SwipeDetail>,
    pub total: u32,
}

pub enum HistoryAction {
    Record(SwipeDetail),
    Clear,
}

impl SwipeHistory {
    pub fn last(&self) -> Option<&SwipeDetail> {
        self.entries.first()
    }

    pub fn count(&self, direction: Direction) -> usize {
        self.entries.iter().filter(|d| d.direction == direction).count()
    }
}

impl Reducible for SwipeHistory {
    type Action = HistoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            HistoryAction::Record(detail) => {
                next.entries.insert(0, detail);
                next.entries.truncate(HISTORY_LEN);
                next.total += 1;
            }
            HistoryAction::Clear => next = SwipeHistory::default(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(direction: Direction, distance: f64) -> SwipeDetail {
        SwipeDetail {
            direction,
            duration: 100.0,
            distance,
        }
    }

    #[test]
    fn keeps_newest_first_and_caps_length() {
        let mut h = Rc::new(SwipeHistory::default());
        for i in 0..(HISTORY_LEN + 3) {
            h = h.reduce(HistoryAction::Record(detail(Direction::Left, i as f64)));
        }
        assert_eq!(h.entries.len(), HISTORY_LEN);
        assert_eq!(h.total as usize, HISTORY_LEN + 3);
        assert_eq!(h.last().unwrap().distance, (HISTORY_LEN + 2) as f64);
    }

    #[test]
    fn clear_resets_everything() {
        let h = Rc::new(SwipeHistory::default())
            .reduce(HistoryAction::Record(detail(Direction::Up, 30.0)))
            .reduce(HistoryAction::Record(detail(Direction::Down, 40.0)));
        assert_eq!(h.count(Direction::Up), 1);
        let h = h.reduce(HistoryAction::Clear);
        assert_eq!(*h, SwipeHistory::default());
    }
}
