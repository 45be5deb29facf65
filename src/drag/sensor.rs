use tracing::trace;

use crate::config::DragConfig;
use crate::drag::event::{DragEvent, DragItem, DropTarget, ItemRef};

/// A pointer position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug)]
enum Press {
    Pending { item: DragItem, origin: Point },
    Active { item: ItemRef, over: Option<DropTarget> },
}

/// Converts raw pointer input into drag lifecycle events.
///
/// A press only becomes a drag once the pointer has travelled the activation
/// distance, so a click on a button inside a card stays a click. While a drag
/// is active, an `Over` event is emitted only when the hovered target
/// changes.
#[derive(Debug)]
pub struct ActivationSensor {
    activation_distance: f64,
    press: Option<Press>,
}

impl ActivationSensor {
    pub fn new(config: &DragConfig) -> Self {
        Self {
            activation_distance: config.activation_distance.max(0.0),
            press: None,
        }
    }

    /// Records a press on an item. Items being edited are not draggable.
    pub fn pointer_down(&mut self, item: DragItem, at: Point, editing: bool) {
        if editing {
            trace!(item = %item.item_ref(), "press ignored while editing");
            self.press = None;
            return;
        }
        self.press = Some(Press::Pending { item, origin: at });
    }

    /// Tracks pointer movement. Activation yields `Start`, followed by `Over`
    /// when the pointer already rests on another item.
    pub fn pointer_move(&mut self, at: Point, over: Option<DropTarget>) -> Vec<DragEvent> {
        let Some(press) = self.press.take() else {
            return Vec::new();
        };

        match press {
            Press::Pending { item, origin } => {
                if origin.distance_to(at) < self.activation_distance {
                    self.press = Some(Press::Pending { item, origin });
                    return Vec::new();
                }

                let active = item.item_ref();
                self.press = Some(Press::Active { item: active, over });

                let mut events = vec![DragEvent::Start { item }];
                if over.is_some_and(|target| !target.is_item(active)) {
                    events.push(DragEvent::Over { active, over });
                }
                events
            }
            Press::Active { item, over: previous } => {
                self.press = Some(Press::Active { item, over });
                if previous == over {
                    return Vec::new();
                }
                vec![DragEvent::Over { active: item, over }]
            }
        }
    }

    /// Ends the press. Returns `End` only if the press had turned into a drag.
    pub fn pointer_up(&mut self, over: Option<DropTarget>) -> Option<DragEvent> {
        match self.press.take()? {
            Press::Pending { .. } => None,
            Press::Active { item, .. } => Some(DragEvent::End { active: item, over }),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.press, Some(Press::Active { .. }))
    }
}

impl Default for ActivationSensor {
    fn default() -> Self {
        Self::new(&DragConfig::default())
    }
}
