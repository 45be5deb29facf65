pub mod event;
pub mod resolver;
pub mod sensor;

pub use event::{DragEvent, DragItem, DropTarget, ItemRef};
pub use resolver::{DragResolver, DragState};
pub use sensor::{ActivationSensor, Point};
