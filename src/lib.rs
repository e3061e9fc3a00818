#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod carousel;
pub mod effects;
pub mod errors;
pub mod utils;

#[cfg(feature = "winit")]
pub mod app;

pub use carousel::{AutoRotate, CardTransform, CarouselEngine, DragEvent, RecordingSink, TransformSink};
pub use effects::{Marquee, PointerTilt, Preloader};
pub use errors::ConveyorError;
pub use utils::time::FrameTimer;

#[cfg(feature = "winit")]
pub use app::{DragTracker, Input};
