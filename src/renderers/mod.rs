mod recording;
pub use recording::{DrawCall, RecordingSurface};
