//! Carousel controller: position, animation lock, pause, hover, selection
//! and the auto-advance timer.

mod intent;
mod reducer;
mod state;

pub use intent::{CarouselIntent, Direction};
pub use reducer::CarouselReducer;
pub use state::{wrap_index, CardOffset, CarouselState, CarouselTiming, VisibleCard};
