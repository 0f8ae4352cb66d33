//! Scroll choreography: progress tracking, spring smoothing and the
//! controllers derived from them. Nothing here touches the DOM.

pub mod curtain;
pub mod frame;
pub mod nav;
pub mod progress;
pub mod section;
pub mod spring;

pub use curtain::CurtainReveal;
pub use frame::FrameGate;
pub use nav::{NavConfig, NavPresence, NavState, NavUpdate, SectionVisibility};
pub use progress::{Geometry, ProgressTracker, ScrollOffsets};
pub use section::{Direction, DirectionLatch, SectionTracker};
pub use spring::{Spring, SpringConfig};
