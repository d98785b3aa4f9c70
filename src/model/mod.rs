//! The interactive model of the star system, independent of any window.
//!
//! [StarSystem] ties the pieces together:
//! - a [BodyRegistry] owning the bodies and their spin / pivot angles
//! - an [IndicatorSet] of orbit rings, at most one of them highlighted
//! - [InteractionState], naming the hovered and focused bodies
//! - a [ViewCamera] and the [TransitionController] that glides it around
//!
//! Pointer events come in through the `on_*` handlers, which pick against the
//! current scene, and `tick` advances everything by one frame.

pub mod animation;
pub mod camera;
mod error;
pub mod indicator;
pub mod interaction;
pub mod picking;
pub mod registry;
mod system;
pub mod transition;

pub use camera::ViewCamera;
pub use error::SetupError;
pub use indicator::{IndicatorSet, OrbitIndicator};
pub use interaction::InteractionState;
pub use picking::{Hit, Shape, Surface};
pub use registry::{Body, BodyID, BodyRegistry};
pub use system::{InfoPanel, StarSystem};
pub use transition::{CameraTransition, TransitionController, TransitionPhase};
