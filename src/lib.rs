//! Unveil is a headless viewport-reveal and pointer-tilt animation engine.
//!
//! It implements the state-machine core behind "animate on scroll" wrappers
//! and 3D pointer-tilt cards, without touching any platform API itself. The
//! embedder (a DOM bridge, a native shell, a test harness) delivers events
//! and executes the engine's resource requests:
//!
//! 1. **Configure**: build a [`RegionConfig`] (or deserialize one) and insert
//!    it into a [`RevealEngine`], which returns a [`RegionHandle`].
//! 2. **Drive**: feed [`RegionEvent`]s (mount completion, intersection
//!    ratios, safety-timer expiry, viewport resizes) into the engine.
//! 3. **Execute**: perform the returned [`Effect`]s (attach/detach the
//!    intersection observer, start/cancel the safety-net timer).
//! 4. **Render**: read [`RegionOutput`] — the current state plus the property
//!    [`Snapshot`] and [`Timing`] to apply.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: variant resolution and stagger planning
//!   are pure and stable for a given input.
//! - **Fail visible, never hidden**: every degenerate input resolves to a
//!   safe visible default; a missing observer callback is covered by the
//!   safety net.
//! - **Bounded cost**: stagger bookkeeping is O(cap) regardless of list
//!   length, and resize listening is shared and reference-counted rather
//!   than per-region.
//!
//! The tilt subsystem ([`TiltSurface`], [`TiltController`]) is independent of
//! the reveal chain and follows the same pattern: pointer events in, bounded
//! rotation output and listener-wanted hints out.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod policy;
/// The reveal subsystem: configuration, state machine, engine.
pub mod reveal;
/// The pointer-tilt subsystem.
pub mod tilt;

pub use kurbo::{Point, Rect, Vec2};

pub use crate::foundation::error::{UnveilError, UnveilResult};

pub use crate::animation::ease::BezierEasing;
pub use crate::animation::stagger::{
    ChildSlot, MAX_ANIMATED_CHILDREN, MAX_PER_ITEM_DELAY_S, StaggerPlan, StaggerSettings,
    plan as plan_stagger,
};
pub use crate::animation::variant::{
    DEFAULT_DISTANCE, DEFAULT_DURATION_S, Property, ResolvedVariant, Snapshot, Timing,
    VariantSpec, resolve as resolve_variant,
};
pub use crate::policy::motion::{
    MOBILE_BREAKPOINT_PX, MotionPolicy, MotionSettings, ViewportSnapshot, resolve_policy,
};
pub use crate::policy::viewport::ViewportHub;
pub use crate::reveal::config::{DEFAULT_SAFETY_NET_MS, DEFAULT_THRESHOLD, RegionConfig};
pub use crate::reveal::engine::{RegionHandle, RevealEngine};
pub use crate::reveal::region::{
    ChildOutput, Effect, Effects, RegionEvent, RegionOutput, RegionState, RevealRegion,
};
pub use crate::tilt::controller::{
    DEFAULT_STRENGTH_DEG, TiltAngles, TiltController, TiltSettings,
};
pub use crate::tilt::surface::{BaseRotation, LayerTarget, TiltOutput, TiltSurface, TiltSurfaceConfig};
