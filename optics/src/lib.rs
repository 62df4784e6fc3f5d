//! Pinhole camera geometry and interaction engine.
//!
//! This crate models a 2D pinhole experiment: a draggable light source shaped
//! like an asymmetric "F" flag, a fixed pinhole in an opaque barrier, and a
//! projection screen. The geometry layer is pure math and knows nothing about
//! pointers or pixels; the interaction layer turns pointer events into source
//! positions and hands the resulting [`geometry::Projection`] to a stateless
//! renderer.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, rays, per-anchor pinhole projection |
//! | [`shape`] | Labeled source anchors and the reference flag shape |
//! | [`scene`] | Scene constants, interaction bounds, strict projection |
//! | [`image`] | Screen-face image outline derived from a projection |
//! | [`viewport`] | CSS pixel to scene coordinate mapping |
//! | [`input`] | Pointer buttons and the drag state machine |
//! | [`hit`] | Hit-testing the source handle |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`draw`] | Draw list built from scene state (renderer-neutral) |
//! | [`svg`] | SVG serialization of a draw list |
//! | [`render`] | Canvas2D serialization of a draw list |
//! | [`consts`] | Default layout constants |

pub mod consts;
pub mod draw;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod image;
pub mod input;
pub mod render;
pub mod scene;
pub mod shape;
pub mod svg;
pub mod viewport;
