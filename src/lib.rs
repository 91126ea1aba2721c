//! Interactive-style teaching charts for linear regression and gradient
//! descent.
//!
//! Each demo builds a [`scene::Scene`], a list of [`layer::Layer`]s in data
//! coordinates plus the extents to show, and hands it to
//! [`render::render`], which maps everything through one
//! [`mapper::AffineMapper`] onto a [`surface::Surface`].

pub mod config;
pub mod dataset;
pub mod descent;
pub mod layer;
pub mod mapper;
pub mod output;
pub mod point;
pub mod regression;
pub mod render;
pub mod scene;
pub mod surface;
