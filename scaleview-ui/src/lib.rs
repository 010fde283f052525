//! Primitives shared by scaleview components.
//!
//! This crate contains no components itself. It provides the units geometry
//! is expressed in ([`Px`], [`Dp`]), the callback handle components notify
//! their hosts through ([`CallbackWith`]), and the single-pointer input model
//! ([`pointer`]).
//!
//! The component library lives in `scaleview-components`.

pub mod callback;
pub mod dp;
pub mod pointer;
pub mod px;

pub use crate::{
    callback::CallbackWith,
    dp::Dp,
    pointer::{PointerEvent, PointerEventContent, PointerState},
    px::{Px, PxSpan},
};
