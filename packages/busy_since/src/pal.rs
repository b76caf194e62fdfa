// Platform abstraction for busy_since.
//
// Provides a mockable interface over the kernel-exposed metrics sources and the sampling
// delays. Cookie file I/O is real file I/O on a caller-supplied path and stays outside
// this layer.

mod abstractions;
mod facade;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
pub(crate) use real::*;
