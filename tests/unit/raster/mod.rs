//! Unit tests for the raster modules

mod luminance;
