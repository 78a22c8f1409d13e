//! Whole-buffer stereo audio types shared across the workspace.

pub mod stereo_samples;

pub use stereo_samples::StereoSamples;
