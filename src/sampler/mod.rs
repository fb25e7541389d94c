mod position_source;
#[allow(clippy::module_inception)]
mod sampler;

pub use position_source::PositionSource;
pub use sampler::{SamplerError, Sampling, sample};

#[cfg(test)]
pub use sampler::tests::{ScriptedSource, equator_samples};
