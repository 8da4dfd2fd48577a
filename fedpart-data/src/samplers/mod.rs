pub mod cyclic_inner_loop_sampler;
pub mod random_sampler;
pub mod sequential_sampler;
pub mod traits;

pub use cyclic_inner_loop_sampler::CyclicInnerLoopSampler;
pub use random_sampler::RandomSampler;
pub use sequential_sampler::SequentialSampler;
pub use traits::Sampler;
