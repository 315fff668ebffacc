mod section_add_strategy;
mod split_ops;

pub use section_add_strategy::SectionAddStrategy;
