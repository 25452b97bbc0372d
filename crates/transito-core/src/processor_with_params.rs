//! Combined [`DynamicsProcessor`] + [`ParameterInfo`] trait for boxed processors.
//!
//! `Box<dyn DynamicsProcessor>` cannot also be used as `dyn ParameterInfo`.
//! [`ProcessorWithParams`] exposes the parameter methods under prefixed names
//! through the same vtable; a blanket impl covers every type implementing
//! both traits.

use crate::param_info::{ParamDescriptor, ParameterInfo};
use crate::processor::DynamicsProcessor;

/// A processor whose parameters can be discovered through a trait object.
pub trait ProcessorWithParams: DynamicsProcessor {
    /// Parameter count.
    fn processor_param_count(&self) -> usize;

    /// Parameter descriptor by index.
    fn processor_param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Parameter value by index.
    fn processor_get_param(&self, index: usize) -> f32;

    /// Set parameter value by index.
    fn processor_set_param(&mut self, index: usize, value: f32);

    /// Parameter index by key or display name.
    fn processor_find_param(&self, name: &str) -> Option<usize>;
}

impl<T: DynamicsProcessor + ParameterInfo> ProcessorWithParams for T {
    fn processor_param_count(&self) -> usize {
        self.param_count()
    }

    fn processor_param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.param_info(index)
    }

    fn processor_get_param(&self, index: usize) -> f32 {
        self.get_param(index)
    }

    fn processor_set_param(&mut self, index: usize, value: f32) {
        self.set_param(index, value);
    }

    fn processor_find_param(&self, name: &str) -> Option<usize> {
        self.find_param(name)
    }
}
