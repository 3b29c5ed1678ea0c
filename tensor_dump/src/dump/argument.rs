use crate::tensor::Tensor;

/// Shapes in which an operation can receive tensor arguments. Each shape
/// flattens to zero or more tensors, in argument order.
pub trait DumpArgument {
    fn tensors(&self) -> impl Iterator<Item = &Tensor>;
}

impl DumpArgument for Tensor {
    fn tensors(&self) -> impl Iterator<Item = &Tensor> {
        std::iter::once(self)
    }
}

impl DumpArgument for [Tensor] {
    fn tensors(&self) -> impl Iterator<Item = &Tensor> {
        self.iter()
    }
}

impl DumpArgument for Vec<Tensor> {
    fn tensors(&self) -> impl Iterator<Item = &Tensor> {
        self.iter()
    }
}

impl<T: DumpArgument> DumpArgument for Option<T> {
    fn tensors(&self) -> impl Iterator<Item = &Tensor> {
        self.iter().flat_map(|argument| argument.tensors())
    }
}

impl<T: DumpArgument + ?Sized> DumpArgument for &T {
    fn tensors(&self) -> impl Iterator<Item = &Tensor> {
        (**self).tensors()
    }
}
