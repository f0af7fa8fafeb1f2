use crate::error::HeapError;

pub trait HeapOps<T> {
    fn insert(&mut self, value: T) -> Result<(), HeapError<T>>;
    fn top(&self) -> Result<&T, HeapError<T>>;
    fn extract_top(&mut self) -> Result<T, HeapError<T>>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
