/// Source of template choices. Injected so tests can force a template.
pub trait IRandomSource: Send + Sync {
    /// Pick an index in `0..len`. `len` is always non-zero.
    fn pick(&self, len: usize) -> usize;
}
