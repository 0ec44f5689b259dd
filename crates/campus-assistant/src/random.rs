use campus_core::traits::IRandomSource;
use rand::Rng;

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl IRandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same index (wrapped to `len`). For tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedRandom(pub usize);

impl IRandomSource for FixedRandom {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Choose a template. `templates` must be non-empty.
pub(crate) fn choose<'t>(random: &dyn IRandomSource, templates: &[&'t str]) -> &'t str {
    templates[random.pick(templates.len()).min(templates.len() - 1)]
}
