/// Seedable xorshift generator for layout randomness.
///
/// The upstream chart templates relied on unseeded `Math.random` for
/// warm-start jitter and group-centroid scatter; here the seed travels
/// in the request so runs are bit-reproducible.
#[derive(Debug, Clone)]
pub(crate) struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D_u64)
    }

    /// Uniform in [0, 1) with 53 bits of precision.
    pub fn next_f32_unit(&mut self) -> f32 {
        let u = self.next_u64() >> 11;
        ((u as f64) / ((1u64 << 53) as f64)) as f32
    }

    /// Uniform in (-1, 1).
    pub fn next_f32_signed(&mut self) -> f32 {
        self.next_f32_unit() * 2.0 - 1.0
    }
}
