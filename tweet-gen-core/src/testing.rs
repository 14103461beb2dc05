use rand::RngCore;

/// Deterministic generator replaying a fixed list of `f64` draws.
///
/// `Rng::random::<f64>()` keeps the upper 53 bits of `next_u64`, so each
/// value is stored pre-shifted to come back out (up to rounding).
/// Values cycle once the list is exhausted.
pub(crate) struct ScriptedRng {
	words: Vec<u64>,
	position: usize,
}

impl ScriptedRng {
	pub(crate) fn new(draws: &[f64]) -> Self {
		assert!(!draws.is_empty(), "at least one draw is required");
		let words = draws
			.iter()
			.map(|&draw| {
				assert!((0.0..1.0).contains(&draw), "draw {draw} outside [0, 1)");
				((draw * (1u64 << 53) as f64) as u64) << 11
			})
			.collect();
		Self { words, position: 0 }
	}
}

impl RngCore for ScriptedRng {
	fn next_u32(&mut self) -> u32 {
		(self.next_u64() >> 32) as u32
	}

	fn next_u64(&mut self) -> u64 {
		let word = self.words[self.position % self.words.len()];
		self.position += 1;
		word
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		for chunk in dst.chunks_mut(8) {
			let bytes = self.next_u64().to_le_bytes();
			chunk.copy_from_slice(&bytes[..chunk.len()]);
		}
	}
}
