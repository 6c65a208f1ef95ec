/// One observed RPC: which procedure ran and how long the reply took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub proc: i64,
    pub elapsed_s: f64,
}

impl Sample {
    pub fn new(proc: i64, elapsed_s: f64) -> Self {
        Self { proc, elapsed_s }
    }

    pub fn elapsed_us(&self) -> f64 {
        self.elapsed_s * 1_000_000.0
    }
}
