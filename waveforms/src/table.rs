/// A named lookup table, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
    pub name: String,
    pub samples: Vec<i16>,
}

impl Waveform {
    pub fn new(name: &str, samples: Vec<i16>) -> Self {
        Self {
            name: name.to_owned(),
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
