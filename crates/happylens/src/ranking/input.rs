use super::WeightVector;
use crate::dataset::Factor;
use std::io::{BufRead, Write};

#[derive(Debug, thiserror::Error)]
pub enum WeightInputError {
    #[error("failed to read weight input: {0}")]
    Io(#[from] std::io::Error),
    #[error("weight input closed before all six factors were provided")]
    InputClosed,
}

/// Capability for collecting a complete weight vector from a user.
///
/// Implementations never surface a partial vector: they either return all six
/// weights or an error.
pub trait WeightSource {
    fn collect_weights(&mut self) -> Result<WeightVector, WeightInputError>;
}

/// Sequential prompt loop over an input/output pair (text mode).
///
/// Each factor is requested in canonical order and re-prompted until the
/// entry parses as a float within `[0, 1]` inclusive. There is no retry
/// limit; only a closed input aborts.
pub struct PromptWeightSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptWeightSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt_factor(&mut self, factor: Factor) -> Result<f64, WeightInputError> {
        loop {
            write!(self.output, "{}: ", factor.label())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(WeightInputError::InputClosed);
            }

            match line.trim().parse::<f64>() {
                Ok(value) if (0.0..=1.0).contains(&value) => return Ok(value),
                Ok(_) => writeln!(self.output, "Please enter a value between 0 and 1.")?,
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> WeightSource for PromptWeightSource<R, W> {
    fn collect_weights(&mut self) -> Result<WeightVector, WeightInputError> {
        writeln!(
            self.output,
            "Please enter weights for each factor (between 0 and 1)."
        )?;

        let mut values = [0.0; Factor::COUNT];
        for (slot, factor) in values.iter_mut().zip(Factor::ALL) {
            *slot = self.prompt_factor(factor)?;
        }

        Ok(WeightVector::from_validated(values))
    }
}

/// Weight source backed by an already-validated vector.
///
/// This is the simultaneous variant: dashboard sliders are bounded controls,
/// so the state they deliver needs no validation loop.
pub struct PresetWeights {
    weights: WeightVector,
}

impl PresetWeights {
    pub fn new(weights: WeightVector) -> Self {
        Self { weights }
    }
}

impl WeightSource for PresetWeights {
    fn collect_weights(&mut self) -> Result<WeightVector, WeightInputError> {
        Ok(self.weights.clone())
    }
}
