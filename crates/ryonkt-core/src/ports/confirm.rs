/// Paso de confirmación explícita antes de una operación destructiva.
///
/// La CLI pregunta por stdin (o acepta `--yes`); los tests usan un `bool`.
pub trait Confirm {
  fn confirm(&self, prompt: &str) -> bool;
}

impl Confirm for bool {
  fn confirm(&self, _prompt: &str) -> bool {
    *self
  }
}

impl<F> Confirm for F
where
  F: Fn(&str) -> bool,
{
  fn confirm(&self, prompt: &str) -> bool {
    self(prompt)
  }
}
