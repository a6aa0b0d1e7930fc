use chrono::{Datelike, Local, Utc};

/// Fuente de tiempo del panel.
///
/// Se usa para derivar ids nuevos y el año por defecto de una obra nueva;
/// los tests inyectan un reloj fijo.
pub trait Clock {
  /// Milisegundos desde la época Unix.
  fn now_millis(&self) -> u64;
  /// Año actual en hora local.
  fn current_year(&self) -> i32;
}

/// Reloj real del sistema.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now_millis(&self) -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
  }

  fn current_year(&self) -> i32 {
    Local::now().year()
  }
}
