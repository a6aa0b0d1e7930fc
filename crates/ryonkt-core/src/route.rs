use std::fmt;

/// Superficie que se sirve en esta sesión.
///
/// Se resuelve una sola vez al arrancar y se pasa hacia abajo como
/// configuración; nadie más inspecciona la ruta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
  /// Sitio público, solo lectura.
  #[default]
  Site,
  /// Panel de edición.
  Dashboard,
}

impl Route {
  const DASHBOARD_SEGMENT: &'static str = "dashboard";

  /// Decide la superficie a partir de la ruta de la URL.
  pub fn from_path(path: &str) -> Self {
    if path.to_ascii_lowercase().contains(Self::DASHBOARD_SEGMENT) { Route::Dashboard } else { Route::Site }
  }

  pub fn is_read_only(&self) -> bool {
    matches!(self, Route::Site)
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Route::Site => write!(f, "site"),
      Route::Dashboard => write!(f, "dashboard"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolves_dashboard_paths() {
    assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
    assert_eq!(Route::from_path("/ryonkt/Dashboard/works"), Route::Dashboard);
  }

  #[test]
  fn everything_else_is_the_site() {
    assert_eq!(Route::from_path("/"), Route::Site);
    assert_eq!(Route::from_path(""), Route::Site);
    assert_eq!(Route::from_path("/works"), Route::Site);
    assert!(Route::from_path("/about").is_read_only());
  }
}
