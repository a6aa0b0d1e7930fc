use std::{fmt, str::FromStr};

/// Sección visible del sitio público.
///
/// Todas son alcanzables desde todas mediante navegación explícita; no hay
/// transiciones automáticas ni estado terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
  #[default]
  Home,
  About,
  Biography,
  Works,
  Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}` (expected one of: home, about, biography, works, contact)")]
pub struct ParseSectionError(pub String);

impl Section {
  /// Entradas de la barra de navegación, en orden. `Home` se alcanza con el logo.
  pub const NAV: [Section; 4] = [Section::About, Section::Biography, Section::Works, Section::Contact];

  pub const ALL: [Section; 5] =
    [Section::Home, Section::About, Section::Biography, Section::Works, Section::Contact];

  pub fn as_str(&self) -> &'static str {
    match self {
      Section::Home => "home",
      Section::About => "about",
      Section::Biography => "biography",
      Section::Works => "works",
      Section::Contact => "contact",
    }
  }
}

impl FromStr for Section {
  type Err = ParseSectionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Section::ALL
      .into_iter()
      .find(|section| section.as_str().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| ParseSectionError(s.to_string()))
  }
}

impl fmt::Display for Section {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
