use crate::site::section::Section;

/// Estado de navegación del sitio público.
///
/// `expanded_year` es el sub-estado de la sección de obras: como mucho un año
/// desplegado. Se conserva al navegar a otras secciones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteView {
  section: Section,
  expanded_year: Option<String>,
}

impl SiteView {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn section(&self) -> Section {
    self.section
  }

  pub fn expanded_year(&self) -> Option<&str> {
    self.expanded_year.as_deref()
  }

  pub fn navigate(&mut self, section: Section) {
    self.section = section;
  }

  /// Despliega `year`; si ya estaba desplegado, lo pliega.
  pub fn toggle_year(&mut self, year: &str) {
    if self.expanded_year.as_deref() == Some(year) {
      self.expanded_year = None;
    } else {
      self.expanded_year = Some(year.to_string());
    }
  }

  pub fn is_expanded(&self, year: &str) -> bool {
    self.expanded_year.as_deref() == Some(year)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_at_home_with_nothing_expanded() {
    let view = SiteView::new();
    assert_eq!(view.section(), Section::Home);
    assert_eq!(view.expanded_year(), None);
  }

  #[test]
  fn every_section_reaches_every_other() {
    let mut view = SiteView::new();
    for from in Section::ALL {
      for to in Section::ALL {
        view.navigate(from);
        view.navigate(to);
        assert_eq!(view.section(), to);
      }
    }
  }

  #[test]
  fn toggling_expanded_year_collapses_it() {
    let mut view = SiteView::new();
    view.toggle_year("2013");
    assert!(view.is_expanded("2013"));
    view.toggle_year("2013");
    assert_eq!(view.expanded_year(), None);
  }

  #[test]
  fn toggling_other_year_switches() {
    let mut view = SiteView::new();
    view.toggle_year("2013");
    view.toggle_year("2012");
    assert!(view.is_expanded("2012"));
    assert!(!view.is_expanded("2013"));
  }

  #[test]
  fn expansion_survives_navigation() {
    let mut view = SiteView::new();
    view.navigate(Section::Works);
    view.toggle_year("2009");
    view.navigate(Section::Contact);
    view.navigate(Section::Works);
    assert_eq!(view.expanded_year(), Some("2009"));
  }
}
