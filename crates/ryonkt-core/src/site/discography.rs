use std::cmp::Ordering;

use crate::domain::Work;

/// Obras de un mismo año, en orden de inserción.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup<'a> {
  pub year: &'a str,
  pub works: Vec<&'a Work>,
}

impl YearGroup<'_> {
  /// `"1 release"` / `"4 releases"`.
  pub fn release_label(&self) -> String {
    let n = self.works.len();
    if n > 1 { format!("{n} releases") } else { format!("{n} release") }
  }
}

/// Agrupa la discografía por año, de más reciente a más antiguo.
///
/// El orden es numérico sobre los dígitos iniciales del año; los años sin
/// número van al final en el orden en que aparecen.
pub fn group_by_year(works: &[Work]) -> Vec<YearGroup<'_>> {
  let mut groups: Vec<YearGroup<'_>> = Vec::new();

  for work in works {
    match groups.iter_mut().find(|g| g.year == work.year) {
      Some(group) => group.works.push(work),
      None => groups.push(YearGroup { year: &work.year, works: vec![work] }),
    }
  }

  // sort_by es estable: empates conservan el orden de aparición
  groups.sort_by(|a, b| match (year_number(a.year), year_number(b.year)) {
    (Some(x), Some(y)) => y.cmp(&x),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  });

  groups
}

/// Número formado por los dígitos iniciales; si no cabe en `u64` satura.
fn year_number(year: &str) -> Option<u64> {
  let trimmed = year.trim_start();
  let end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
  let digits = &trimmed[..end];
  if digits.is_empty() {
    return None;
  }
  Some(digits.parse().unwrap_or(u64::MAX))
}
