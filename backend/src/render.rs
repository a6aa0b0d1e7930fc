//! Plain-text rendering of the public site and the dashboard listings.

use std::fmt;

use ryonkt_core::domain::{ContentBundle, Work};
use ryonkt_core::site::{group_by_year, ContactLinks, Section, SiteView, BIOGRAPHY};

const BRAND: &str = "ryonkt";

/// One section of the public site, as selected by a `SiteView`.
pub struct SitePage<'a> {
  pub bundle: &'a ContentBundle,
  pub view: &'a SiteView,
}

impl fmt::Display for SitePage<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{BRAND} |")?;
    for section in Section::NAV {
      if section == self.view.section() {
        write!(f, " [{section}]")?;
      } else {
        write!(f, " {section}")?;
      }
    }
    writeln!(f)?;
    writeln!(f)?;

    match self.view.section() {
      Section::Home => self.home(f),
      Section::About => self.about(f),
      Section::Biography => biography(f),
      Section::Works => self.works(f),
      Section::Contact => self.contact(f),
    }
  }
}

impl SitePage<'_> {
  fn home(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", BRAND.to_uppercase())?;
    writeln!(f, "ambient // drone // experimental")?;
    writeln!(f, "{} releases", self.bundle.works.len())
  }

  fn about(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let about = &self.bundle.about;
    writeln!(f, "{}", about.description1)?;
    writeln!(f)?;
    writeln!(f, "{}", about.description2)?;
    writeln!(f)?;
    writeln!(f, "techniques: {}", about.techniques)?;
    writeln!(f, "influences: {}", about.influences)?;
    writeln!(f, "tools: {}", about.tools)
  }

  fn works(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let groups = group_by_year(&self.bundle.works);
    if groups.is_empty() {
      writeln!(f, "no releases yet")?;
    }

    for group in groups {
      let expanded = self.view.is_expanded(group.year);
      let marker = if expanded { '-' } else { '+' };
      writeln!(f, "{marker} {} // {}", group.year, group.release_label())?;

      if expanded {
        for work in group.works {
          writeln!(f, "    {}", WorkLine(work))?;
        }
      }
    }

    if !self.bundle.collaborations.is_empty() {
      writeln!(f)?;
      writeln!(f, "collaborations")?;
      for c in &self.bundle.collaborations {
        write!(f, "  {} - {} ({}) // {}", c.artist, c.title, c.year, c.format)?;
        if !c.label.is_empty() {
          write!(f, " // {}", c.label)?;
        }
        writeln!(f)?;
      }
    }
    Ok(())
  }

  fn contact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let contact = &self.bundle.contact;
    let links = ContactLinks::from(contact);
    writeln!(f, "email:      {}", contact.email)?;
    writeln!(f, "bandcamp:   {}", links.bandcamp)?;
    writeln!(f, "soundcloud: {}", links.soundcloud)?;
    writeln!(f, "instagram:  {}", links.instagram)?;
    writeln!(f, "discogs:    {}", links.discogs)
  }
}

fn biography(f: &mut fmt::Formatter<'_>) -> fmt::Result {
  for (i, era) in BIOGRAPHY.iter().enumerate() {
    if i > 0 {
      writeln!(f)?;
    }
    writeln!(f, "{}", era.heading)?;
    for p in era.paragraphs {
      writeln!(f, "  {p}")?;
    }
  }
  Ok(())
}

/// `title - type // label (note) <url>`, skipping empty parts.
struct WorkLine<'a>(&'a Work);

impl fmt::Display for WorkLine<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let w = self.0;
    write!(f, "{} - {}", w.title, w.kind)?;
    if !w.label.is_empty() {
      write!(f, " // {}", w.label)?;
    }
    if let Some(note) = w.note() {
      write!(f, " ({note})")?;
    }
    if let Some(url) = w.link() {
      write!(f, " <{url}>")?;
    }
    Ok(())
  }
}

/// Dashboard listing: one row per work, in stored order.
pub struct WorksTable<'a>(pub &'a [Work]);

impl fmt::Display for WorksTable<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.0.is_empty() {
      return writeln!(f, "(no works)");
    }
    for w in self.0 {
      writeln!(f, "{:>15}  {:<6} {}", w.id, w.year, WorkLine(w))?;
    }
    Ok(())
  }
}

/// Landing view of the dashboard.
pub struct DashboardOverview<'a>(pub &'a ContentBundle);

impl fmt::Display for DashboardOverview<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let bundle = self.0;
    writeln!(f, "{BRAND} dashboard")?;
    writeln!(f)?;
    writeln!(f, "works ({})", bundle.works.len())?;
    write!(f, "{}", WorksTable(&bundle.works))?;
    writeln!(f)?;
    writeln!(f, "about")?;
    write!(f, "{}", AboutFields(bundle))?;
    writeln!(f)?;
    writeln!(f, "contact")?;
    write!(f, "{}", ContactFields(bundle))
  }
}

/// Editable fields of `about`, one per line.
pub struct AboutFields<'a>(pub &'a ContentBundle);

impl fmt::Display for AboutFields<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let a = &self.0.about;
    writeln!(f, "  description1: {}", a.description1)?;
    writeln!(f, "  description2: {}", a.description2)?;
    writeln!(f, "  techniques:   {}", a.techniques)?;
    writeln!(f, "  influences:   {}", a.influences)?;
    writeln!(f, "  tools:        {}", a.tools)
  }
}

/// Editable fields of `contact`, one per line.
pub struct ContactFields<'a>(pub &'a ContentBundle);

impl fmt::Display for ContactFields<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let c = &self.0.contact;
    writeln!(f, "  email:      {}", c.email)?;
    writeln!(f, "  bandcamp:   {}", c.bandcamp)?;
    writeln!(f, "  soundcloud: {}", c.soundcloud)?;
    writeln!(f, "  instagram:  {}", c.instagram)
  }
}
