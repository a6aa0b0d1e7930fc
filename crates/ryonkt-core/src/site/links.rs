use crate::domain::Contact;

/// Perfil de discogs, fijo en el sitio.
pub const DISCOGS_PROFILE: &str = "https://www.discogs.com/artist/951514-Ryonkt";

/// Enlaces salientes de la sección de contacto.
///
/// Se construyen concatenando lo guardado a prefijos conocidos; no se
/// comprueba que el resultado sea una URL válida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
  pub bandcamp: String,
  pub soundcloud: String,
  pub instagram: String,
  pub discogs: &'static str,
}

impl From<&Contact> for ContactLinks {
  fn from(contact: &Contact) -> Self {
    ContactLinks {
      bandcamp: format!("https://{}", contact.bandcamp),
      soundcloud: format!("https://{}", contact.soundcloud),
      // solo se quita la primera `@`
      instagram: format!("https://instagram.com/{}", contact.instagram.replacen('@', "", 1)),
      discogs: DISCOGS_PROFILE,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::defaults::default_contact;

  #[test]
  fn builds_links_from_default_contact() {
    let links = ContactLinks::from(&default_contact());
    assert_eq!(links.bandcamp, "https://ryonkt.bandcamp.com");
    assert_eq!(links.soundcloud, "https://soundcloud.com/ryonkt");
    assert_eq!(links.instagram, "https://instagram.com/ryonkt_official");
    assert_eq!(links.discogs, DISCOGS_PROFILE);
  }

  #[test]
  fn does_not_validate() {
    let contact = Contact {
      email: String::new(),
      bandcamp: String::new(),
      soundcloud: "https://soundcloud.com/x".into(),
      instagram: "@@double".into(),
    };
    let links = ContactLinks::from(&contact);
    assert_eq!(links.bandcamp, "https://");
    assert_eq!(links.soundcloud, "https://https://soundcloud.com/x");
    assert_eq!(links.instagram, "https://instagram.com/@double");
  }
}
