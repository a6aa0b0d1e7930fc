use std::fmt;

use crate::domain::{About, Contact, Work, WorkId};

/// Registro que se está editando en el panel.
///
/// Solo puede haber uno a la vez: abrir una edición nueva descarta el
/// borrador anterior sin fusionarlo (ver [`EditSession::replace`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
  #[default]
  Idle,
  EditingWork {
    id: WorkId,
    draft: Work,
  },
  EditingAbout(About),
  EditingContact(Contact),
}

/// Qué registro apunta una sesión, sin el borrador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
  Work(WorkId),
  About,
  Contact,
}

impl EditSession {
  pub fn is_idle(&self) -> bool {
    matches!(self, EditSession::Idle)
  }

  pub fn target(&self) -> Option<EditTarget> {
    match self {
      EditSession::Idle => None,
      EditSession::EditingWork { id, .. } => Some(EditTarget::Work(*id)),
      EditSession::EditingAbout(_) => Some(EditTarget::About),
      EditSession::EditingContact(_) => Some(EditTarget::Contact),
    }
  }

  pub fn work_id(&self) -> Option<WorkId> {
    match self {
      EditSession::EditingWork { id, .. } => Some(*id),
      _ => None,
    }
  }

  /// Sustituye la sesión y devuelve la anterior (con su borrador descartado).
  pub fn replace(&mut self, next: EditSession) -> EditSession {
    std::mem::replace(self, next)
  }

  /// Cierra la sesión y devuelve lo que hubiera abierto.
  pub fn take(&mut self) -> EditSession {
    std::mem::take(self)
  }
}

impl fmt::Display for EditTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EditTarget::Work(id) => write!(f, "work {id}"),
      EditTarget::About => write!(f, "about"),
      EditTarget::Contact => write!(f, "contact"),
    }
  }
}
