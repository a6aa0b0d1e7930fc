use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::domain::{About, Contact, ContentBundle, Work, WorkId};
use crate::errors::CoreError;
use crate::ports::{Clock, Confirm, KeyValueStore, SystemClock};
use crate::services::edit_session::EditSession;
use crate::services::persistence::ContentPersistence;

/// Texto que se muestra antes de borrar una obra.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this work?";

/// Estado de la aplicación del panel de edición.
///
/// Es el único dueño del `ContentBundle` en memoria durante la sesión: toda
/// mutación pasa por estos métodos y cada una que cambia algo termina con un
/// `save` del bundle entero.
pub struct Dashboard<S, C = SystemClock>
where
  S: KeyValueStore,
  C: Clock,
{
  persistence: ContentPersistence<S>,
  clock: C,
  bundle: ContentBundle,
  session: EditSession,
  // id más alto emitido o visto en esta sesión; no baja aunque se borre
  high_water: Option<WorkId>,
}

impl<S, C> Dashboard<S, C>
where
  S: KeyValueStore,
  C: Clock,
{
  /// Carga el bundle desde el almacén (o el contenido de fábrica).
  pub fn open(persistence: ContentPersistence<S>, clock: C) -> Result<Self, CoreError> {
    let bundle = persistence.load()?;
    info!(key = persistence.key(), works = bundle.works.len(), "dashboard opened");
    Ok(Self::with_bundle(persistence, clock, bundle))
  }

  /// Arranca con un bundle ya cargado; no lee ni escribe.
  pub fn with_bundle(persistence: ContentPersistence<S>, clock: C, bundle: ContentBundle) -> Self {
    let high_water = bundle.max_work_id();
    Self { persistence, clock, bundle, session: EditSession::Idle, high_water }
  }

  pub fn bundle(&self) -> &ContentBundle {
    &self.bundle
  }

  pub fn works(&self) -> &[Work] {
    &self.bundle.works
  }

  pub fn session(&self) -> &EditSession {
    &self.session
  }

  pub fn persistence(&self) -> &ContentPersistence<S> {
    &self.persistence
  }

  pub fn into_bundle(self) -> ContentBundle {
    self.bundle
  }

  fn persist(&self) -> Result<(), CoreError> {
    self.persistence.save(&self.bundle)
  }

  fn begin(&mut self, next: EditSession) {
    let previous = self.session.replace(next);
    if let Some(target) = previous.target() {
      debug!(discarded = %target, "open draft discarded");
    }
  }

  /// Id nuevo: milisegundos del reloj, pero siempre por encima de todo lo emitido.
  ///
  /// Si ya se emitió `u64::MAX` no hay nada por encima: se usa el menor id
  /// que no tenga ninguna obra actual.
  fn next_work_id(&mut self) -> Result<WorkId, CoreError> {
    let now = WorkId::new(self.clock.now_millis());
    let next = match self.high_water {
      Some(high) if now <= high => high.successor(),
      _ => Some(now),
    };

    match next {
      Some(id) => {
        self.high_water = Some(id);
        Ok(id)
      }
      None => self.lowest_free_id(),
    }
  }

  fn lowest_free_id(&self) -> Result<WorkId, CoreError> {
    let used: HashSet<WorkId> = self.bundle.works.iter().map(|w| w.id).collect();
    let id = (1..=u64::MAX).map(WorkId::new).find(|id| !used.contains(id)).ok_or(CoreError::IdsExhausted)?;
    warn!(%id, "work ids above the clock are exhausted, reusing a free id");
    Ok(id)
  }

  // -------- WORKS --------

  /// Inserta una obra por defecto al principio y la abre para edición.
  pub fn add_work(&mut self) -> Result<WorkId, CoreError> {
    let id = self.next_work_id()?;
    let work = Work::placeholder(id, self.clock.current_year());

    self.bundle.works.insert(0, work.clone());
    self.begin(EditSession::EditingWork { id, draft: work });
    self.persist()?;

    debug!(%id, "work added");
    Ok(id)
  }

  /// Reemplaza el registro completo de `id`. Id desconocido → `Ok(false)` sin escribir.
  pub fn update_work(&mut self, id: WorkId, mut work: Work) -> Result<bool, CoreError> {
    work.id = id;

    let Some(slot) = self.bundle.find_work_mut(id) else {
      debug!(%id, "update ignored, unknown work");
      return Ok(false);
    };
    *slot = work;
    self.persist()?;

    debug!(%id, "work updated");
    Ok(true)
  }

  /// Borra la obra `id` si se confirma. Rechazo o id desconocido → `Ok(false)`.
  pub fn delete_work(&mut self, id: WorkId, confirm: &impl Confirm) -> Result<bool, CoreError> {
    if !confirm.confirm(DELETE_PROMPT) {
      debug!(%id, "delete declined");
      return Ok(false);
    }

    let before = self.bundle.works.len();
    self.bundle.works.retain(|w| w.id != id);
    if self.bundle.works.len() == before {
      debug!(%id, "delete ignored, unknown work");
      return Ok(false);
    }

    if self.session.work_id() == Some(id) {
      self.session = EditSession::Idle;
    }
    self.persist()?;

    debug!(%id, "work deleted");
    Ok(true)
  }

  /// Copia la obra en un borrador. Id desconocido → `false`, la sesión no cambia.
  pub fn begin_work_edit(&mut self, id: WorkId) -> bool {
    let Some(work) = self.bundle.find_work(id).cloned() else {
      return false;
    };
    self.begin(EditSession::EditingWork { id, draft: work });
    true
  }

  pub fn work_draft_mut(&mut self) -> Option<&mut Work> {
    match &mut self.session {
      EditSession::EditingWork { draft, .. } => Some(draft),
      _ => None,
    }
  }

  // -------- ABOUT / CONTACT --------

  pub fn begin_about_edit(&mut self) {
    self.begin(EditSession::EditingAbout(self.bundle.about.clone()));
  }

  pub fn begin_contact_edit(&mut self) {
    self.begin(EditSession::EditingContact(self.bundle.contact.clone()));
  }

  pub fn about_draft_mut(&mut self) -> Option<&mut About> {
    match &mut self.session {
      EditSession::EditingAbout(draft) => Some(draft),
      _ => None,
    }
  }

  pub fn contact_draft_mut(&mut self) -> Option<&mut Contact> {
    match &mut self.session {
      EditSession::EditingContact(draft) => Some(draft),
      _ => None,
    }
  }

  /// Sobrescribe `about` tal cual y guarda.
  pub fn replace_about(&mut self, about: About) -> Result<(), CoreError> {
    self.bundle.about = about;
    self.persist()?;
    if matches!(self.session, EditSession::EditingAbout(_)) {
      self.session = EditSession::Idle;
    }
    debug!("about replaced");
    Ok(())
  }

  /// Sobrescribe `contact` tal cual y guarda.
  pub fn replace_contact(&mut self, contact: Contact) -> Result<(), CoreError> {
    self.bundle.contact = contact;
    self.persist()?;
    if matches!(self.session, EditSession::EditingContact(_)) {
      self.session = EditSession::Idle;
    }
    debug!("contact replaced");
    Ok(())
  }

  // -------- SESSION --------

  /// Aplica el borrador abierto y cierra la sesión.
  ///
  /// Devuelve `false` si no había nada que aplicar (sesión vacía, o la obra
  /// editada ya no existe). Si el guardado falla la sesión sigue abierta con
  /// su borrador.
  pub fn commit_edit(&mut self) -> Result<bool, CoreError> {
    let applied = match self.session.clone() {
      EditSession::Idle => return Ok(false),
      EditSession::EditingWork { id, draft } => self.update_work(id, draft)?,
      EditSession::EditingAbout(draft) => {
        self.replace_about(draft)?;
        true
      }
      EditSession::EditingContact(draft) => {
        self.replace_contact(draft)?;
        true
      }
    };
    self.session = EditSession::Idle;
    Ok(applied)
  }

  /// Descarta el borrador; los datos vivos no cambian y no se escribe nada.
  pub fn cancel_edit(&mut self) -> bool {
    !self.session.take().is_idle()
  }

  /// Vuelve al contenido de fábrica y lo guarda.
  pub fn reset_to_default(&mut self) -> Result<(), CoreError> {
    self.bundle = ContentBundle::default();
    self.session = EditSession::Idle;
    self.high_water = self.high_water.max(self.bundle.max_work_id());
    self.persist()?;
    info!("content reset to defaults");
    Ok(())
  }
}
