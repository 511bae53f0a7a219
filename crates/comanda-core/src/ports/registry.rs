/// Entidad registrable: expone un identificador estable.
///
/// La identidad es siempre por ID explícito, nunca por igualdad estructural:
/// dos registros con los mismos campos escalares siguen siendo entidades
/// distintas.
pub trait Entity: Clone {
  type Id: Copy + Eq;

  fn id(&self) -> Self::Id;
}

/// Registro de todas las instancias de un tipo de entidad, en orden de
/// creación.
///
/// El contrato es deliberadamente pequeño e infalible:
///
/// - `register` siempre tiene éxito (append sin comprobación de duplicados),
/// - `all` devuelve la secuencia completa ordenada,
/// - no existe ninguna operación de borrado.
pub trait Registry<E: Entity> {
  /// Añade una entidad al final del registro.
  fn register(&mut self, entity: E);

  /// Devuelve todas las entidades registradas, en orden de creación.
  fn all(&self) -> &[E];

  /// Busca una entidad por su ID.
  fn find(&self, id: E::Id) -> Option<&E> {
    self.all().iter().find(|e| e.id() == id)
  }

  /// Indica si el registro contiene una entidad con ese ID.
  fn contains(&self, id: E::Id) -> bool {
    self.find(id).is_some()
  }

  fn len(&self) -> usize {
    self.all().len()
  }

  fn is_empty(&self) -> bool {
    self.all().is_empty()
  }
}
