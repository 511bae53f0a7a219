use crate::domain::ids::WaiterId;
use crate::ports::Entity;
use serde::{Deserialize, Serialize};

/// Representa a un mesero dentro del sistema.
///
/// Igual que [`crate::domain::customer::Customer`], no guarda sus comidas:
/// se descubren filtrando el registro de `Meal` por este ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waiter {
  /// Identificador único del mesero.
  pub id: WaiterId,

  /// Nombre del mesero.
  pub name: String,

  /// Años de experiencia en sala.
  pub years_experience: u32,
}

impl Waiter {
  pub fn new(name: impl Into<String>, years_experience: u32) -> Self {
    Waiter { id: WaiterId::new(), name: name.into(), years_experience }
  }
}

impl Entity for Waiter {
  type Id = WaiterId;

  fn id(&self) -> WaiterId {
    self.id
  }
}
