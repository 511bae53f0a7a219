use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador único de un cliente (`Customer`).
///
/// La igualdad entre clientes se decide siempre por este ID y nunca por sus
/// campos escalares: dos clientes distintos pueden compartir nombre y edad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(Uuid);

impl CustomerId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    CustomerId(Uuid::new_v4())
  }

  /// Construye un `CustomerId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    CustomerId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for CustomerId {
  fn from(u: Uuid) -> Self {
    CustomerId(u)
  }
}

impl From<CustomerId> for Uuid {
  fn from(id: CustomerId) -> Self {
    id.0
  }
}

impl fmt::Display for CustomerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador único de un mesero (`Waiter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WaiterId(Uuid);

impl WaiterId {
  pub fn new() -> Self {
    WaiterId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    WaiterId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for WaiterId {
  fn from(u: Uuid) -> Self {
    WaiterId(u)
  }
}

impl From<WaiterId> for Uuid {
  fn from(id: WaiterId) -> Self {
    id.0
  }
}

impl fmt::Display for WaiterId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador único de una comanda servida (`Meal`).
///
/// A diferencia de `CustomerId` o `WaiterId`, este ID identifica el *evento*
/// concreto (una comida servida a un cliente por un mesero), no a una persona.
/// El mismo cliente y el mismo mesero pueden compartir tantas comidas como
/// quieran; cada una recibe su propio `MealId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealId(Uuid);

impl MealId {
  /// Genera un nuevo ID único.
  pub fn new() -> Self {
    MealId(Uuid::new_v4())
  }

  /// Crea el ID desde un UUID existente.
  pub fn from_uuid(u: Uuid) -> Self {
    MealId(u)
  }

  /// Accede al UUID interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for MealId {
  fn from(u: Uuid) -> Self {
    MealId(u)
  }
}

impl From<MealId> for Uuid {
  fn from(id: MealId) -> Self {
    id.0
  }
}

impl fmt::Display for MealId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
