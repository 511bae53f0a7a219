use crate::domain::ids::CustomerId;
use crate::ports::Entity;
use serde::{Deserialize, Serialize};

/// Representa a un cliente dentro del sistema.
///
/// Un cliente es la identidad que consume comidas. No guarda ninguna lista
/// de comidas propia: sus comidas se descubren recorriendo el registro de
/// `Meal` y filtrando por este ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
  /// Identificador único del cliente.
  pub id: CustomerId,

  /// Nombre del cliente.
  pub name: String,

  /// Edad declarada del cliente.
  pub age: u32,
}

impl Customer {
  pub fn new(name: impl Into<String>, age: u32) -> Self {
    Customer { id: CustomerId::new(), name: name.into(), age }
  }
}

impl Entity for Customer {
  type Id = CustomerId;

  fn id(&self) -> CustomerId {
    self.id
  }
}
