use serde::{Deserialize, Serialize};

use crate::domain::ids::{CustomerId, MealId, WaiterId};
use crate::domain::money::Money;
use crate::ports::Entity;

/// Representa una comida servida: el registro que une a un cliente con un
/// mesero.
///
/// A diferencia de [`Customer`](crate::domain::customer::Customer) y
/// [`Waiter`](crate::domain::waiter::Waiter), que son identidades, `Meal`
/// describe el *evento concreto* de la relación:
///
/// - qué cliente comió,
/// - qué mesero lo atendió,
/// - cuánto costó y cuánta propina dejó.
///
/// Un mismo cliente puede aparecer en varios `Meal` con el mismo mesero
/// (cena de lunes, cena de martes…); cada uno es un registro independiente.
///
/// Las dos referencias se fijan en la construcción y no cambian después;
/// por eso son campos privados con accesores de sólo lectura. El payload
/// escalar (`total`, `tip`) sí es público y mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
  id: MealId,

  // --- Relaciones (inmutables tras la construcción) ---
  customer_id: CustomerId,
  waiter_id: WaiterId,

  // --- Payload escalar ---
  /// Importe total de la comida.
  pub total: Money,

  /// Propina dejada por el cliente.
  pub tip: Money,
}

impl Meal {
  pub fn new(customer_id: CustomerId, waiter_id: WaiterId, total: Money, tip: Money) -> Self {
    Meal { id: MealId::new(), customer_id, waiter_id, total, tip }
  }

  /// Identificador único de esta comida.
  pub fn id(&self) -> MealId {
    self.id
  }

  /// Cliente que consumió esta comida.
  pub fn customer_id(&self) -> CustomerId {
    self.customer_id
  }

  /// Mesero que sirvió esta comida.
  pub fn waiter_id(&self) -> WaiterId {
    self.waiter_id
  }
}

impl Entity for Meal {
  type Id = MealId;

  fn id(&self) -> MealId {
    self.id
  }
}

/// Parametriza por cuál de las dos referencias de un [`Meal`] se filtra.
///
/// Permite escribir el recorrido hacia adelante (cliente → meseros) y el
/// inverso (mesero → clientes) con una sola función genérica en vez de dos
/// copias del mismo filtro.
pub trait MealSide {
  type Id: Copy + Eq;

  /// Devuelve la referencia de este lado del registro.
  fn reference(meal: &Meal) -> Self::Id;
}

/// Filtra los `Meal` por su cliente.
pub struct ByCustomer;

impl MealSide for ByCustomer {
  type Id = CustomerId;

  fn reference(meal: &Meal) -> CustomerId {
    meal.customer_id
  }
}

/// Filtra los `Meal` por su mesero.
pub struct ByWaiter;

impl MealSide for ByWaiter {
  type Id = WaiterId;

  fn reference(meal: &Meal) -> WaiterId {
    meal.waiter_id
  }
}
