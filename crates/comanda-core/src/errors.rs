use thiserror::Error;

use crate::domain::{CustomerId, WaiterId};

/// Error genérico del núcleo de Comanda.
///
/// Sólo la construcción de un `Meal` puede fallar: las dos referencias deben
/// apuntar a registros ya existentes. Los registros en sí (append, recorrido,
/// mapeo) son infalibles y no devuelven `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
  #[error("unknown customer: {0}")]
  UnknownCustomer(CustomerId),

  #[error("unknown waiter: {0}")]
  UnknownWaiter(WaiterId),

  #[error("not found")]
  NotFound,
}
