use crate::ports::{Entity, Registry};

/// Implementación en memoria de [`Registry`]: un `Vec` que sólo crece.
///
/// Vive mientras viva el proceso y asume un único hilo llamante; no hay
/// sincronización de ningún tipo.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry<E> {
  entries: Vec<E>,
}

impl<E> MemoryRegistry<E> {
  pub fn new() -> Self {
    MemoryRegistry { entries: Vec::new() }
  }
}

impl<E: Entity> Registry<E> for MemoryRegistry<E> {
  fn register(&mut self, entity: E) {
    self.entries.push(entity);
  }

  fn all(&self) -> &[E] {
    &self.entries
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::customer::Customer;
  use crate::ports::Registry;

  #[test]
  fn test_register_preserves_creation_order() {
    let mut registry = MemoryRegistry::new();
    let ana = Customer::new("Ana", 30);
    let luis = Customer::new("Luis", 41);

    registry.register(ana.clone());
    registry.register(luis.clone());

    assert_eq!(registry.all(), &[ana, luis]);
  }

  #[test]
  fn test_len_is_monotonically_non_decreasing() {
    let mut registry = MemoryRegistry::new();
    assert!(registry.is_empty());

    let mut previous = registry.len();
    for i in 0..5 {
      registry.register(Customer::new(format!("c{i}"), 20 + i));
      assert!(registry.len() > previous);
      previous = registry.len();
    }
    assert_eq!(registry.len(), 5);
  }

  #[test]
  fn test_find_uses_id_not_structural_equality() {
    let mut registry = MemoryRegistry::new();
    let first = Customer::new("Ana", 30);
    // mismos escalares, identidad distinta
    let twin = Customer::new("Ana", 30);

    registry.register(first.clone());
    registry.register(twin.clone());

    assert_eq!(registry.find(first.id), Some(&first));
    assert_eq!(registry.find(twin.id), Some(&twin));
    assert!(registry.contains(first.id));
    assert!(!registry.contains(crate::domain::CustomerId::new()));
  }

  #[test]
  fn test_duplicate_registration_is_not_rejected() {
    let mut registry = MemoryRegistry::new();
    let ana = Customer::new("Ana", 30);

    registry.register(ana.clone());
    registry.register(ana.clone());

    assert_eq!(registry.len(), 2);
  }
}
