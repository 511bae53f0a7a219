use serde::{Deserialize, Serialize};
use std::fmt;

/// Representa un importe monetario en unidades menores (centavos).
///
/// Internamente se guarda como un entero (`u64`) en formato *fixed-point*
/// con 2 decimales implícitos. Es decir:
///
/// - `0.00`  → `0`
/// - `12.50` → `1250`
/// - `50.00` → `5000`
///
/// Esto evita errores de redondeo típicos de los `f32` al acumular totales
/// y calcular propinas porcentuales.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(u64);

impl Money {
  /// Centavos por unidad mayor (2 cifras decimales).
  const MINOR_PER_MAJOR: u64 = 100;

  /// Importe cero.
  pub const ZERO: Money = Money(0);

  /// Construye un importe desde unidades mayores enteras (`50` → `50.00`).
  pub fn from_major(major: u64) -> Self {
    Money(major * Self::MINOR_PER_MAJOR)
  }

  /// Construye un importe directamente en centavos.
  pub fn from_minor(minor: u64) -> Self {
    Money(minor)
  }

  /// Devuelve el importe en centavos.
  pub fn as_minor(&self) -> u64 {
    self.0
  }

  /// Calcula un porcentaje del importe, redondeado al centavo más cercano.
  ///
  /// Se usa para propinas: `Money::from_major(50).percent(20)` → `10.00`.
  ///
  /// El producto intermedio se calcula en `u128` y el resultado se satura a
  /// `u64`: igual que [`Money::saturating_add`], un importe absurdo devuelve
  /// el máximo representable en vez de entrar en pánico.
  pub fn percent(&self, pct: u64) -> Money {
    let scaled = (self.0 as u128 * pct as u128 + 50) / 100;
    Money(scaled.min(u64::MAX as u128) as u64)
  }

  /// Suma saturante: un ledger nunca debería desbordar `u64`, pero si
  /// ocurre preferimos el máximo representable a un pánico.
  pub fn saturating_add(self, other: Money) -> Money {
    Money(self.0.saturating_add(other.0))
  }
}

impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{:02}", self.0 / Self::MINOR_PER_MAJOR, self.0 % Self::MINOR_PER_MAJOR)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_major_scales_to_minor() {
    assert_eq!(Money::from_major(50).as_minor(), 5000);
    assert_eq!(Money::from_minor(1250).as_minor(), 1250);
  }

  #[test]
  fn test_percent_rounds_to_nearest_minor() {
    assert_eq!(Money::from_major(50).percent(20), Money::from_major(10));
    // 3.33 * 15% = 0.4995 → 0.50
    assert_eq!(Money::from_minor(333).percent(15), Money::from_minor(50));
    assert_eq!(Money::ZERO.percent(20), Money::ZERO);
  }

  #[test]
  fn test_display_uses_two_decimals() {
    assert_eq!(Money::from_minor(1205).to_string(), "12.05");
    assert_eq!(Money::ZERO.to_string(), "0.00");
  }

  #[test]
  fn test_percent_of_huge_amount_saturates_instead_of_panicking() {
    let huge = Money::from_minor(u64::MAX / 10);
    assert_eq!(huge.percent(20), Money::from_minor((u64::MAX as u128 / 10 * 20 / 100) as u64));
    assert_eq!(Money::from_minor(u64::MAX).percent(200), Money::from_minor(u64::MAX));
  }

  #[test]
  fn test_saturating_add() {
    let a = Money::from_major(50);
    let b = Money::from_major(10);
    assert_eq!(a.saturating_add(b), Money::from_major(60));
    assert_eq!(Money::from_minor(u64::MAX).saturating_add(b), Money::from_minor(u64::MAX));
  }
}
