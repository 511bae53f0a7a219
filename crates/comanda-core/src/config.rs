use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LedgerConfig {
  /// Porcentaje de propina estándar aplicado por `create_meal_standard_tip`.
  #[serde(default = "default_standard_tip_percent")]
  pub standard_tip_percent: u64,
}

fn default_standard_tip_percent() -> u64 {
  20
}

impl Default for LedgerConfig {
  fn default() -> Self {
    LedgerConfig { standard_tip_percent: default_standard_tip_percent() }
  }
}
