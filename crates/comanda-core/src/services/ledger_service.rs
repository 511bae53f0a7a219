use tracing::debug;

use crate::config::LedgerConfig;
use crate::domain::customer::Customer;
use crate::domain::meal::{ByCustomer, ByWaiter, Meal, MealSide};
use crate::domain::waiter::Waiter;
use crate::domain::{CustomerId, MealId, Money, WaiterId};
use crate::errors::CoreError;
use crate::memory::MemoryRegistry;
use crate::ports::Registry;

/// Servicio central del ledger: posee los tres registros y expone la API de
/// construcción y consulta.
///
/// Los registros se pasan explícitamente en la construcción en vez de vivir
/// como estado global del proceso; dos `LedgerService` distintos no comparten
/// nada.
pub struct LedgerService<C, W, M>
where
  C: Registry<Customer>,
  W: Registry<Waiter>,
  M: Registry<Meal>,
{
  customers: C,
  waiters: W,
  meals: M,
  config: LedgerConfig,
}

/// Ledger respaldado por registros en memoria, el caso común.
pub type MemoryLedger =
  LedgerService<MemoryRegistry<Customer>, MemoryRegistry<Waiter>, MemoryRegistry<Meal>>;

impl MemoryLedger {
  pub fn in_memory() -> Self {
    Self::in_memory_with(LedgerConfig::default())
  }

  pub fn in_memory_with(config: LedgerConfig) -> Self {
    LedgerService::new(MemoryRegistry::new(), MemoryRegistry::new(), MemoryRegistry::new(), config)
  }
}

impl<C, W, M> LedgerService<C, W, M>
where
  C: Registry<Customer>,
  W: Registry<Waiter>,
  M: Registry<Meal>,
{
  pub fn new(customers: C, waiters: W, meals: M, config: LedgerConfig) -> Self {
    Self { customers, waiters, meals, config }
  }

  // -------- CREATE (write) --------

  /// Crea y registra un cliente nuevo.
  pub fn create_customer(&mut self, name: impl Into<String>, age: u32) -> Customer {
    let customer = Customer::new(name, age);
    debug!(id = %customer.id, name = %customer.name, "registered customer");
    self.customers.register(customer.clone());
    customer
  }

  /// Crea y registra un mesero nuevo.
  pub fn create_waiter(&mut self, name: impl Into<String>, years_experience: u32) -> Waiter {
    let waiter = Waiter::new(name, years_experience);
    debug!(id = %waiter.id, name = %waiter.name, "registered waiter");
    self.waiters.register(waiter.clone());
    waiter
  }

  /// Crea y registra una comida que une a un cliente con un mesero.
  ///
  /// Las dos referencias se validan aquí, en la construcción: una comida con
  /// referencias colgantes fallaría recién al recorrerla, y eso es
  /// exactamente lo que este método impide.
  pub fn create_meal(
    &mut self,
    customer_id: CustomerId,
    waiter_id: WaiterId,
    total: Money,
    tip: Money,
  ) -> Result<Meal, CoreError> {
    if !self.customers.contains(customer_id) {
      return Err(CoreError::UnknownCustomer(customer_id));
    }
    if !self.waiters.contains(waiter_id) {
      return Err(CoreError::UnknownWaiter(waiter_id));
    }

    let meal = Meal::new(customer_id, waiter_id, total, tip);
    debug!(id = %meal.id(), %customer_id, %waiter_id, %total, %tip, "registered meal");
    self.meals.register(meal.clone());
    Ok(meal)
  }

  /// Variante sin propina: el payload `tip` queda en cero.
  pub fn create_meal_untipped(
    &mut self,
    customer_id: CustomerId,
    waiter_id: WaiterId,
    total: Money,
  ) -> Result<Meal, CoreError> {
    self.create_meal(customer_id, waiter_id, total, Money::ZERO)
  }

  /// Variante con propina estándar: el porcentaje configurado sobre el total.
  ///
  /// Nótese que el cliente sigue siendo un argumento obligatorio; sólo cambia
  /// cómo se calcula la propina.
  pub fn create_meal_standard_tip(
    &mut self,
    customer_id: CustomerId,
    waiter_id: WaiterId,
    total: Money,
  ) -> Result<Meal, CoreError> {
    let tip = total.percent(self.config.standard_tip_percent);
    self.create_meal(customer_id, waiter_id, total, tip)
  }

  /// Conveniencia del lado del cliente: crea una comida con `customer` como
  /// dueño sin que el llamante tenga que volver a pasar su ID.
  ///
  /// Equivale exactamente a `create_meal(customer.id, waiter_id, total, tip)`.
  pub fn meal_for(
    &mut self,
    customer: &Customer,
    waiter_id: WaiterId,
    total: Money,
    tip: Money,
  ) -> Result<Meal, CoreError> {
    self.create_meal(customer.id, waiter_id, total, tip)
  }

  /// Conveniencia simétrica del lado del mesero.
  pub fn meal_by(
    &mut self,
    waiter: &Waiter,
    customer_id: CustomerId,
    total: Money,
    tip: Money,
  ) -> Result<Meal, CoreError> {
    self.create_meal(customer_id, waiter.id, total, tip)
  }

  // -------- QUERY (read) --------

  pub fn list_customers(&self) -> &[Customer] {
    self.customers.all()
  }

  pub fn list_waiters(&self) -> &[Waiter] {
    self.waiters.all()
  }

  pub fn list_meals(&self) -> &[Meal] {
    self.meals.all()
  }

  pub fn get_customer(&self, id: CustomerId) -> Option<&Customer> {
    self.customers.find(id)
  }

  pub fn get_waiter(&self, id: WaiterId) -> Option<&Waiter> {
    self.waiters.find(id)
  }

  pub fn get_meal(&self, id: MealId) -> Option<&Meal> {
    self.meals.find(id)
  }

  // -------- TRAVERSAL --------

  /// Filtro genérico: comidas cuya referencia del lado `S` es `id`, en orden
  /// de creación. Los dos recorridos públicos son instancias de esta función.
  fn meals_of_side<S: MealSide>(&self, id: S::Id) -> Vec<Meal> {
    self.meals.all().iter().filter(|meal| S::reference(meal) == id).cloned().collect()
  }

  /// Comidas de un cliente, en orden de creación.
  ///
  /// Un ID desconocido no es un error: simplemente no filtra nada.
  pub fn meals_of_customer(&self, customer_id: CustomerId) -> Vec<Meal> {
    self.meals_of_side::<ByCustomer>(customer_id)
  }

  /// Meseros que atendieron a un cliente, en orden de creación de sus
  /// comidas. Los duplicados se conservan: dos comidas con el mismo mesero
  /// producen dos entradas.
  pub fn waiters_of_customer(&self, customer_id: CustomerId) -> Vec<Waiter> {
    self
      .meals_of_side::<ByCustomer>(customer_id)
      .iter()
      .filter_map(|meal| self.waiters.find(meal.waiter_id()).cloned())
      .collect()
  }

  /// Comidas servidas por un mesero, en orden de creación.
  pub fn meals_of_waiter(&self, waiter_id: WaiterId) -> Vec<Meal> {
    self.meals_of_side::<ByWaiter>(waiter_id)
  }

  /// Clientes atendidos por un mesero; recorrido inverso, mismas reglas de
  /// orden y duplicados que [`Self::waiters_of_customer`].
  pub fn customers_of_waiter(&self, waiter_id: WaiterId) -> Vec<Customer> {
    self
      .meals_of_side::<ByWaiter>(waiter_id)
      .iter()
      .filter_map(|meal| self.customers.find(meal.customer_id()).cloned())
      .collect()
  }

  // -------- AGGREGATE --------

  /// Total gastado por un cliente (importe + propina de todas sus comidas).
  pub fn total_spent(&self, customer_id: CustomerId) -> Money {
    self
      .meals_of_side::<ByCustomer>(customer_id)
      .iter()
      .fold(Money::ZERO, |acc, meal| acc.saturating_add(meal.total).saturating_add(meal.tip))
  }

  /// Cliente que dejó la mejor propina a un mesero.
  ///
  /// Ante empate gana la comida registrada primero. `None` si el mesero no ha
  /// servido ninguna comida.
  pub fn best_tipper(&self, waiter_id: WaiterId) -> Option<Customer> {
    let meals = self.meals_of_side::<ByWaiter>(waiter_id);
    let best = meals.iter().max_by(|a, b| a.tip.cmp(&b.tip).then(std::cmp::Ordering::Greater))?;
    self.customers.find(best.customer_id()).cloned()
  }
}
