use comanda_core::domain::Money;
use comanda_core::services::MemoryLedger;

fn main() {
  let mut ledger = MemoryLedger::in_memory();

  let sam = ledger.create_customer("Sam", 28);
  let pat = ledger.create_waiter("Pat", 5);
  let alex = ledger.create_waiter("Alex", 2);

  println!("Registered customer {} with id = {}", sam.name, sam.id);

  ledger
    .create_meal(sam.id, pat.id, Money::from_major(50), Money::from_major(10))
    .expect("failed to register meal");
  ledger
    .create_meal(sam.id, alex.id, Money::from_major(20), Money::from_major(3))
    .expect("failed to register meal");

  let waiters: Vec<String> =
    ledger.waiters_of_customer(sam.id).into_iter().map(|w| w.name).collect();
  println!("Waiters who served {}: {waiters:?}", sam.name);

  let customers = ledger.customers_of_waiter(pat.id);
  println!("Customers served by {}: {customers:?}", pat.name);

  println!("Total spent by {}: {}", sam.name, ledger.total_spent(sam.id));
}
