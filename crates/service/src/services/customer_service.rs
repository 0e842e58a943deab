use tracing::debug;

use crate::dto::{map_all, CustomerDto, RepairDto};
use crate::errors::ServiceError;
use crate::store::SharedStore;

pub struct CustomerService {
    store: SharedStore,
}

impl CustomerService {
    pub fn new(store: SharedStore) -> Self { Self { store } }

    pub async fn get_all(&self) -> Result<Vec<CustomerDto>, ServiceError> {
        let customers = self.store.get_customers().await?;
        if customers.is_empty() {
            return Err(ServiceError::none_at_all("customers"));
        }
        Ok(map_all(customers))
    }

    pub async fn get(&self, id: i32) -> Result<CustomerDto, ServiceError> {
        match self.store.get_customer(id).await? {
            Some(c) => Ok(c.into()),
            None => {
                debug!(id, "customer not found");
                Err(ServiceError::none_for_id("customer", id))
            }
        }
    }

    /// Repairs owned by one customer.
    pub async fn get_repairs(&self, customer_id: i32) -> Result<Vec<RepairDto>, ServiceError> {
        let repairs = self.store.get_customer_repairs(customer_id).await?;
        if repairs.is_empty() {
            return Err(ServiceError::NotFound(format!("No repairs found for customer id: {}", customer_id)));
        }
        Ok(map_all(repairs))
    }
}
