//! Purchase and subscription gating
//!
//! Fetches the product offering, chains straight into a subscription-status
//! check, and resolves purchase attempts. `is_purchased` is sticky: once a
//! session has seen a valid entitlement, nothing in this slice revokes it.

use std::sync::Arc;

use tracing::{debug, info};

use tome_core::clients::StoreClient;
use tome_core::error::PurchaseError;
use tome_core::types::{Product, PurchaseOutcome, SubscriptionStatus, TransactionVerification};

/// Store identifier of the one-year subscription offering
pub const SUBSCRIPTION_PRODUCT_ID: &str = "one_year";

/// Purchase state machine over the injected store client
pub struct PurchaseGate {
    store: Arc<dyn StoreClient>,
    product: Option<Product>,
    is_purchased: bool,
    is_loading: bool,
    is_purchasing: bool,
}

impl PurchaseGate {
    /// Create a gate backed by the given store client
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self {
            store,
            product: None,
            is_purchased: false,
            is_loading: false,
            is_purchasing: false,
        }
    }

    /// Fetch the product offering
    ///
    /// On success the gate stores the product and immediately chains into
    /// [`check_subscription_status`](Self::check_subscription_status); a
    /// failed fetch never triggers the status check.
    pub async fn fetch_product(&mut self) -> Result<(), PurchaseError> {
        self.is_loading = true;

        match self.store.fetch_product(SUBSCRIPTION_PRODUCT_ID).await {
            Ok(Some(product)) => {
                debug!(product = %product.id, "product offering fetched");
                self.product = Some(product);
                self.check_subscription_status().await
            }
            Ok(None) => {
                self.is_loading = false;
                Err(PurchaseError::Fetch("Product is unavailable".to_string()))
            }
            Err(err) => {
                self.is_loading = false;
                Err(PurchaseError::Fetch(err.to_string()))
            }
        }
    }

    /// Check the subscription status for the fetched product
    ///
    /// A subscribed status marks the session purchased. Loading clears on
    /// every outcome.
    pub async fn check_subscription_status(&mut self) -> Result<(), PurchaseError> {
        let Some(product) = self.product.clone() else {
            self.is_loading = false;
            return Ok(());
        };

        match self.store.check_subscription_status(&product).await {
            Ok(status) => {
                if status == Some(SubscriptionStatus::Subscribed) {
                    info!(product = %product.id, "active subscription found");
                    self.is_purchased = true;
                }
                self.is_loading = false;
                Ok(())
            }
            Err(err) => {
                self.is_loading = false;
                Err(PurchaseError::Status(err.to_string()))
            }
        }
    }

    /// Run the purchase flow for the fetched product
    ///
    /// A no-op unless [`purchase_available`](Self::purchase_available).
    /// Only a verified transaction marks the session purchased; the
    /// transaction is finalized with the store afterwards.
    pub async fn purchase(&mut self) -> Result<(), PurchaseError> {
        if !self.purchase_available() {
            return Ok(());
        }
        let Some(product) = self.product.clone() else {
            return Ok(());
        };

        self.is_purchasing = true;

        let outcome = match self.store.purchase(&product).await {
            Ok(outcome) => outcome,
            Err(err) => {
                self.is_purchasing = false;
                return Err(PurchaseError::Purchase(err.to_string()));
            }
        };
        self.is_purchasing = false;

        match outcome {
            PurchaseOutcome::Success(TransactionVerification::Verified(transaction)) => {
                info!(transaction = transaction.id, "purchase verified");
                self.is_purchased = true;
                self.store.finish(&transaction).await;
                Ok(())
            }
            PurchaseOutcome::Success(TransactionVerification::Unverified(_, reason)) => {
                Err(PurchaseError::Verification(reason))
            }
            PurchaseOutcome::Pending => Err(PurchaseError::Pending(
                "The purchase is awaiting approval".to_string(),
            )),
            PurchaseOutcome::UserCancelled => {
                debug!("purchase cancelled by user");
                Ok(())
            }
        }
    }

    /// Whether the purchase button should be enabled
    pub fn purchase_available(&self) -> bool {
        !self.is_loading && !self.is_purchasing && !self.is_purchased && self.product.is_some()
    }

    /// The fetched product offering, if any
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Whether the session holds a valid entitlement
    pub fn is_purchased(&self) -> bool {
        self.is_purchased
    }

    /// Whether the offering fetch/status check is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether a purchase flow is in flight
    pub fn is_purchasing(&self) -> bool {
        self.is_purchasing
    }
}
