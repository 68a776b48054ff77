//! Credit package catalog.

use serde::Serialize;

/// A purchasable credit bundle. Prices are in Iranian toman.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditPackage {
    /// Package id (e.g., "starter").
    pub id: &'static str,
    /// Persian display name.
    pub name: &'static str,
    /// Credits granted on purchase.
    pub credits: u32,
    /// Price in toman.
    pub price: u32,
    /// Highlighted in the purchase UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
}

pub(crate) const CREDIT_PACKAGES: &[CreditPackage] = &[
    CreditPackage {
        id: "starter",
        name: "شروع",
        credits: 100,
        price: 49_000,
        popular: None,
    },
    CreditPackage {
        id: "basic",
        name: "پایه",
        credits: 500,
        price: 199_000,
        popular: Some(true),
    },
    CreditPackage {
        id: "pro",
        name: "حرفه‌ای",
        credits: 1500,
        price: 499_000,
        popular: None,
    },
    CreditPackage {
        id: "enterprise",
        name: "سازمانی",
        credits: 5000,
        price: 1_490_000,
        popular: None,
    },
];
