//! CRM module ("scope") allow-list

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// CRM modules the API accepts. Anything outside this set is rejected
/// before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Leads,
    Contacts,
    Accounts,
    Potentials,
    Campaigns,
    Cases,
    Products,
    Vendors,
    Quotes,
    SalesOrders,
    PurchaseOrders,
    Invoices,
}

impl Scope {
    pub const ALL: [Scope; 12] = [
        Scope::Leads,
        Scope::Contacts,
        Scope::Accounts,
        Scope::Potentials,
        Scope::Campaigns,
        Scope::Cases,
        Scope::Products,
        Scope::Vendors,
        Scope::Quotes,
        Scope::SalesOrders,
        Scope::PurchaseOrders,
        Scope::Invoices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Leads => "Leads",
            Scope::Contacts => "Contacts",
            Scope::Accounts => "Accounts",
            Scope::Potentials => "Potentials",
            Scope::Campaigns => "Campaigns",
            Scope::Cases => "Cases",
            Scope::Products => "Products",
            Scope::Vendors => "Vendors",
            Scope::Quotes => "Quotes",
            Scope::SalesOrders => "SalesOrders",
            Scope::PurchaseOrders => "PurchaseOrders",
            Scope::Invoices => "Invoices",
        }
    }
}

impl FromStr for Scope {
    type Err = Error;

    // Module names are matched exactly, case included.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .iter()
            .find(|scope| scope.as_str() == name)
            .copied()
            .ok_or_else(|| Error::Scope(name.to_string()))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
